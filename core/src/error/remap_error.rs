// core/src/error/remap_error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemapError {
    #[error("cannot draw {count} distinct values from [{low}, {high})")]
    RangeTooSmall { count: usize, low: i32, high: i32 },

    #[error("output write failed")]
    Io(#[from] std::io::Error),
}
