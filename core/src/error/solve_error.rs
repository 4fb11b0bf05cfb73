// core/src/error/solve_error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("the input is empty!")]
    InputEmpty,

    #[error("the given data is not in a valid format!")]
    InvalidFormat { line: usize },

    #[error("the numbers in the input are out of range!")]
    OutOfRange { line: usize },

    #[error("input/output error")]
    Io(#[from] std::io::Error),
}
