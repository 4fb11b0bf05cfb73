mod load;
mod types;

pub use load::{apply_env_overrides, load, parse_config, CONFIG_FILE_NAME};
pub use types::*;
