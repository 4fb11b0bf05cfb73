mod cli_error;
mod config_error;
mod generate_error;
mod partition_error;
mod remap_error;
mod solve_error;
mod verify_error;

pub use cli_error::CliError;
pub use config_error::ConfigError;
pub use generate_error::GenerateError;
pub use partition_error::PartitionError;
pub use remap_error::RemapError;
pub use solve_error::SolveError;
pub use verify_error::VerifyError;
