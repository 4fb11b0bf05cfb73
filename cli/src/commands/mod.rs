pub mod cli;
pub mod generate;
pub mod partition;
pub mod remap;
pub mod solve;
pub mod verify;
