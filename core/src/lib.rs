//! Small command line utilities: a random range remapper, a header/data/trailer
//! line partitioner, a differential echo verifier, and the savehouse solver and
//! graph generator it is usually pointed at.

pub mod api;
pub mod config;
pub mod error;
pub mod generate;
pub mod partition;
pub mod remap;
pub mod solve;
pub mod verify;
