// Library root: re-exports all modules so integration tests can drive the
// same pipeline the binary runs.

pub mod cli;
pub mod config;
pub mod report;
pub mod squad;
