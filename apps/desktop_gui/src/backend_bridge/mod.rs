//! Backend worker: owns the tokio runtime and talks to the script service.

pub mod commands;
pub mod runtime;
