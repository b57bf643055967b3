//! CUEGATE CLI - import boundary and query surface
//!
//! The binary in `main.rs` parses arguments and wires these modules
//! together; the modules are public so integration tests can drive the
//! same code paths without spawning a process.

pub mod commands;
pub mod error;
pub mod telemetry;

pub use error::{CliError, CliResult};
