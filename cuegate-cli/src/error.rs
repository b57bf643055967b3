//! CLI error type

use cuegate_core::{ConfigError, CueError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Stdout(#[source] std::io::Error),

    #[error("Malformed JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Cue(#[from] CueError),

    #[error("{invalid} of {total} records failed validation")]
    ValidationFailed { invalid: usize, total: usize },

    #[error("Failed to initialize logging: {0}")]
    Telemetry(String),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Cue(err.into())
    }
}

impl CliError {
    /// Process exit code. Validation failures are distinguished from
    /// everything else so scripts can tell bad data from bad invocations.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::ValidationFailed { .. } => 2,
            _ => 1,
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failure_exit_code() {
        let err = CliError::ValidationFailed {
            invalid: 2,
            total: 10,
        };
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "2 of 10 records failed validation");
    }

    #[test]
    fn test_config_error_converts() {
        let err: CliError = ConfigError::Parse {
            reason: "bad".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("bad"));
    }
}
