//! Error types for CUEGATE operations

use thiserror::Error;

/// Errors raised when a raw record crosses the import boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("Record {id:?}: required field missing: {field}")]
    RequiredFieldMissing { id: String, field: String },

    #[error("Record {id:?}: invalid value for {field}: {value}")]
    InvalidValue {
        id: String,
        field: String,
        value: String,
    },
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {value} - {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to parse configuration: {reason}")]
    Parse { reason: String },
}

/// Master error type for all CUEGATE errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CueError {
    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for CUEGATE operations.
pub type CueResult<T> = Result<T, CueError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_error_wraps_into_cue_error() {
        let err: CueError = RecordError::RequiredFieldMissing {
            id: "nc-1".to_string(),
            field: "family".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Record error: Record \"nc-1\": required field missing: family"
        );
    }
}
