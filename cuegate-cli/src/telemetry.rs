//! Logging initialization
//!
//! Logs always go to stderr so stdout carries only JSON results.

use crate::error::{CliError, CliResult};
use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor `CUEGATE_LOG` is set.
pub const DEFAULT_FILTER: &str = "warn,cuegate=info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Telemetry configuration from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// `EnvFilter` directive string
    pub filter: String,
    pub format: LogFormat,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl TelemetryConfig {
    /// Environment variables:
    /// - `RUST_LOG`: filter directive, wins over `CUEGATE_LOG`
    /// - `CUEGATE_LOG`: filter directive (default: `warn,cuegate=info`)
    /// - `CUEGATE_LOG_FORMAT`: `json` or `pretty` (default: pretty)
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let filter = non_blank("RUST_LOG")
            .or_else(|| non_blank("CUEGATE_LOG"))
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let format = match lookup("CUEGATE_LOG_FORMAT").as_deref().map(str::trim) {
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Self { filter, format }
    }

    /// Raise the filter to debug for all cuegate crates.
    pub fn verbose(mut self) -> Self {
        self.filter = format!("{},cuegate=debug", self.filter);
        self
    }
}

/// Install the global subscriber. Call once, before any logging.
pub fn init_tracing(config: &TelemetryConfig) -> CliResult<()> {
    let filter = EnvFilter::try_new(&config.filter)
        .map_err(|e| CliError::Telemetry(format!("invalid filter {:?}: {}", config.filter, e)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };
    result.map_err(|e| CliError::Telemetry(e.to_string()))?;

    tracing::debug!(filter = %config.filter, format = ?config.format, "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        assert_eq!(TelemetryConfig::from_vars(vars(&[])), TelemetryConfig::default());
    }

    #[test]
    fn test_default_filter_quiets_dependencies() {
        assert_eq!(DEFAULT_FILTER, "warn,cuegate=info");
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
        assert!(EnvFilter::try_new(TelemetryConfig::default().verbose().filter).is_ok());
    }

    #[test]
    fn test_rust_log_wins() {
        let config = TelemetryConfig::from_vars(vars(&[
            ("RUST_LOG", "trace"),
            ("CUEGATE_LOG", "cuegate=debug"),
        ]));
        assert_eq!(config.filter, "trace");
    }

    #[test]
    fn test_cuegate_log_and_json_format() {
        let config = TelemetryConfig::from_vars(vars(&[
            ("CUEGATE_LOG", "cuegate_classify=trace"),
            ("CUEGATE_LOG_FORMAT", "JSON"),
        ]));
        assert_eq!(config.filter, "cuegate_classify=trace");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn test_verbose_appends_debug() {
        let config = TelemetryConfig::default().verbose();
        assert!(config.filter.ends_with("cuegate=debug"));
    }
}
