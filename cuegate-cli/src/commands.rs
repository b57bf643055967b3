//! Command implementations
//!
//! Each command takes already-read input text and returns a serializable
//! result; reading files and printing happen in the binary.

use crate::error::{CliError, CliResult};
use cuegate_classify::{
    batch_statistics, enhance_batch, validate_batch, BatchStatistics, BatchValidation,
};
use cuegate_core::{
    is_ready, select_candidates, CueGateConfig, CueQuery, EnhancedCue, KbeDepth, RawCue,
    RecordError, UserProgress,
};
use serde::Serialize;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Path value that means stdin or stdout.
pub const STDIO: &str = "-";

// ============================================================================
// I/O
// ============================================================================

pub fn read_input(path: &Path) -> CliResult<String> {
    let mut content = String::new();
    if path.as_os_str() == STDIO {
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })?;
    } else {
        content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(content)
}

/// Pretty JSON to `output`, or stdout when `output` is `None`.
pub fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> CliResult<()> {
    let mut rendered = serde_json::to_string_pretty(value)?;
    rendered.push('\n');
    match output {
        Some(path) if path.as_os_str() != STDIO => {
            std::fs::write(path, rendered).map_err(|source| CliError::Write {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => std::io::stdout()
            .lock()
            .write_all(rendered.as_bytes())
            .map_err(CliError::Stdout),
    }
}

/// Defaults, then the TOML file, then the environment.
pub fn load_config(path: Option<&Path>) -> CliResult<CueGateConfig> {
    let mut config = CueGateConfig::default();
    if let Some(path) = path {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        config = config.merge_toml_str(&content)?;
    }
    Ok(config.merge_env()?)
}

pub fn parse_raw(input: &str) -> CliResult<Vec<RawCue>> {
    Ok(serde_json::from_str(input)?)
}

pub fn parse_enhanced(input: &str) -> CliResult<Vec<EnhancedCue>> {
    Ok(serde_json::from_str(input)?)
}

// ============================================================================
// ENHANCE
// ============================================================================

/// Enhanced records plus the raw records rejected at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhanceReport {
    pub cues: Vec<EnhancedCue>,
    pub skipped: Vec<RecordError>,
}

pub fn run_enhance(input: &str, batch_number: u32) -> CliResult<EnhanceReport> {
    let raws = parse_raw(input)?;
    let total = raws.len();

    let mut accepted = Vec::with_capacity(total);
    let mut skipped = Vec::new();
    for raw in raws {
        match raw.check_boundary() {
            Ok(()) => accepted.push(raw),
            Err(err) => {
                warn!(error = %err, "skipping record");
                skipped.push(err);
            }
        }
    }

    let cues = enhance_batch(&accepted, batch_number);
    info!(
        total,
        enhanced = cues.len(),
        skipped = skipped.len(),
        batch_number,
        "enhancement complete"
    );
    Ok(EnhanceReport { cues, skipped })
}

// ============================================================================
// VALIDATE / STATS
// ============================================================================

pub fn run_validate(input: &str) -> CliResult<BatchValidation> {
    let cues = parse_enhanced(input)?;
    let report = validate_batch(&cues);
    info!(
        total = report.total_count,
        invalid = report.invalid_count,
        "validation complete"
    );
    Ok(report)
}

/// Fail when strict validation is on and anything was invalid.
pub fn enforce_strict(report: &BatchValidation, config: &CueGateConfig) -> CliResult<()> {
    if config.strict_validation && !report.all_valid() {
        return Err(CliError::ValidationFailed {
            invalid: report.invalid_count,
            total: report.total_count,
        });
    }
    Ok(())
}

pub fn run_stats(input: &str) -> CliResult<BatchStatistics> {
    let cues = parse_enhanced(input)?;
    Ok(batch_statistics(&cues))
}

// ============================================================================
// SELECT / GATE
// ============================================================================

/// One candidate as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateView {
    pub score: u8,
    pub cue: EnhancedCue,
}

pub fn run_select(
    input: &str,
    query: &CueQuery,
    progress: &UserProgress,
    config: &CueGateConfig,
) -> CliResult<Vec<CandidateView>> {
    let cues = parse_enhanced(input)?;
    let candidates = select_candidates(&cues, query, progress, config)
        .into_iter()
        .map(|c| CandidateView {
            score: c.score,
            cue: c.cue.clone(),
        })
        .collect();
    Ok(candidates)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GateReport {
    pub target: KbeDepth,
    pub current: KbeDepth,
    pub interactions_at_current: u32,
    pub min_required: u32,
    pub ready: bool,
}

pub fn run_gate(
    target: KbeDepth,
    current: KbeDepth,
    interactions_at_current: u32,
    min_required: u32,
) -> GateReport {
    GateReport {
        target,
        current,
        interactions_at_current,
        min_required,
        ready: is_ready(target, current, interactions_at_current, min_required),
    }
}

/// Resolve an optional output path, treating `-` as stdout.
pub fn output_path(output: &Option<PathBuf>) -> Option<&Path> {
    output.as_deref().filter(|p| p.as_os_str() != STDIO)
}
