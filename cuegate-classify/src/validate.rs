//! Post-enhancement validation
//!
//! Problems are collected, not raised: a record may carry several issues
//! and a batch report lists every invalid record with all of them.

use cuegate_core::{EnhancedCue, HeatLevel, KbeDepth};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// A single problem found on an enhanced cue.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldIssue {
    #[error("Missing {field}")]
    Missing { field: &'static str },

    #[error("Invalid {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
}

/// Check every required field and the enumerated dimensions.
///
/// Enumerated values must be stored in canonical form (`knowing`, not `K`).
pub fn validate_enhanced(cue: &EnhancedCue) -> Vec<FieldIssue> {
    let mut issues = Vec::new();

    let required = [
        ("id", &cue.id),
        ("text_line", &cue.text_line),
        ("response_type", &cue.response_type),
        ("family", &cue.family),
        ("schema", &cue.schema),
        ("kbe_target", &cue.kbe_target),
        ("heat_level", &cue.heat_level),
        ("pillar_id", &cue.pillar_id),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            issues.push(FieldIssue::Missing { field });
        }
    }
    if cue.tags.is_empty() {
        issues.push(FieldIssue::Missing { field: "tags" });
    }
    if cue.batch_number == 0 {
        issues.push(FieldIssue::Missing { field: "batch_number" });
    }
    if cue.batch_name.trim().is_empty() {
        issues.push(FieldIssue::Missing { field: "batch_name" });
    }

    let heat = cue.heat_level.as_str();
    if !heat.trim().is_empty() && !HeatLevel::ALL.iter().any(|h| h.as_str() == heat) {
        issues.push(FieldIssue::InvalidValue {
            field: "heat_level",
            value: cue.heat_level.clone(),
        });
    }
    let kbe = cue.kbe_target.as_str();
    if !kbe.trim().is_empty() && !KbeDepth::ALL.iter().any(|k| k.as_str() == kbe) {
        issues.push(FieldIssue::InvalidValue {
            field: "kbe_target",
            value: cue.kbe_target.clone(),
        });
    }

    issues
}

pub fn is_valid(cue: &EnhancedCue) -> bool {
    validate_enhanced(cue).is_empty()
}

/// All issues for one invalid record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CueIssues {
    pub id: String,
    pub issues: Vec<FieldIssue>,
}

/// Batch validation report.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BatchValidation {
    pub total_count: usize,
    pub valid_count: usize,
    pub invalid_count: usize,
    pub errors: Vec<CueIssues>,
}

impl BatchValidation {
    pub fn all_valid(&self) -> bool {
        self.invalid_count == 0
    }
}

/// Validate a batch. `errors` follows input order.
pub fn validate_batch(cues: &[EnhancedCue]) -> BatchValidation {
    let errors: Vec<CueIssues> = cues
        .iter()
        .filter_map(|cue| {
            let issues = validate_enhanced(cue);
            if issues.is_empty() {
                None
            } else {
                debug!(id = %cue.id, issue_count = issues.len(), "cue failed validation");
                Some(CueIssues {
                    id: cue.id.clone(),
                    issues,
                })
            }
        })
        .collect();

    BatchValidation {
        total_count: cues.len(),
        valid_count: cues.len() - errors.len(),
        invalid_count: errors.len(),
        errors,
    }
}
