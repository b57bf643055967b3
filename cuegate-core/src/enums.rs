//! Enum types for cue classification

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// MASTERY DEPTH (KBE)
// ============================================================================

/// Mastery depth a cue targets, and the depth a user currently works at.
///
/// Variants are declared in progression order, so the derived `Ord` is the
/// knowing < believing < embodying sequence the gate relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum KbeDepth {
    /// Awareness
    Knowing,
    /// Integration
    Believing,
    /// Experiential practice
    Embodying,
}

impl KbeDepth {
    /// All depths in progression order.
    pub const ALL: [KbeDepth; 3] = [KbeDepth::Knowing, KbeDepth::Believing, KbeDepth::Embodying];

    /// Canonical lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            KbeDepth::Knowing => "knowing",
            KbeDepth::Believing => "believing",
            KbeDepth::Embodying => "embodying",
        }
    }

    /// Zero-based position in the progression.
    pub fn index(&self) -> usize {
        match self {
            KbeDepth::Knowing => 0,
            KbeDepth::Believing => 1,
            KbeDepth::Embodying => 2,
        }
    }

    /// Parse a label, accepting any case and the single-letter layer codes.
    pub fn from_str_loose(s: &str) -> Result<Self, KbeDepthParseError> {
        match normalize_token(s).as_str() {
            "knowing" | "k" => Ok(KbeDepth::Knowing),
            "believing" | "b" => Ok(KbeDepth::Believing),
            "embodying" | "e" => Ok(KbeDepth::Embodying),
            _ => Err(KbeDepthParseError(s.to_string())),
        }
    }

    /// The next deeper level, if any.
    pub fn next(&self) -> Option<KbeDepth> {
        match self {
            KbeDepth::Knowing => Some(KbeDepth::Believing),
            KbeDepth::Believing => Some(KbeDepth::Embodying),
            KbeDepth::Embodying => None,
        }
    }

    /// Signed number of steps from `self` to `target` (positive = deeper).
    pub fn steps_to(&self, target: KbeDepth) -> i32 {
        target.index() as i32 - self.index() as i32
    }
}

impl fmt::Display for KbeDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KbeDepth {
    type Err = KbeDepthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_loose(s)
    }
}

/// Error when parsing an invalid mastery depth string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KbeDepthParseError(pub String);

impl fmt::Display for KbeDepthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid kbe depth: {}", self.0)
    }
}

impl std::error::Error for KbeDepthParseError {}

// ============================================================================
// INTENSITY (HEAT LEVEL)
// ============================================================================

/// How activating a cue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum HeatLevel {
    Low,
    Medium,
    High,
}

impl HeatLevel {
    pub const ALL: [HeatLevel; 3] = [HeatLevel::Low, HeatLevel::Medium, HeatLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            HeatLevel::Low => "low",
            HeatLevel::Medium => "medium",
            HeatLevel::High => "high",
        }
    }

    pub fn from_str_loose(s: &str) -> Result<Self, HeatLevelParseError> {
        match normalize_token(s).as_str() {
            "low" => Ok(HeatLevel::Low),
            "medium" => Ok(HeatLevel::Medium),
            "high" => Ok(HeatLevel::High),
            _ => Err(HeatLevelParseError(s.to_string())),
        }
    }

    /// One level hotter, saturating at `High`.
    pub fn raised(&self) -> HeatLevel {
        match self {
            HeatLevel::Low => HeatLevel::Medium,
            HeatLevel::Medium | HeatLevel::High => HeatLevel::High,
        }
    }
}

impl fmt::Display for HeatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeatLevel {
    type Err = HeatLevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_loose(s)
    }
}

/// Error when parsing an invalid heat level string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatLevelParseError(pub String);

impl fmt::Display for HeatLevelParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid heat level: {}", self.0)
    }
}

impl std::error::Error for HeatLevelParseError {}

// ============================================================================
// LIFECYCLE STATUS
// ============================================================================

/// Lifecycle status of an enhanced cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum CueStatus {
    #[default]
    Active,
    Draft,
    Archived,
}

impl CueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CueStatus::Active => "active",
            CueStatus::Draft => "draft",
            CueStatus::Archived => "archived",
        }
    }

    /// Only active cues are offered for delivery.
    pub fn is_deliverable(&self) -> bool {
        matches!(self, CueStatus::Active)
    }
}

impl fmt::Display for CueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// PILLARS
// ============================================================================

/// The six thematic pillars, in display order.
pub const PILLAR_IDS: [&str; 6] = ["P-01", "P-02", "P-03", "P-04", "P-05", "P-06"];

/// Pillar used when a schema has no mapping.
pub const DEFAULT_PILLAR: &str = "P-01";

/// Human-readable pillar name.
pub fn pillar_name(pillar_id: &str) -> Option<&'static str> {
    match pillar_id {
        "P-01" => Some("Pause + Ground"),
        "P-02" => Some("Meet Your Needs"),
        "P-03" => Some("Move Your Body"),
        "P-04" => Some("Connect"),
        "P-05" => Some("Show Yourself"),
        "P-06" => Some("Know Self"),
        _ => None,
    }
}

// ============================================================================
// STRING CONVERSIONS
// ============================================================================

fn normalize_token(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
