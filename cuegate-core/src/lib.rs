//! CUEGATE Core - Cue Types, Filtering and Progression Gating
//!
//! Data types shared by every CUEGATE crate, plus the two query-time
//! decisions that only need those types: filter composition and the
//! progression gate. Everything here is pure and synchronous.

mod config;
mod delivery;
mod entities;
mod enums;
mod error;
mod filter;
mod progression;

pub use config::{CueGateConfig, DEFAULT_MIN_INTERACTIONS, MAX_MIN_INTERACTIONS};
pub use delivery::{select_candidates, Candidate};
pub use entities::{present, EnhancedCue, RawCue, TagSet};
pub use enums::{
    pillar_name, CueStatus, HeatLevel, HeatLevelParseError, KbeDepth, KbeDepthParseError,
    DEFAULT_PILLAR, PILLAR_IDS,
};
pub use error::{ConfigError, CueError, CueResult, RecordError};
pub use filter::{matches_tags, CueQuery};
pub use progression::{is_ready, is_ready_labels, kbe_appropriateness, UserProgress};
