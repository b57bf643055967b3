//! Candidate selection for the rendering collaborator
//!
//! Narrows a collection to cues that are active, match the query, and pass
//! the progression gate for the user. Final sequencing is the renderer's job.

use crate::{kbe_appropriateness, CueGateConfig, CueQuery, EnhancedCue, UserProgress};
use tracing::debug;

/// A deliverable cue with its depth-fit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub cue: &'a EnhancedCue,
    pub score: u8,
}

/// Select deliverable candidates, best depth fit first.
///
/// Cues with an unrecognized `kbe_target` are never delivered. Ties keep
/// input order. The list is truncated to `config.max_candidates` when set.
pub fn select_candidates<'a>(
    cues: &'a [EnhancedCue],
    query: &CueQuery,
    progress: &UserProgress,
    config: &CueGateConfig,
) -> Vec<Candidate<'a>> {
    let min_required = config.min_interactions;

    let matched: Vec<&EnhancedCue> = cues
        .iter()
        .filter(|cue| cue.status.is_deliverable())
        .filter(|cue| query.matches(cue))
        .collect();
    let matched_count = matched.len();

    let mut candidates: Vec<Candidate<'a>> = matched
        .into_iter()
        .filter_map(|cue| {
            let target = cue.depth()?;
            if !progress.allows(target, min_required) {
                return None;
            }
            Some(Candidate {
                cue,
                score: kbe_appropriateness(target, progress, min_required),
            })
        })
        .collect();

    candidates.sort_by(|a, b| b.score.cmp(&a.score));

    if let Some(limit) = config.max_candidates {
        candidates.truncate(limit);
    }

    debug!(
        total = cues.len(),
        matched = matched_count,
        delivered = candidates.len(),
        depth = %progress.current_depth,
        interactions = progress.interactions_at_current,
        "selected delivery candidates"
    );

    candidates
}
