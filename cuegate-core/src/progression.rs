//! Progression gate
//!
//! Decides whether a user working at one mastery depth may be served a cue
//! targeting another. Pure: the interaction count comes from the caller.

use crate::{KbeDepth, DEFAULT_MIN_INTERACTIONS};
use serde::{Deserialize, Serialize};

/// Readiness decision for a single (target, current) pair.
///
/// - at level: always ready
/// - review (shallower): always ready
/// - one step deeper: ready once `interactions_at_current >= min_required`
/// - two or more steps deeper: never ready
pub fn is_ready(
    target: KbeDepth,
    current: KbeDepth,
    interactions_at_current: u32,
    min_required: u32,
) -> bool {
    match current.steps_to(target) {
        steps if steps <= 0 => true,
        1 => interactions_at_current >= min_required,
        _ => false,
    }
}

/// [`is_ready`] over stored labels. Unrecognized depth labels are never ready.
pub fn is_ready_labels(
    target: &str,
    current: &str,
    interactions_at_current: u32,
    min_required: u32,
) -> bool {
    match (KbeDepth::from_str_loose(target), KbeDepth::from_str_loose(current)) {
        (Ok(target), Ok(current)) => is_ready(target, current, interactions_at_current, min_required),
        _ => false,
    }
}

/// A user's progression state, owned by the interaction-logging collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserProgress {
    pub current_depth: KbeDepth,
    pub interactions_at_current: u32,
}

impl Default for UserProgress {
    fn default() -> Self {
        Self {
            current_depth: KbeDepth::Knowing,
            interactions_at_current: 0,
        }
    }
}

impl UserProgress {
    pub fn new(current_depth: KbeDepth, interactions_at_current: u32) -> Self {
        Self {
            current_depth,
            interactions_at_current,
        }
    }

    /// Whether a cue at `target` may be served now.
    pub fn allows(&self, target: KbeDepth, min_required: u32) -> bool {
        is_ready(target, self.current_depth, self.interactions_at_current, min_required)
    }

    /// Whether the next depth has unlocked. False at the deepest level.
    pub fn ready_for_next(&self, min_required: u32) -> bool {
        self.current_depth.next().is_some() && self.interactions_at_current >= min_required
    }

    /// [`UserProgress::allows`] with the default threshold.
    pub fn allows_default(&self, target: KbeDepth) -> bool {
        self.allows(target, DEFAULT_MIN_INTERACTIONS)
    }
}

/// Relative fit of a cue's depth for a user, 0-100. Higher is a better fit.
///
/// Used to order candidates, never to admit them: admission is [`is_ready`].
pub fn kbe_appropriateness(target: KbeDepth, progress: &UserProgress, min_required: u32) -> u8 {
    match progress.current_depth.steps_to(target) {
        0 => 80,
        1 if progress.ready_for_next(min_required) => 90,
        1 => 50,
        steps if steps > 1 => 20,
        _ => 60,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KbeDepth::*;

    #[test]
    fn test_believing_user_unlocks_embodying_at_threshold() {
        assert!(!is_ready(Embodying, Believing, 2, 3));
        assert!(is_ready(Embodying, Believing, 3, 3));
    }

    #[test]
    fn test_review_always_allowed() {
        assert!(is_ready(Knowing, Believing, 0, 3));
        assert!(is_ready(Knowing, Embodying, 0, 3));
    }

    #[test]
    fn test_two_step_jump_never_allowed() {
        assert!(!is_ready(Embodying, Knowing, 10, 3));
        assert!(!is_ready(Embodying, Knowing, u32::MAX, 0));
    }

    #[test]
    fn test_labels_fail_closed() {
        assert!(is_ready_labels("believing", "Knowing", 3, 3));
        assert!(!is_ready_labels("transcending", "knowing", 99, 3));
        assert!(!is_ready_labels("knowing", "", 99, 3));
    }

    #[test]
    fn test_user_progress_ready_for_next() {
        assert!(UserProgress::new(Knowing, 3).ready_for_next(3));
        assert!(!UserProgress::new(Embodying, 30).ready_for_next(3));
        assert!(UserProgress::default().allows_default(Knowing));
        assert!(!UserProgress::default().allows_default(Believing));
    }

    #[test]
    fn test_appropriateness_ordering() {
        let ready = UserProgress::new(Knowing, 5);
        let fresh = UserProgress::new(Believing, 0);
        assert_eq!(kbe_appropriateness(Believing, &ready, 3), 90);
        assert_eq!(kbe_appropriateness(Knowing, &ready, 3), 80);
        assert_eq!(kbe_appropriateness(Knowing, &fresh, 3), 60);
        assert_eq!(kbe_appropriateness(Embodying, &fresh, 3), 50);
        assert_eq!(kbe_appropriateness(Embodying, &ready, 3), 20);
    }
}
