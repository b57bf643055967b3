//! Filter composition over enhanced cues
//!
//! A query is a conjunction: every required tag present, no excluded tag
//! present, and every supplied dimension constraint matched exactly. There is
//! no OR across dimensions; callers union the results of separate queries.
//! A tag that is both required and excluded yields no matches.

use crate::{EnhancedCue, HeatLevel, KbeDepth, TagSet};
use serde::{Deserialize, Serialize};

/// Tag predicate: all of `required` present and none of `excluded` present.
/// Empty slices match everything.
pub fn matches_tags<S: AsRef<str>>(tags: &TagSet, required: &[S], excluded: &[S]) -> bool {
    required.iter().all(|tag| tags.contains(tag.as_ref()))
        && !excluded.iter().any(|tag| tags.contains(tag.as_ref()))
}

/// Multi-dimensional cue query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct CueQuery {
    pub required_tags: Vec<String>,
    pub excluded_tags: Vec<String>,
    pub pillar_id: Option<String>,
    pub schema: Option<String>,
    pub family: Option<String>,
    pub kbe_target: Option<KbeDepth>,
    pub heat_level: Option<HeatLevel>,
}

impl CueQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require(mut self, tag: impl Into<String>) -> Self {
        self.required_tags.push(tag.into());
        self
    }

    pub fn exclude(mut self, tag: impl Into<String>) -> Self {
        self.excluded_tags.push(tag.into());
        self
    }

    pub fn with_pillar(mut self, pillar_id: impl Into<String>) -> Self {
        self.pillar_id = Some(pillar_id.into());
        self
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    pub fn with_kbe(mut self, kbe: KbeDepth) -> Self {
        self.kbe_target = Some(kbe);
        self
    }

    pub fn with_heat(mut self, heat: HeatLevel) -> Self {
        self.heat_level = Some(heat);
        self
    }

    /// True when the query places no constraint at all.
    pub fn is_empty(&self) -> bool {
        self.required_tags.is_empty()
            && self.excluded_tags.is_empty()
            && self.pillar_id.is_none()
            && self.schema.is_none()
            && self.family.is_none()
            && self.kbe_target.is_none()
            && self.heat_level.is_none()
    }

    /// Check one cue against the query.
    pub fn matches(&self, cue: &EnhancedCue) -> bool {
        if !matches_tags(&cue.tags, self.required_tags.as_slice(), self.excluded_tags.as_slice()) {
            return false;
        }
        if let Some(pillar) = &self.pillar_id {
            if &cue.pillar_id != pillar {
                return false;
            }
        }
        if let Some(schema) = &self.schema {
            if &cue.schema != schema {
                return false;
            }
        }
        if let Some(family) = &self.family {
            if &cue.family != family {
                return false;
            }
        }
        if let Some(kbe) = self.kbe_target {
            if cue.depth() != Some(kbe) {
                return false;
            }
        }
        if let Some(heat) = self.heat_level {
            if cue.heat() != Some(heat) {
                return false;
            }
        }
        true
    }

    /// Select the matching subset, preserving input order.
    pub fn apply<'a>(&self, cues: &'a [EnhancedCue]) -> Vec<&'a EnhancedCue> {
        cues.iter().filter(|cue| self.matches(cue)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(items: &[&str]) -> TagSet {
        items.iter().map(|t| t.to_string()).collect()
    }

    fn cue(id: &str, family: &str, heat: &str, tag_list: &[&str]) -> EnhancedCue {
        EnhancedCue {
            id: id.to_string(),
            family: family.to_string(),
            schema: "control".to_string(),
            kbe_target: "knowing".to_string(),
            heat_level: heat.to_string(),
            pillar_id: "P-01".to_string(),
            tags: tags(tag_list),
            ..EnhancedCue::default()
        }
    }

    #[test]
    fn test_empty_lists_match_all() {
        let empty: [&str; 0] = [];
        assert!(matches_tags(&tags(&["a"]), &empty, &empty));
        assert!(matches_tags(&TagSet::new(), &empty, &empty));
    }

    #[test]
    fn test_required_and_excluded() {
        let set = tags(&["heat_low", "schema_shame"]);
        assert!(matches_tags(&set, &["heat_low"], &["schema_control"]));
        assert!(!matches_tags(&set, &["heat_low", "kbe_knowing"], &[]));
        assert!(!matches_tags(&set, &[], &["schema_shame"]));
    }

    #[test]
    fn test_contradictory_query_matches_nothing() {
        let set = tags(&["heat_low"]);
        assert!(!matches_tags(&set, &["heat_low"], &["heat_low"]));
    }

    #[test]
    fn test_dimension_constraints_and_with_tags() {
        let cues = vec![
            cue("a", "grip_scan", "low", &["heat_low"]),
            cue("b", "curveball", "low", &["heat_low"]),
            cue("c", "grip_scan", "high", &["heat_high"]),
        ];
        let query = CueQuery::new().require("heat_low").with_family("grip_scan");
        let ids: Vec<&str> = query.apply(&cues).iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a"]);

        let by_heat = CueQuery::new().with_heat(HeatLevel::High);
        assert_eq!(by_heat.apply(&cues).len(), 1);
    }

    #[test]
    fn test_typed_dimension_ignores_unrecognized_labels() {
        let cues = vec![cue("x", "grip_scan", "scalding", &[])];
        assert!(CueQuery::new().with_heat(HeatLevel::High).apply(&cues).is_empty());
        assert_eq!(CueQuery::new().apply(&cues).len(), 1);
        assert!(CueQuery::new().is_empty());
    }
}
