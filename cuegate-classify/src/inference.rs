//! Schema inference from cue text
//!
//! Resolution order is fixed: first keyword rule that matches, then the
//! family default, then [`FALLBACK_SCHEMA`]. Rules are evaluated in
//! declaration order, so a text matching several rules resolves to the
//! earliest one. Matching is case-insensitive plain substring search.

use crate::tables::schema_default_for_family;
use serde::Serialize;
use tracing::debug;

/// Schema used when neither keywords nor the family give a signal.
pub const FALLBACK_SCHEMA: &str = "fusion";

/// One row of the keyword rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaRule {
    pub schema: &'static str,
    pub keywords: &'static [&'static str],
}

impl SchemaRule {
    /// `lowered` must already be lowercase.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| lowered.contains(kw))
    }
}

/// Keyword rules in priority order. Add schemas by appending rows.
pub const SCHEMA_RULES: &[SchemaRule] = &[
    SchemaRule {
        schema: "shame",
        keywords: &[
            "shame", "unworthy", "not good enough", "defective", "flawed", "worthless",
            "inadequate", "broken", "damaged",
        ],
    },
    SchemaRule {
        schema: "abandonment",
        keywords: &[
            "abandon", "alone", "left", "rejected", "isolated", "nobody cares", "left behind",
            "forgotten",
        ],
    },
    SchemaRule {
        schema: "control",
        keywords: &[
            "control", "helpless", "powerless", "out of control", "can't handle",
            "overwhelmed", "can't manage",
        ],
    },
    SchemaRule {
        schema: "perfectionism",
        keywords: &[
            "perfect", "mistake", "fail", "not enough", "should", "have to", "must", "always",
            "never good enough",
        ],
    },
    SchemaRule {
        schema: "vulnerability",
        keywords: &[
            "vulnerable", "hurt", "exposed", "unsafe", "danger", "protect", "guard", "threat",
        ],
    },
    SchemaRule {
        schema: "approval_seeking",
        keywords: &[
            "approval", "please", "validate", "accept me", "what will they think",
            "need them to",
        ],
    },
    SchemaRule {
        schema: "failure",
        keywords: &[
            "failure", "failing", "loser", "didn't make it", "not successful", "gave up",
        ],
    },
    SchemaRule {
        schema: "trust",
        keywords: &["trust", "safe", "reliable", "depend", "count on"],
    },
    SchemaRule {
        schema: "emotional_deprivation",
        keywords: &[
            "empty", "hollow", "nothing", "numb", "void", "no one understands", "not seen",
        ],
    },
    SchemaRule {
        schema: "defectiveness",
        keywords: &[
            "something wrong with me", "defective", "fundamentally broken", "can't be fixed",
            "damaged goods",
        ],
    },
    SchemaRule {
        schema: "subjugation",
        keywords: &[
            "give in", "sacrifice", "put others first", "can't say no", "lose myself",
            "disappear",
        ],
    },
    SchemaRule {
        schema: "binary_thinking",
        keywords: &[
            "always", "never", "all or nothing", "black and white", "either", "must be",
            "can't be both",
        ],
    },
    SchemaRule {
        schema: "fusion",
        keywords: &[
            "i am", "this is me", "defines me", "who i am", "my identity", "this thought",
            "this story",
        ],
    },
];

/// Which tier of the resolution order produced a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InferenceSource {
    Keyword,
    FamilyDefault,
    Fallback,
}

/// Inferred schema together with how it was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaInference {
    pub schema: &'static str,
    pub source: InferenceSource,
}

/// Infer a schema, reporting which tier resolved it.
pub fn infer_schema_detailed(text_line: &str, family: &str) -> SchemaInference {
    let lowered = text_line.to_lowercase();

    let inference = if let Some(rule) = SCHEMA_RULES.iter().find(|rule| rule.matches(&lowered)) {
        SchemaInference {
            schema: rule.schema,
            source: InferenceSource::Keyword,
        }
    } else if let Some(schema) = schema_default_for_family(family) {
        SchemaInference {
            schema,
            source: InferenceSource::FamilyDefault,
        }
    } else {
        SchemaInference {
            schema: FALLBACK_SCHEMA,
            source: InferenceSource::Fallback,
        }
    };

    debug!(
        family,
        schema = inference.schema,
        source = ?inference.source,
        "inferred schema"
    );
    inference
}

/// Infer a schema for a cue that was authored without one. Never fails.
pub fn infer_schema(text_line: &str, family: &str) -> &'static str {
    infer_schema_detailed(text_line, family).schema
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_wins_over_family_default() {
        let inference = infer_schema_detailed("I feel so much shame today", "grip_scan");
        assert_eq!(inference.schema, "shame");
        assert_eq!(inference.source, InferenceSource::Keyword);
    }

    #[test]
    fn test_family_default_when_no_keyword() {
        let inference = infer_schema_detailed("Notice the tightness in your chest", "grip_scan");
        assert_eq!(inference.schema, "fusion");
        assert_eq!(inference.source, InferenceSource::FamilyDefault);
        assert_eq!(infer_schema("Can you text someone today?", "sangha_ping"), "abandonment");
    }

    #[test]
    fn test_universal_fallback() {
        let inference = infer_schema_detailed("Look up.", "unregistered_family");
        assert_eq!(inference.schema, FALLBACK_SCHEMA);
        assert_eq!(inference.source, InferenceSource::Fallback);
    }

    #[test]
    fn test_earlier_rule_wins_on_overlap() {
        // "always" belongs to both perfectionism and binary_thinking.
        assert_eq!(infer_schema("You always do this", "x"), "perfectionism");
        // shame is declared before control.
        assert_eq!(infer_schema("Out of control and full of shame", "x"), "shame");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(infer_schema("TRUST the process", "x"), "trust");
    }

    #[test]
    fn test_substring_overmatch_is_preserved() {
        // "left" inside "leftover" still counts.
        assert_eq!(infer_schema("Eat the leftover soup", "x"), "abandonment");
    }

    #[test]
    fn test_every_rule_has_keywords() {
        for rule in SCHEMA_RULES {
            assert!(!rule.keywords.is_empty(), "{} has no keywords", rule.schema);
        }
    }
}
