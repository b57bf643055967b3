//! Static mapping tables
//!
//! Family and schema keyed lookups used by inference, enhancement and tag
//! generation. Built once on first use and never mutated afterwards.

use cuegate_core::{HeatLevel, KbeDepth};
use once_cell::sync::Lazy;
use std::collections::HashMap;

// ============================================================================
// FAMILY -> MASTERY DEPTH
// ============================================================================

static FAMILY_KBE: Lazy<HashMap<&'static str, KbeDepth>> = Lazy::new(|| {
    use KbeDepth::*;
    HashMap::from([
        ("statement_mirror", Knowing),
        ("belief_probe", Knowing),
        ("witness_switch", Knowing),
        ("somatic_map_tap", Knowing),
        ("grip_scan", Knowing),
        ("story_seed", Knowing),
        ("story_shard", Knowing),
        ("paradox_key", Knowing),
        ("paradox_key_safe", Knowing),
        ("identity_koan", Knowing),
        ("two_column_reality", Believing),
        ("reframe_seed", Believing),
        ("parts_rollcall", Believing),
        ("values_fork", Believing),
        ("allowing_gate", Believing),
        ("paradox_prompt", Believing),
        ("curveball", Believing),
        ("council_rotate", Believing),
        ("practice", Embodying),
        ("proof_stamp", Embodying),
        ("proof_stamp_capture", Embodying),
        ("recall_card_create", Embodying),
        ("recall_card_return", Embodying),
        ("sangha_ping", Embodying),
        ("release_prompt", Embodying),
        ("story_drop", Embodying),
        ("repair_draft", Embodying),
        ("inventory_spark", Embodying),
    ])
});

/// Default target depth for a family. Unmapped families start at knowing.
pub fn kbe_for_family(family: &str) -> KbeDepth {
    FAMILY_KBE
        .get(family)
        .copied()
        .unwrap_or(KbeDepth::Knowing)
}

// ============================================================================
// FAMILY -> SCHEMA DEFAULT
// ============================================================================

static FAMILY_SCHEMA: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("grip_scan", "fusion"),
        ("allowing_gate", "control"),
        ("release_prompt", "control"),
        ("story_drop", "fusion"),
        ("paradox_key", "binary_thinking"),
        ("proof_stamp", "defectiveness"),
        ("inventory_spark", "shame"),
        ("sangha_ping", "abandonment"),
    ])
});

/// Schema a family addresses when the text gives no keyword signal.
pub fn schema_default_for_family(family: &str) -> Option<&'static str> {
    FAMILY_SCHEMA.get(family).copied()
}

// ============================================================================
// SCHEMA -> PILLAR
// ============================================================================

static SCHEMA_PILLAR: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("control", "P-01"),
        ("hypervigilance", "P-01"),
        ("shame", "P-02"),
        ("perfectionism", "P-02"),
        ("failure", "P-02"),
        ("emotional_deprivation", "P-02"),
        ("defectiveness", "P-02"),
        ("dissociation", "P-03"),
        ("abandonment", "P-04"),
        ("trust", "P-04"),
        ("isolation", "P-04"),
        ("vulnerability", "P-05"),
        ("approval_seeking", "P-05"),
        ("subjugation", "P-05"),
        ("binary_thinking", "P-06"),
        ("fusion", "P-06"),
    ])
});

/// Pillar a schema belongs to, if mapped.
pub fn pillar_for_schema(schema: &str) -> Option<&'static str> {
    SCHEMA_PILLAR.get(schema).copied()
}

// ============================================================================
// HEAT LEVEL
// ============================================================================

static FAMILY_HEAT: Lazy<HashMap<&'static str, HeatLevel>> = Lazy::new(|| {
    use HeatLevel::*;
    HashMap::from([
        // Grounding and acceptance work stays gentle.
        ("grip_scan", Low),
        ("somatic_map_tap", Low),
        ("allowing_gate", Low),
        ("release_prompt", Low),
        ("story_drop", Low),
        ("witness_switch", Low),
        ("practice", Low),
        ("recall_card_return", Low),
        ("statement_mirror", Medium),
        ("sangha_ping", Medium),
        ("reframe_seed", Medium),
        ("values_fork", Medium),
        ("parts_rollcall", Medium),
        ("identity_koan", Medium),
        ("story_seed", Medium),
        ("story_shard", Medium),
        ("council_rotate", Medium),
        ("paradox_key_safe", Medium),
        ("recall_card_create", Medium),
        ("repair_draft", Medium),
        ("proof_stamp_capture", Medium),
        // Confrontation and challenge work.
        ("belief_probe", High),
        ("two_column_reality", High),
        ("curveball", High),
        ("paradox_prompt", High),
        ("paradox_key", High),
        ("proof_stamp", High),
        ("inventory_spark", High),
    ])
});

/// Schemas charged enough to push a non-grounding family one level hotter.
const HIGH_CHARGE_SCHEMAS: &[&str] = &[
    "shame",
    "defectiveness",
    "abandonment",
    "emotional_deprivation",
    "vulnerability",
];

/// Base heat for a family. Unmapped families are medium.
pub fn base_heat_for_family(family: &str) -> HeatLevel {
    FAMILY_HEAT.get(family).copied().unwrap_or(HeatLevel::Medium)
}

/// Heat from family and schema together.
///
/// Low-heat (grounding) families never escalate. Other families move one
/// level up when the schema is high-charge.
pub fn compute_heat_level(family: &str, schema: &str) -> HeatLevel {
    let base = base_heat_for_family(family);
    if base == HeatLevel::Low {
        return base;
    }
    if HIGH_CHARGE_SCHEMAS.contains(&schema) {
        base.raised()
    } else {
        base
    }
}

// ============================================================================
// BATCHES
// ============================================================================

/// Marker for batch numbers with no registered name.
pub const UNKNOWN_BATCH: &str = "unknown";

const BATCH_NAMES: &[(u32, &str)] = &[
    (1, "neuroscience_spirit_poetry"),
    (2, "algorithmic_arsenal"),
    (3, "council_of_six"),
];

/// Registered name for a batch number, if any.
pub fn batch_name(batch_number: u32) -> Option<&'static str> {
    BATCH_NAMES
        .iter()
        .find(|(n, _)| *n == batch_number)
        .map(|(_, name)| *name)
}

// ============================================================================
// FAMILY -> CATEGORY / APPROACH
// ============================================================================

static FAMILY_CATEGORY: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("grip_scan", "somatic"),
        ("somatic_map_tap", "somatic"),
        ("allowing_gate", "somatic"),
        ("release_prompt", "somatic"),
        ("belief_probe", "cognitive"),
        ("reframe_seed", "cognitive"),
        ("two_column_reality", "cognitive"),
        ("proof_stamp", "cognitive"),
        ("proof_stamp_capture", "cognitive"),
        ("paradox_prompt", "cognitive"),
        ("paradox_key", "cognitive"),
        ("paradox_key_safe", "cognitive"),
        ("curveball", "cognitive"),
        ("identity_koan", "cognitive"),
        ("witness_switch", "cognitive"),
        ("values_fork", "cognitive"),
        ("parts_rollcall", "cognitive"),
        ("sangha_ping", "relational"),
        ("repair_draft", "relational"),
        ("story_drop", "narrative"),
        ("story_seed", "narrative"),
        ("story_shard", "narrative"),
        ("council_rotate", "narrative"),
        ("statement_mirror", "narrative"),
        ("practice", "practice"),
        ("inventory_spark", "practice"),
        ("recall_card_create", "practice"),
        ("recall_card_return", "practice"),
    ])
});

pub fn family_category(family: &str) -> Option<&'static str> {
    FAMILY_CATEGORY.get(family).copied()
}

const FAMILY_APPROACH_TABLE: &[(&str, &[&str])] = &[
    ("grip_scan", &["somatic", "mindfulness"]),
    ("somatic_map_tap", &["somatic"]),
    ("allowing_gate", &["act", "mindfulness"]),
    ("release_prompt", &["act"]),
    ("story_drop", &["act", "narrative"]),
    ("paradox_key", &["act"]),
    ("paradox_key_safe", &["act"]),
    ("paradox_prompt", &["act"]),
    ("identity_koan", &["act"]),
    ("values_fork", &["act"]),
    ("witness_switch", &["mindfulness", "act"]),
    ("belief_probe", &["cbt"]),
    ("reframe_seed", &["cbt"]),
    ("two_column_reality", &["cbt"]),
    ("proof_stamp", &["cbt"]),
    ("proof_stamp_capture", &["cbt"]),
    ("inventory_spark", &["twelve_step", "cbt"]),
    ("sangha_ping", &["twelve_step"]),
    ("statement_mirror", &["compassion"]),
    ("parts_rollcall", &["ifs"]),
    ("repair_draft", &["dbt"]),
    ("story_seed", &["narrative"]),
    ("story_shard", &["narrative"]),
    ("council_rotate", &["narrative"]),
];

static FAMILY_APPROACHES: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| FAMILY_APPROACH_TABLE.iter().copied().collect());

/// Clinical approach classes for a family. Empty when unmapped.
pub fn family_approaches(family: &str) -> &'static [&'static str] {
    FAMILY_APPROACHES.get(family).copied().unwrap_or(&[])
}

// ============================================================================
// RESPONSE TYPE -> MODALITY / DURATION
// ============================================================================

/// Modality tag for response types with no mapping.
pub const GENERIC_MODALITY: &str = "general";

const TOUCH: &[&str] = &["touch"];
const SCALE: &[&str] = &["touch", "scale"];
const TEXT: &[&str] = &["text"];
const VOICE: &[&str] = &["voice", "audio"];
const VISUAL: &[&str] = &["visual"];

const RESPONSE_MODALITY_TABLE: &[(&str, &[&str])] = &[
    ("tap", TOUCH),
    ("tap_region", TOUCH),
    ("button", TOUCH),
    ("binary", TOUCH),
    ("choice_single", TOUCH),
    ("choice_multi", TOUCH),
    ("sort", TOUCH),
    ("checklist", TOUCH),
    ("slider", SCALE),
    ("slider_0_10", SCALE),
    ("spectrum", SCALE),
    ("text_short", TEXT),
    ("text_1line", TEXT),
    ("one_word", TEXT),
    ("voice", VOICE),
    ("voice10", VOICE),
    ("voice_10s", VOICE),
    ("hold", &["touch", "somatic"]),
    ("body_map", &["touch", "somatic"]),
    ("breath", &["somatic"]),
    ("none", &["passive"]),
    ("witness", VISUAL),
    ("mirror", VISUAL),
    ("paradox", VISUAL),
    ("constellation", VISUAL),
    ("timeline", VISUAL),
    ("comparison", VISUAL),
    ("curveball", VISUAL),
];

static RESPONSE_MODALITIES: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| RESPONSE_MODALITY_TABLE.iter().copied().collect());

/// Modalities implied by a response type.
pub fn response_modalities(response_type: &str) -> &'static [&'static str] {
    RESPONSE_MODALITIES
        .get(response_type)
        .copied()
        .unwrap_or(&[GENERIC_MODALITY])
}

static RESPONSE_DURATION: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("tap", "instant"),
        ("tap_region", "instant"),
        ("button", "instant"),
        ("binary", "instant"),
        ("choice_single", "instant"),
        ("slider", "quick"),
        ("slider_0_10", "quick"),
        ("spectrum", "quick"),
        ("choice_multi", "quick"),
        ("sort", "quick"),
        ("checklist", "quick"),
        ("one_word", "quick"),
        ("body_map", "quick"),
        ("text_short", "short"),
        ("text_1line", "short"),
        ("voice", "short"),
        ("voice10", "short"),
        ("voice_10s", "short"),
        ("hold", "timed"),
        ("breath", "timed"),
    ])
});

/// Duration class for a response type, if mapped.
pub fn response_duration(response_type: &str) -> Option<&'static str> {
    RESPONSE_DURATION.get(response_type).copied()
}

// ============================================================================
// LENS / PROCESS EXPANSIONS
// ============================================================================

const COUNCIL_LENS_TABLE: &[(&str, &[&str])] = &[
    ("billw", &["voice_recovery", "voice_twelve_step"]),
    ("hawkins", &["voice_surrender", "voice_consciousness"]),
    ("mate", &["voice_compassion", "voice_trauma_informed"]),
    ("ramdass", &["voice_presence", "voice_spiritual"]),
    ("watts", &["voice_paradox", "voice_philosophical"]),
    ("therapist", &["voice_clinical"]),
];

const WAY_PROCESS_TABLE: &[(&str, &[&str])] = &[
    ("noticing", &["process_awareness"]),
    ("witnessing", &["process_awareness", "process_decentering"]),
    ("allowing", &["process_acceptance"]),
    ("releasing", &["process_release"]),
    ("choosing", &["process_agency", "process_values"]),
    ("connecting", &["process_connection"]),
    ("integrating", &["process_integration"]),
];

static COUNCIL_LENS_TAGS: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| COUNCIL_LENS_TABLE.iter().copied().collect());

static WAY_PROCESS_TAGS: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| WAY_PROCESS_TABLE.iter().copied().collect());

/// Descriptive tags for a council lens. `bill_w` and `billw` are the same lens.
pub fn council_lens_tags(lens: &str) -> &'static [&'static str] {
    COUNCIL_LENS_TAGS
        .get(compact_key(lens).as_str())
        .copied()
        .unwrap_or(&[])
}

pub fn way_process_tags(process: &str) -> &'static [&'static str] {
    WAY_PROCESS_TAGS
        .get(compact_key(process).as_str())
        .copied()
        .unwrap_or(&[])
}

fn compact_key(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_depth_defaults() {
        assert_eq!(kbe_for_family("grip_scan"), KbeDepth::Knowing);
        assert_eq!(kbe_for_family("allowing_gate"), KbeDepth::Believing);
        assert_eq!(kbe_for_family("sangha_ping"), KbeDepth::Embodying);
        assert_eq!(kbe_for_family("never_heard_of_it"), KbeDepth::Knowing);
    }

    #[test]
    fn test_grounding_is_gentler_than_confrontation() {
        assert!(base_heat_for_family("grip_scan") < base_heat_for_family("belief_probe"));
        assert_eq!(compute_heat_level("grip_scan", "shame"), HeatLevel::Low);
        assert_eq!(compute_heat_level("statement_mirror", "shame"), HeatLevel::High);
        assert_eq!(compute_heat_level("statement_mirror", "control"), HeatLevel::Medium);
        assert_eq!(compute_heat_level("unmapped", "trust"), HeatLevel::Medium);
    }

    #[test]
    fn test_every_schema_default_has_a_pillar() {
        for schema in FAMILY_SCHEMA.values() {
            assert!(pillar_for_schema(schema).is_some(), "{schema} has no pillar");
        }
    }

    #[test]
    fn test_batch_names() {
        assert_eq!(batch_name(2), Some("algorithmic_arsenal"));
        assert_eq!(batch_name(0), None);
        assert_eq!(batch_name(42), None);
    }

    #[test]
    fn test_response_lookups() {
        assert_eq!(response_modalities("voice_10s"), &["voice", "audio"]);
        assert_eq!(response_modalities("interpretive_dance"), &[GENERIC_MODALITY]);
        assert_eq!(response_duration("hold"), Some("timed"));
        assert_eq!(response_duration("none"), None);
    }

    #[test]
    fn test_lens_lookup_ignores_separators() {
        assert_eq!(council_lens_tags("bill_w"), council_lens_tags("billw"));
        assert_eq!(council_lens_tags("Ram Dass"), &["voice_presence", "voice_spiritual"]);
        assert!(council_lens_tags("socrates").is_empty());
        assert!(way_process_tags("wandering").is_empty());
    }
}
