//! CUEGATE Test Utilities
//!
//! Shared test infrastructure for the CUEGATE workspace:
//! - Proptest generators for raw cues and the enumerated dimensions
//! - Fixtures for the common cue shapes and a mixed collection
//! - Assertions for classification completeness and delivery decisions

// Re-export core types for convenience
pub use cuegate_core::{
    CueGateConfig, CueQuery, CueStatus, EnhancedCue, HeatLevel, KbeDepth, RawCue, TagSet,
    UserProgress, PILLAR_IDS,
};

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for generating CUEGATE inputs.

    use super::*;
    use proptest::prelude::*;

    /// Families with table entries, plus one that has none.
    pub const KNOWN_FAMILIES: &[&str] = &[
        "grip_scan",
        "allowing_gate",
        "release_prompt",
        "story_drop",
        "paradox_key",
        "proof_stamp",
        "inventory_spark",
        "sangha_ping",
        "belief_probe",
        "witness_switch",
        "values_fork",
        "unregistered_family",
    ];

    pub const RESPONSE_TYPES: &[&str] = &[
        "tap", "hold", "breath", "voice", "slider", "text_short", "witness", "none", "mystery",
    ];

    /// Schema labels with a pillar, plus one without.
    pub const SCHEMAS: &[&str] = &[
        "shame",
        "abandonment",
        "control",
        "perfectionism",
        "vulnerability",
        "trust",
        "binary_thinking",
        "fusion",
        "uncharted",
    ];

    pub const LENSES: &[&str] = &["billw", "watts", "mate", "Ram Dass"];

    pub const PROCESSES: &[&str] = &["noticing", "allowing", "witnessing"];

    /// Phrases that trip specific inference rules and content tags.
    const TEXT_FRAGMENTS: &[&str] = &[
        "Notice the tightness in your chest",
        "Can you text someone today?",
        "What if the shame is just weather",
        "You always have to be perfect",
        "Try letting the thought pass",
        "I am this story",
        "Nobody cares when I'm left behind",
        "Let yourself feel the anger",
        "Look up",
    ];

    // === Enum Generators ===

    pub fn arb_kbe_depth() -> impl Strategy<Value = KbeDepth> {
        prop_oneof![
            Just(KbeDepth::Knowing),
            Just(KbeDepth::Believing),
            Just(KbeDepth::Embodying),
        ]
    }

    pub fn arb_heat_level() -> impl Strategy<Value = HeatLevel> {
        prop_oneof![
            Just(HeatLevel::Low),
            Just(HeatLevel::Medium),
            Just(HeatLevel::High),
        ]
    }

    pub fn arb_cue_status() -> impl Strategy<Value = CueStatus> {
        prop_oneof![
            Just(CueStatus::Active),
            Just(CueStatus::Draft),
            Just(CueStatus::Archived),
        ]
    }

    pub fn arb_user_progress() -> impl Strategy<Value = UserProgress> {
        (arb_kbe_depth(), 0u32..10).prop_map(|(depth, count)| UserProgress::new(depth, count))
    }

    // === Record Generators ===

    /// Display text mixing known fragments with free text.
    pub fn arb_text_line() -> impl Strategy<Value = String> {
        prop_oneof![
            prop::sample::select(TEXT_FRAGMENTS).prop_map(str::to_string),
            "[A-Z][a-z ,.?']{0,60}",
        ]
    }

    /// A raw cue that passes boundary validation, with a random subset of
    /// the optional fields supplied.
    pub fn arb_raw_cue() -> impl Strategy<Value = RawCue> {
        (
            "nc-[0-9]{1,5}",
            arb_text_line(),
            prop::sample::select(RESPONSE_TYPES),
            prop::sample::select(KNOWN_FAMILIES),
            prop::option::of(prop::sample::select(SCHEMAS)),
            prop::option::of(arb_kbe_depth()),
            prop::option::of(arb_heat_level()),
            prop::option::of(prop::sample::select(PILLAR_IDS.to_vec())),
            prop::option::of(prop::sample::select(LENSES)),
            prop::option::of(prop::sample::select(PROCESSES)),
        )
            .prop_map(
                |(id, text, response, family, schema, kbe, heat, pillar, lens, process)| RawCue {
                    schema: schema.map(str::to_string),
                    kbe_target: kbe.map(|k| k.as_str().to_string()),
                    heat_level: heat.map(|h| h.as_str().to_string()),
                    pillar_id: pillar.map(str::to_string),
                    council_lens: lens.map(str::to_string),
                    way_process: process.map(str::to_string),
                    ..RawCue::new(id, text, response, family)
                },
            )
    }

    /// A hand-built enhanced cue with arbitrary but recognized dimensions.
    pub fn arb_enhanced_cue() -> impl Strategy<Value = EnhancedCue> {
        (
            "nc-[0-9]{1,5}",
            prop::sample::select(KNOWN_FAMILIES),
            prop::sample::select(SCHEMAS),
            arb_kbe_depth(),
            arb_heat_level(),
            prop::sample::select(PILLAR_IDS.to_vec()),
            arb_cue_status(),
        )
            .prop_map(|(id, family, schema, kbe, heat, pillar, status)| {
                let tags: TagSet = [
                    format!("family_{family}"),
                    format!("schema_{schema}"),
                    format!("kbe_{kbe}"),
                    format!("heat_{heat}"),
                ]
                .into_iter()
                .collect();
                EnhancedCue {
                    id,
                    text_line: "Generated cue.".to_string(),
                    response_type: "tap".to_string(),
                    family: family.to_string(),
                    schema: schema.to_string(),
                    kbe_target: kbe.as_str().to_string(),
                    heat_level: heat.as_str().to_string(),
                    pillar_id: pillar.to_string(),
                    tags,
                    batch_number: 2,
                    batch_name: "algorithmic_arsenal".to_string(),
                    status,
                    ..EnhancedCue::default()
                }
            })
    }
}

// ============================================================================
// TEST FIXTURES
// ============================================================================

pub mod fixtures {
    //! Pre-built cues for common testing scenarios.

    use super::*;
    use cuegate_classify::enhance_batch;

    /// A grounding cue with only the required fields.
    pub fn grip_scan_cue() -> RawCue {
        RawCue::new(
            "nc-grip-001",
            "Notice the tightness in your chest",
            "tap",
            "grip_scan",
        )
    }

    /// A relational cue phrased as a question.
    pub fn sangha_ping_cue() -> RawCue {
        RawCue::new(
            "nc-sangha-001",
            "Can you text someone today?",
            "text_short",
            "sangha_ping",
        )
    }

    /// A council-of-six cue carrying lens, process and heat.
    pub fn council_cue() -> RawCue {
        RawCue::new(
            "nc-council-001",
            "What if you let the fear sit beside you?",
            "voice",
            "allowing_gate",
        )
        .with_schema("vulnerability")
        .with_heat_level("medium")
        .with_council_lens("Ram Dass")
        .with_way_process("allowing")
    }

    /// Raw cues spanning every family the tables know about, and a few
    /// that fall through to defaults.
    pub fn raw_collection() -> Vec<RawCue> {
        const ROWS: &[(&str, &str, &str)] = &[
            ("grip_scan", "tap", "Notice the tightness in your chest"),
            ("grip_scan", "hold", "Press your feet into the floor"),
            ("allowing_gate", "breath", "Let yourself feel the anger"),
            ("release_prompt", "tap", "You are out of control and that is fine"),
            ("story_drop", "text_short", "What story is your mind telling?"),
            ("paradox_key", "witness", "Can you be both afraid and brave?"),
            ("proof_stamp", "text_short", "Write one thing you did well"),
            ("inventory_spark", "slider", "How much guilt is here right now?"),
            ("sangha_ping", "text_short", "Can you text someone today?"),
            ("belief_probe", "tap", "Is it true that you always fail?"),
            ("witness_switch", "none", "Watch the thought like a cloud"),
            ("values_fork", "choice_single", "Pick the option your future self chooses"),
            ("unregistered_family", "mystery", "Look up"),
        ];
        ROWS.iter()
            .enumerate()
            .map(|(i, (family, response, text))| {
                RawCue::new(format!("nc-mix-{i:03}"), *text, *response, *family)
            })
            .collect()
    }

    /// `raw_collection` enhanced as batch 1.
    pub fn mixed_collection() -> Vec<EnhancedCue> {
        enhance_batch(&raw_collection(), 1)
    }

    /// The raw collection serialized as the CLI reads it.
    pub fn raw_collection_json() -> String {
        serde_json::to_string_pretty(&raw_collection()).unwrap_or_default()
    }

    pub fn beginner() -> UserProgress {
        UserProgress::new(KbeDepth::Knowing, 0)
    }

    pub fn ready_believer() -> UserProgress {
        UserProgress::new(KbeDepth::Believing, 3)
    }
}

// ============================================================================
// CUSTOM ASSERTIONS
// ============================================================================

pub mod assertions {
    //! Assertion helpers for CUEGATE-specific checks.

    use super::*;
    use cuegate_classify::validate_enhanced;

    /// Assert that a cue has every field resolved and passes validation.
    #[track_caller]
    pub fn assert_fully_classified(cue: &EnhancedCue) {
        let issues = validate_enhanced(cue);
        assert!(
            issues.is_empty(),
            "Expected {} to be fully classified, got: {:?}",
            cue.id,
            issues
        );
        assert!(cue.depth().is_some(), "Unrecognized kbe_target on {}", cue.id);
        assert!(cue.heat().is_some(), "Unrecognized heat_level on {}", cue.id);
    }

    #[track_caller]
    pub fn assert_has_tags(cue: &EnhancedCue, expected: &[&str]) {
        for tag in expected {
            assert!(
                cue.has_tag(tag),
                "Expected tag {:?} on {}, got: {:?}",
                tag,
                cue.id,
                cue.tags
            );
        }
    }

    #[track_caller]
    pub fn assert_lacks_tags(cue: &EnhancedCue, unexpected: &[&str]) {
        for tag in unexpected {
            assert!(
                !cue.has_tag(tag),
                "Unexpected tag {:?} on {}",
                tag,
                cue.id
            );
        }
    }

    /// Assert exactly one of the three format tags is present.
    #[track_caller]
    pub fn assert_single_format(cue: &EnhancedCue) {
        let count = ["question", "invitation", "statement"]
            .iter()
            .filter(|f| cue.has_tag(f))
            .count();
        assert_eq!(count, 1, "Expected one format tag on {}, got: {:?}", cue.id, cue.tags);
    }

    /// Assert that every cue in `selected` would be allowed for `progress`.
    #[track_caller]
    pub fn assert_all_deliverable(selected: &[&EnhancedCue], progress: &UserProgress, min: u32) {
        for cue in selected {
            let depth = cue.depth();
            assert!(
                depth.is_some_and(|d| progress.allows(d, min)),
                "{} at {:?} should not be deliverable to {:?}",
                cue.id,
                cue.kbe_target,
                progress
            );
        }
    }

    #[track_caller]
    pub fn assert_config_valid(config: &CueGateConfig) {
        assert!(
            config.validate().is_ok(),
            "Expected valid config, got error: {:?}",
            config.validate()
        );
    }
}

// ============================================================================
// TESTS
// ============================================================================
