//! CUEGATE Classify - Enhancement, Tagging and Validation
//!
//! Everything that runs when cues are imported: schema inference, field
//! resolution, tag generation, then validation and batch statistics.
//! All lookups are static tables; nothing here performs I/O.

pub mod tables;

mod enhance;
mod inference;
mod stats;
mod tags;
mod validate;

pub use enhance::{enhance, enhance_batch};
pub use inference::{
    infer_schema, infer_schema_detailed, InferenceSource, SchemaInference, SchemaRule,
    FALLBACK_SCHEMA, SCHEMA_RULES,
};
pub use stats::{batch_statistics, BatchStatistics};
pub use tags::{generate_tags, retag, slug, CueMetadata};
pub use validate::{
    is_valid, validate_batch, validate_enhanced, BatchValidation, CueIssues, FieldIssue,
};

#[cfg(test)]
mod prop_tests {
    use super::*;
    use cuegate_core::{KbeDepth, RawCue};
    use proptest::prelude::*;

    const FAMILIES: &[&str] = &[
        "grip_scan",
        "allowing_gate",
        "story_drop",
        "paradox_key",
        "proof_stamp",
        "sangha_ping",
        "belief_probe",
        "unmapped_family",
    ];
    const RESPONSES: &[&str] = &["tap", "hold", "voice", "slider", "text_short", "mystery"];

    fn arb_raw() -> impl Strategy<Value = RawCue> {
        (
            "[a-z0-9-]{1,12}",
            "[A-Za-z][A-Za-z ?.,']{0,79}",
            proptest::sample::select(RESPONSES),
            proptest::sample::select(FAMILIES),
        )
            .prop_map(|(id, text, response, family)| RawCue::new(id, text, response, family))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_enhanced_is_valid(raw in arb_raw(), batch in 1u32..=3) {
            let cue = enhance(&raw, batch);
            prop_assert!(validate_enhanced(&cue).is_empty(), "{:?}", validate_enhanced(&cue));
        }

        #[test]
        fn prop_enhance_is_deterministic(raw in arb_raw()) {
            prop_assert_eq!(enhance(&raw, 2), enhance(&raw, 2));
        }

        #[test]
        fn prop_inference_always_resolves(text in ".{0,60}", family in "[a-z_]{0,16}") {
            let schema = infer_schema(&text, &family);
            prop_assert!(!schema.is_empty());
        }

        #[test]
        fn prop_depth_is_canonical(raw in arb_raw()) {
            let cue = enhance(&raw, 1);
            prop_assert!(KbeDepth::ALL.iter().any(|k| k.as_str() == cue.kbe_target));
        }
    }
}
