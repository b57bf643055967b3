//! Enhancement pipeline
//!
//! Turns a [`RawCue`] into a fully classified [`EnhancedCue`]. Explicitly
//! supplied fields are never overwritten; missing ones are resolved in a
//! fixed order (schema, depth, heat, pillar) because later steps read the
//! earlier results. Tags are always regenerated last.

use crate::inference::infer_schema;
use crate::tables::{
    batch_name, compute_heat_level, kbe_for_family, pillar_for_schema, UNKNOWN_BATCH,
};
use crate::tags::retag;
use cuegate_core::{
    present, CueStatus, EnhancedCue, HeatLevel, KbeDepth, RawCue, TagSet, DEFAULT_PILLAR,
};
use tracing::warn;

/// Enhance one raw cue. Infallible: every missing field has a fallback.
///
/// Expects a record that passed [`RawCue::check_boundary`]. A supplied
/// `kbe_target` or `heat_level` that does not parse is carried through
/// verbatim, and the result then fails validation.
pub fn enhance(raw: &RawCue, batch_number: u32) -> EnhancedCue {
    let name = resolve_batch_name(batch_number);
    enhance_named(raw, batch_number, name)
}

/// Enhance a batch, preserving input order.
pub fn enhance_batch(raws: &[RawCue], batch_number: u32) -> Vec<EnhancedCue> {
    let name = resolve_batch_name(batch_number);
    raws.iter()
        .map(|raw| enhance_named(raw, batch_number, name))
        .collect()
}

fn resolve_batch_name(batch_number: u32) -> &'static str {
    batch_name(batch_number).unwrap_or_else(|| {
        warn!(batch_number, fallback = UNKNOWN_BATCH, "unregistered batch number");
        UNKNOWN_BATCH
    })
}

fn enhance_named(raw: &RawCue, batch_number: u32, batch_name: &str) -> EnhancedCue {
    let schema = match present(&raw.schema) {
        Some(schema) => schema.to_string(),
        None => infer_schema(&raw.text_line, &raw.family).to_string(),
    };

    let kbe_target = match present(&raw.kbe_target) {
        Some(kbe) => {
            canonical_label(kbe, |s| KbeDepth::from_str_loose(s).ok().map(|k| k.as_str()))
        }
        None => kbe_for_family(&raw.family).as_str().to_string(),
    };

    let heat_level = match present(&raw.heat_level) {
        Some(heat) => {
            canonical_label(heat, |s| HeatLevel::from_str_loose(s).ok().map(|h| h.as_str()))
        }
        None => compute_heat_level(&raw.family, &schema).as_str().to_string(),
    };

    let pillar_id = match present(&raw.pillar_id) {
        Some(pillar) => pillar.to_string(),
        None => pillar_for_schema(&schema)
            .unwrap_or(DEFAULT_PILLAR)
            .to_string(),
    };

    let mut cue = EnhancedCue {
        id: raw.id.clone(),
        text_line: raw.text_line.clone(),
        response_type: raw.response_type.clone(),
        family: raw.family.clone(),
        schema,
        kbe_target,
        heat_level,
        pillar_id,
        council_lens: present(&raw.council_lens).map(str::to_string),
        way_process: present(&raw.way_process).map(str::to_string),
        tags: TagSet::new(),
        batch_number,
        batch_name: batch_name.to_string(),
        status: CueStatus::Active,
    };
    retag(&mut cue);
    cue
}

/// Recognized labels are stored in canonical lowercase form; anything else
/// is kept verbatim for the validator to report.
fn canonical_label(value: &str, parse: impl Fn(&str) -> Option<&'static str>) -> String {
    parse(value).unwrap_or(value).to_string()
}
