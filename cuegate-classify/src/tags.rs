//! Tag generation
//!
//! Derives the canonical label set for a fully resolved cue. Every source
//! (dimensions, response type, family approach, text content, lenses) feeds
//! one [`TagSet`], so a tag produced twice is stored once.

use crate::tables::{
    council_lens_tags, family_approaches, family_category, response_duration,
    response_modalities, way_process_tags,
};
use cuegate_core::{present, EnhancedCue, TagSet};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// The resolved fields tag generation reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CueMetadata<'a> {
    pub text_line: &'a str,
    pub response_type: &'a str,
    pub family: &'a str,
    pub schema: &'a str,
    pub kbe_target: &'a str,
    pub heat_level: &'a str,
    pub pillar_id: &'a str,
    pub council_lens: Option<&'a str>,
    pub way_process: Option<&'a str>,
}

impl<'a> From<&'a EnhancedCue> for CueMetadata<'a> {
    fn from(cue: &'a EnhancedCue) -> Self {
        Self {
            text_line: &cue.text_line,
            response_type: &cue.response_type,
            family: &cue.family,
            schema: &cue.schema,
            kbe_target: &cue.kbe_target,
            heat_level: &cue.heat_level,
            pillar_id: &cue.pillar_id,
            council_lens: present(&cue.council_lens),
            way_process: present(&cue.way_process),
        }
    }
}

// ============================================================================
// CONTENT VOCABULARY
// ============================================================================

/// Emotion groups. Plain substring match, so stems like "frustrat" work.
const EMOTION_GROUPS: &[(&str, &[&str])] = &[
    (
        "anger",
        &["anger", "angry", "rage", "furious", "resent", "irritat", "frustrat"],
    ),
    (
        "fear",
        &["fear", "afraid", "scared", "anxious", "anxiety", "panic", "worry", "terrified"],
    ),
    (
        "sadness",
        &["sad", "grief", "griev", "loss", "lonely", "cry", "tears", "sorrow"],
    ),
    (
        "shame",
        &["shame", "ashamed", "embarrass", "guilt", "humiliat", "unworthy"],
    ),
    (
        "joy",
        &["joy", "happy", "delight", "grateful", "gratitude", "glad"],
    ),
];

const CONTENT_REGISTER_PATTERNS: &[(&str, &str)] = &[
    (
        "body",
        r"(?i)\b(body|breath(e|ing)?|chest|belly|stomach|shoulders?|jaw|hands?|feet|heart|throat|tight(ness)?|tension|muscles?|skin)\b",
    ),
    (
        "cognitive",
        r"(?i)\b(thoughts?|think(ing)?|beliefs?|believe|mind|story|stories|meaning|assume|assumptions?|ideas?)\b",
    ),
    (
        "relational",
        r"(?i)\b(someone|anyone|friends?|family|partner|relationships?|people|others|connect(ion)?|together|call|text|reach out)\b",
    ),
];

static CONTENT_REGISTERS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    CONTENT_REGISTER_PATTERNS
        .iter()
        .filter_map(|(register, pattern)| Regex::new(pattern).ok().map(|re| (*register, re)))
        .collect()
});

/// Phrasing that marks a cue as an invitation rather than a statement.
/// Whole words only: "poetry" is not "try", "inconsiderate" is not "consider".
const INVITATION_PATTERN: &str = r"(?i)\b(try|let yourself|allow yourself|invite you|imagine|take a moment|give yourself|what if|consider|see if)\b";

static INVITATION: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(INVITATION_PATTERN).ok());

// ============================================================================
// GENERATION
// ============================================================================

/// Generate the full tag set for a resolved cue.
pub fn generate_tags(meta: &CueMetadata<'_>) -> TagSet {
    let mut tags = TagSet::new();

    push_dimension_tags(&mut tags, meta);
    push_response_tags(&mut tags, meta.response_type);

    if let Some(category) = family_category(meta.family) {
        tags.insert(format!("category_{category}"));
    }
    for approach in family_approaches(meta.family) {
        tags.insert(format!("approach_{approach}"));
    }

    push_content_tags(&mut tags, meta.text_line);

    if let Some(lens) = meta.council_lens {
        tags.extend(council_lens_tags(lens).iter().map(|t| t.to_string()));
    }
    if let Some(process) = meta.way_process {
        tags.extend(way_process_tags(process).iter().map(|t| t.to_string()));
    }

    trace!(family = meta.family, count = tags.len(), "generated tags");
    tags
}

/// Replace a cue's tags with ones generated from its current fields.
pub fn retag(cue: &mut EnhancedCue) {
    let tags = generate_tags(&CueMetadata::from(&*cue));
    cue.tags = tags;
}

/// Canonical form of a dimension value inside a tag.
pub fn slug(value: &str) -> String {
    value
        .trim()
        .chars()
        .flat_map(|c| match c {
            ' ' | '-' => '_'.to_lowercase(),
            other => other.to_lowercase(),
        })
        .collect()
}

fn push_dimension_tags(tags: &mut TagSet, meta: &CueMetadata<'_>) {
    let dimensions = [
        ("family", Some(meta.family)),
        ("schema", Some(meta.schema)),
        ("kbe", Some(meta.kbe_target)),
        ("heat", Some(meta.heat_level)),
        ("pillar", Some(meta.pillar_id)),
        ("council", meta.council_lens),
        ("way", meta.way_process),
    ];
    for (dimension, value) in dimensions {
        if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
            tags.insert(format!("{dimension}_{}", slug(value)));
        }
    }
}

fn push_response_tags(tags: &mut TagSet, response_type: &str) {
    for modality in response_modalities(response_type) {
        tags.insert(format!("modality_{modality}"));
    }
    if let Some(duration) = response_duration(response_type) {
        tags.insert(format!("duration_{duration}"));
    }
}

fn push_content_tags(tags: &mut TagSet, text_line: &str) {
    let lowered = text_line.to_lowercase();

    for (emotion, keywords) in EMOTION_GROUPS {
        if keywords.iter().any(|kw| lowered.contains(kw)) {
            tags.insert(format!("emotion_{emotion}"));
        }
    }

    for (register, re) in CONTENT_REGISTERS.iter() {
        if re.is_match(text_line) {
            tags.insert(format!("content_{register}"));
        }
    }

    tags.insert(format_tag(text_line).to_string());
}

/// Question beats invitation beats statement.
fn format_tag(text_line: &str) -> &'static str {
    if text_line.contains('?') {
        "question"
    } else if INVITATION.as_ref().is_some_and(|re| re.is_match(text_line)) {
        "invitation"
    } else {
        "statement"
    }
}
