//! Cue records: the raw authored form and the fully classified form

use crate::{CueStatus, HeatLevel, KbeDepth, RecordError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Canonical, deduplicated label set. Ordered so output is reproducible.
pub type TagSet = BTreeSet<String>;

/// Return the trimmed value of an optional field, treating blank as absent.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

// ============================================================================
// RAW CUE
// ============================================================================

/// A cue as authored. Only `id`, `text_line`, `response_type` and `family`
/// are required; everything else is filled in by enhancement.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct RawCue {
    pub id: String,
    pub text_line: String,
    pub response_type: String,
    pub family: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kbe_target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heat_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pillar_id: Option<String>,
    /// Council voice the cue is written in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub council_lens: Option<String>,
    /// Process stage the cue walks the user through
    #[serde(skip_serializing_if = "Option::is_none")]
    pub way_process: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl RawCue {
    /// Create a raw cue with the four required fields.
    pub fn new(
        id: impl Into<String>,
        text_line: impl Into<String>,
        response_type: impl Into<String>,
        family: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text_line: text_line.into(),
            response_type: response_type.into(),
            family: family.into(),
            ..Self::default()
        }
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn with_kbe_target(mut self, kbe: impl Into<String>) -> Self {
        self.kbe_target = Some(kbe.into());
        self
    }

    pub fn with_heat_level(mut self, heat: impl Into<String>) -> Self {
        self.heat_level = Some(heat.into());
        self
    }

    pub fn with_pillar_id(mut self, pillar: impl Into<String>) -> Self {
        self.pillar_id = Some(pillar.into());
        self
    }

    pub fn with_council_lens(mut self, lens: impl Into<String>) -> Self {
        self.council_lens = Some(lens.into());
        self
    }

    pub fn with_way_process(mut self, process: impl Into<String>) -> Self {
        self.way_process = Some(process.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Boundary validation applied before a record enters the pipeline.
    ///
    /// Required fields must be non-blank, and explicitly supplied depth or
    /// heat values must be recognized, since enhancement never overwrites them.
    pub fn check_boundary(&self) -> Result<(), RecordError> {
        let required = [
            ("id", &self.id),
            ("text_line", &self.text_line),
            ("response_type", &self.response_type),
            ("family", &self.family),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(RecordError::RequiredFieldMissing {
                    id: self.id.clone(),
                    field: field.to_string(),
                });
            }
        }

        if let Some(kbe) = present(&self.kbe_target) {
            if KbeDepth::from_str_loose(kbe).is_err() {
                return Err(RecordError::InvalidValue {
                    id: self.id.clone(),
                    field: "kbe_target".to_string(),
                    value: kbe.to_string(),
                });
            }
        }

        if let Some(heat) = present(&self.heat_level) {
            if HeatLevel::from_str_loose(heat).is_err() {
                return Err(RecordError::InvalidValue {
                    id: self.id.clone(),
                    field: "heat_level".to_string(),
                    value: heat.to_string(),
                });
            }
        }

        Ok(())
    }
}

// ============================================================================
// ENHANCED CUE
// ============================================================================

/// A cue after enhancement: every classification field resolved.
///
/// Classification fields stay as strings so records loaded back from storage
/// with unrecognized values can still be held and reported by validation.
/// Use [`EnhancedCue::depth`] and [`EnhancedCue::heat`] for typed access.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct EnhancedCue {
    pub id: String,
    pub text_line: String,
    pub response_type: String,
    pub family: String,
    pub schema: String,
    pub kbe_target: String,
    pub heat_level: String,
    pub pillar_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub council_lens: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub way_process: Option<String>,
    pub tags: TagSet,
    pub batch_number: u32,
    pub batch_name: String,
    pub status: CueStatus,
}

impl EnhancedCue {
    /// Target depth, if the stored label is recognized.
    pub fn depth(&self) -> Option<KbeDepth> {
        KbeDepth::from_str_loose(&self.kbe_target).ok()
    }

    /// Heat level, if the stored label is recognized.
    pub fn heat(&self) -> Option<HeatLevel> {
        HeatLevel::from_str_loose(&self.heat_level).ok()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn lens(&self) -> Option<&str> {
        present(&self.council_lens)
    }

    pub fn process(&self) -> Option<&str> {
        present(&self.way_process)
    }

    /// Raw form with every resolved field supplied explicitly. Tags are
    /// dropped since enhancement regenerates them.
    pub fn to_raw(&self) -> RawCue {
        RawCue {
            id: self.id.clone(),
            text_line: self.text_line.clone(),
            response_type: self.response_type.clone(),
            family: self.family.clone(),
            schema: Some(self.schema.clone()),
            kbe_target: Some(self.kbe_target.clone()),
            heat_level: Some(self.heat_level.clone()),
            pillar_id: Some(self.pillar_id.clone()),
            council_lens: self.council_lens.clone(),
            way_process: self.way_process.clone(),
            tags: Vec::new(),
        }
    }

    /// Lifecycle change applied by administrative tooling.
    pub fn with_status(mut self, status: CueStatus) -> Self {
        self.status = status;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_treats_blank_as_absent() {
        assert_eq!(present(&None), None);
        assert_eq!(present(&Some("   ".to_string())), None);
        assert_eq!(present(&Some(" shame ".to_string())), Some("shame"));
    }

    #[test]
    fn test_boundary_accepts_minimal_record() {
        let raw = RawCue::new("nc-1", "Breathe.", "breath", "grip_scan");
        assert!(raw.check_boundary().is_ok());
    }

    #[test]
    fn test_boundary_rejects_blank_family() {
        let raw = RawCue::new("nc-1", "Breathe.", "breath", " ");
        assert_eq!(
            raw.check_boundary(),
            Err(RecordError::RequiredFieldMissing {
                id: "nc-1".to_string(),
                field: "family".to_string(),
            })
        );
    }

    #[test]
    fn test_boundary_rejects_unknown_heat() {
        let raw = RawCue::new("nc-2", "Hold.", "hold", "grip_scan").with_heat_level("scalding");
        assert!(matches!(
            raw.check_boundary(),
            Err(RecordError::InvalidValue { field, .. }) if field == "heat_level"
        ));
    }

    #[test]
    fn test_raw_cue_deserializes_with_missing_optionals() {
        let raw: RawCue = serde_json::from_str(
            r#"{"id":"nc-3","text_line":"Who are you?","response_type":"tap","family":"identity_koan"}"#,
        )
        .unwrap();
        assert_eq!(raw.schema, None);
        assert!(raw.tags.is_empty());
    }

    #[test]
    fn test_enhanced_typed_accessors() {
        let cue = EnhancedCue {
            kbe_target: "believing".to_string(),
            heat_level: "extreme".to_string(),
            ..EnhancedCue::default()
        };
        assert_eq!(cue.depth(), Some(KbeDepth::Believing));
        assert_eq!(cue.heat(), None);
    }
}
