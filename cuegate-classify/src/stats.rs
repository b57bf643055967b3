//! Distribution counts over an enhanced batch

use cuegate_core::{present, EnhancedCue};
use serde::Serialize;
use std::collections::BTreeMap;

/// Counts per value for each classification dimension.
///
/// Counts use the stored value as-is, so unrecognized values show up as
/// their own keys. Lens and process are only counted when present.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BatchStatistics {
    pub total: usize,
    pub by_family: BTreeMap<String, usize>,
    pub by_schema: BTreeMap<String, usize>,
    pub by_kbe: BTreeMap<String, usize>,
    pub by_heat: BTreeMap<String, usize>,
    pub by_pillar: BTreeMap<String, usize>,
    pub by_council: BTreeMap<String, usize>,
    pub by_way: BTreeMap<String, usize>,
}

impl BatchStatistics {
    fn record(&mut self, cue: &EnhancedCue) {
        self.total += 1;
        bump(&mut self.by_family, &cue.family);
        bump(&mut self.by_schema, &cue.schema);
        bump(&mut self.by_kbe, &cue.kbe_target);
        bump(&mut self.by_heat, &cue.heat_level);
        bump(&mut self.by_pillar, &cue.pillar_id);
        if let Some(lens) = present(&cue.council_lens) {
            bump(&mut self.by_council, lens);
        }
        if let Some(process) = present(&cue.way_process) {
            bump(&mut self.by_way, process);
        }
    }
}

fn bump(counts: &mut BTreeMap<String, usize>, key: &str) {
    *counts.entry(key.to_string()).or_insert(0) += 1;
}

pub fn batch_statistics(cues: &[EnhancedCue]) -> BatchStatistics {
    let mut stats = BatchStatistics::default();
    for cue in cues {
        stats.record(cue);
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cue(family: &str, heat: &str, lens: Option<&str>) -> EnhancedCue {
        EnhancedCue {
            family: family.to_string(),
            schema: "fusion".to_string(),
            kbe_target: "knowing".to_string(),
            heat_level: heat.to_string(),
            pillar_id: "P-06".to_string(),
            council_lens: lens.map(str::to_string),
            ..EnhancedCue::default()
        }
    }

    #[test]
    fn test_counts_by_dimension() {
        let stats = batch_statistics(&[
            cue("grip_scan", "low", None),
            cue("grip_scan", "medium", Some("watts")),
            cue("sangha_ping", "medium", Some("watts")),
        ]);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.by_family["grip_scan"], 2);
        assert_eq!(stats.by_heat["medium"], 2);
        assert_eq!(stats.by_schema["fusion"], 3);
        assert_eq!(stats.by_council["watts"], 2);
        assert!(stats.by_way.is_empty());
    }

    #[test]
    fn test_blank_lens_not_counted() {
        let stats = batch_statistics(&[cue("grip_scan", "low", Some("  "))]);
        assert!(stats.by_council.is_empty());
    }

    #[test]
    fn test_empty_batch() {
        assert_eq!(batch_statistics(&[]), BatchStatistics::default());
    }

    #[test]
    fn test_serializes_as_nested_maps() {
        let stats = batch_statistics(&[cue("grip_scan", "low", None)]);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["total"], 1);
        assert_eq!(json["by_kbe"]["knowing"], 1);
    }
}
