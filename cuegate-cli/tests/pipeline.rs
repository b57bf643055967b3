//! Import pipeline driven through the command layer

use cuegate_cli::commands::{
    load_config, parse_enhanced, read_input, run_enhance, run_select, run_stats, run_validate,
    write_json,
};
use cuegate_cli::CliError;
use cuegate_core::{CueQuery, KbeDepth, UserProgress};
use cuegate_test_utils::{assertions, fixtures};
use std::path::PathBuf;

fn enhanced_json() -> String {
    let report = run_enhance(&fixtures::raw_collection_json(), 1).unwrap();
    assert!(report.skipped.is_empty());
    serde_json::to_string(&report.cues).unwrap()
}

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("cuegate-{}-{}", std::process::id(), name))
}

#[test]
fn test_enhance_then_validate_is_clean() {
    let report = run_validate(&enhanced_json()).unwrap();
    assert_eq!(report.total_count, fixtures::raw_collection().len());
    assert_eq!(report.invalid_count, 0);
}

#[test]
fn test_enhanced_output_parses_back() {
    let cues = parse_enhanced(&enhanced_json()).unwrap();
    for cue in &cues {
        assertions::assert_fully_classified(cue);
    }
}

#[test]
fn test_validate_reports_hand_edited_records() {
    let mut cues = parse_enhanced(&enhanced_json()).unwrap();
    cues[1].heat_level = "volcanic".to_string();
    cues[2].tags.clear();
    let report = run_validate(&serde_json::to_string(&cues).unwrap()).unwrap();

    assert_eq!(report.invalid_count, 2);
    let messages: Vec<String> = report
        .errors
        .iter()
        .flat_map(|e| e.issues.iter().map(ToString::to_string))
        .collect();
    assert!(messages.contains(&"Invalid heat_level: volcanic".to_string()));
    assert!(messages.contains(&"Missing tags".to_string()));
}

#[test]
fn test_stats_cover_every_record() {
    let stats = run_stats(&enhanced_json()).unwrap();
    assert_eq!(stats.total, fixtures::raw_collection().len());
    assert_eq!(stats.by_heat.values().sum::<usize>(), stats.total);
}

#[test]
fn test_select_orders_and_limits() {
    let config = cuegate_core::CueGateConfig {
        max_candidates: Some(2),
        ..Default::default()
    };
    let progress = UserProgress::new(KbeDepth::Knowing, 3);
    let candidates =
        run_select(&enhanced_json(), &CueQuery::new(), &progress, &config).unwrap();

    assert_eq!(candidates.len(), 2);
    assert!(candidates[0].score >= candidates[1].score);
    assert!(candidates
        .iter()
        .all(|c| c.cue.depth() != Some(KbeDepth::Embodying)));
}

#[test]
fn test_file_round_trip_and_missing_file() {
    let path = scratch_path("enhanced.json");
    let cues = parse_enhanced(&enhanced_json()).unwrap();
    write_json(&cues, Some(path.as_path())).unwrap();

    let back = parse_enhanced(&read_input(&path).unwrap()).unwrap();
    assert_eq!(back, cues);
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(
        read_input(&scratch_path("does-not-exist.json")),
        Err(CliError::Read { .. })
    ));
}

#[test]
fn test_config_file_layer() {
    let path = scratch_path("cuegate.toml");
    std::fs::write(&path, "min_interactions = 5\nmax_candidates = 10\n").unwrap();
    let config = load_config(Some(path.as_path())).unwrap();
    std::fs::remove_file(&path).unwrap();

    // Environment may override in CI; only assert when it is not set.
    if std::env::var("CUEGATE_MIN_INTERACTIONS").is_err() {
        assert_eq!(config.min_interactions, 5);
    }
    if std::env::var("CUEGATE_MAX_CANDIDATES").is_err() {
        assert_eq!(config.max_candidates, Some(10));
    }
}

#[test]
fn test_config_file_rejects_unknown_keys() {
    let path = scratch_path("bad.toml");
    std::fs::write(&path, "min_interaction = 5\n").unwrap();
    let result = load_config(Some(path.as_path()));
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(result, Err(CliError::Cue(_))));
}
