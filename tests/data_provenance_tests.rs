//! Data provenance and validation: the dataset registry lists every shipped
//! table, each listed path exists, and the shipped data passes validation.
//! See data/README.md for provenance documentation.

use std::path::Path;

use shotcaller::data::counters::DEFAULT_COUNTER_RESPONSES_PATH;
use shotcaller::data::hero::DEFAULT_CANONICAL_HEROES_PATH;
use shotcaller::data::registry::{load_registry, DEFAULT_REGISTRY_PATH};
use shotcaller::data::teamup::DEFAULT_TEAM_UPS_PATH;
use shotcaller::data::validate::validate_datasets;

#[test]
fn dataset_registry_lists_shipped_tables_with_provenance() {
    let registry = load_registry(DEFAULT_REGISTRY_PATH).expect("registry should load");

    for key in ["heroes", "team_ups", "counter_responses"] {
        let entry = registry
            .get(key)
            .unwrap_or_else(|| panic!("registry should list dataset '{key}'"));
        assert!(!entry.source.trim().is_empty(), "'{key}' should name its source");
        assert!(
            Path::new(&entry.path).exists(),
            "'{key}' path '{}' should exist",
            entry.path
        );
    }
}

#[test]
fn registry_paths_match_the_loader_defaults() {
    let registry = load_registry(DEFAULT_REGISTRY_PATH).expect("registry should load");

    assert_eq!(registry["heroes"].path, DEFAULT_CANONICAL_HEROES_PATH);
    assert_eq!(registry["team_ups"].path, DEFAULT_TEAM_UPS_PATH);
    assert_eq!(registry["counter_responses"].path, DEFAULT_COUNTER_RESPONSES_PATH);
}

#[test]
fn shipped_datasets_validate_without_errors() {
    let report = validate_datasets(
        DEFAULT_CANONICAL_HEROES_PATH,
        DEFAULT_TEAM_UPS_PATH,
        DEFAULT_COUNTER_RESPONSES_PATH,
    )
    .expect("shipped datasets should parse");

    assert!(
        !report.has_errors(),
        "unexpected validation errors: {:?}",
        report.diagnostics
    );
}
