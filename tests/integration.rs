//! End-to-end tests over the JSON row format, the repository and search.
mod common;
use common::*;
use flowloc::prelude::*;

const TABLE_JSON: &str = r#"[
    {
        "code": "574W",
        "mapping": "W4",
        "flow_name": "West outbound",
        "attached_flow": "M9"
    },
    {
        "code": "BASE1",
        "mapping": "M9",
        "flow_name": "Base line 1",
        "physical_location_1": "DockA",
        "time_rule_1": "all",
        "physical_location_2": "DockB",
        "time_rule_2": "1-5:1200"
    },
    {
        "code": "574TJL",
        "mapping": "T7",
        "flow_name": "Tianjin line",
        "physical_location_1": "Bay 12",
        "time_rule_1": "7:0600and1-7:1230",
        "physical_location_2": "Bay 13",
        "time_rule_2": null
    }
]"#;

#[test]
fn json_table_resolves_end_to_end() {
    let repository = MemoryRepository::from_json(TABLE_JSON).unwrap();
    let mut locator = Locator::builder(repository)
        .observer(EventLog::new())
        .build();

    // Monday 09:00: both of BASE1's slots are active.
    let matches = locator
        .find_current_locations("574W", weekday_at(0, 9, 0))
        .unwrap()
        .unwrap();

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].location, "DockA");
    assert_eq!(matches[1].location, "DockB");
    assert!(matches.iter().all(|m| m.aliased));
    assert!(matches.iter().all(|m| m.resolved_code == "BASE1"));
    assert!(locator.observer().events.iter().any(|e| matches!(
        e,
        ResolutionEvent::AliasFollowed { to, .. } if to == "BASE1"
    )));
}

#[test]
fn half_filled_slot_is_dropped_during_conversion() {
    let repository = MemoryRepository::from_json(TABLE_JSON).unwrap();
    let record = repository.load_one("574TJL").unwrap().unwrap();

    // Bay 13 has no rule string, so only the first slot survives.
    assert_eq!(record.location_rules.len(), 1);
    assert_eq!(record.location_rules[0].location, "Bay 12");
}

#[test]
fn raw_row_conversion_rejects_an_empty_code() {
    let row = RawFlowRow {
        code: "   ".to_string(),
        mapping: "M1".to_string(),
        flow_name: "Broken".to_string(),
        physical_location_1: None,
        time_rule_1: None,
        physical_location_2: None,
        time_rule_2: None,
        attached_flow: None,
    };

    assert!(matches!(
        row.into_record(),
        Err(TableConversionError::ValidationError(_))
    ));
}

#[test]
fn empty_attached_flow_becomes_no_attachment() {
    let row = RawFlowRow {
        code: "F1".to_string(),
        mapping: "M1".to_string(),
        flow_name: "Flow one".to_string(),
        physical_location_1: Some("Dock".to_string()),
        time_rule_1: Some("all".to_string()),
        physical_location_2: None,
        time_rule_2: None,
        attached_flow: Some("".to_string()),
    };

    let record = row.into_record().unwrap();
    assert!(!record.is_attached());
}

#[test]
fn malformed_table_json_is_a_parse_error() {
    assert!(matches!(
        MemoryRepository::from_json("{not json"),
        Err(RepositoryError::Parse(_))
    ));
}

#[test]
fn missing_table_file_is_an_io_error() {
    let result = MemoryRepository::from_json_file("does/not/exist.json");
    assert!(matches!(result, Err(RepositoryError::Io { .. })));
}

#[test]
fn search_matches_code_name_and_mapping() {
    let repository = MemoryRepository::from_json(TABLE_JSON).unwrap();
    let mut locator = Locator::new(repository);

    let by_code = locator.search("574").unwrap();
    assert_eq!(by_code.len(), 2);
    assert!(by_code.iter().all(|hit| hit.field == MatchField::Code));
    // Sorted by code for stable output.
    assert_eq!(by_code[0].code, "574TJL");
    assert_eq!(by_code[1].code, "574W");

    let by_name = locator.search("base line").unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].field, MatchField::Name);

    let by_mapping = locator.search("m9").unwrap();
    assert_eq!(by_mapping.len(), 1);
    assert_eq!(by_mapping[0].field, MatchField::Mapping);

    assert!(locator.search("").unwrap().is_empty());
    assert!(locator.search("zzz").unwrap().is_empty());
}

#[test]
fn table_lookup_helpers() {
    let t = table(vec![
        record("A", "MA", "Flow A"),
        record("B", "MB", "Flow B"),
    ]);

    assert_eq!(t.len(), 2);
    assert!(t.contains("A"));
    assert_eq!(t.find_code_by_mapping("MB"), Some("B"));
    assert_eq!(t.find_code_by_mapping("NOPE"), None);
}

#[test]
fn reinserting_a_code_replaces_the_record() {
    let mut t = table(vec![record("A", "MA", "Flow A")]);
    let previous = t.insert(record("A", "MA2", "Flow A v2"));

    assert!(previous.is_some());
    assert_eq!(t.len(), 1);
    assert_eq!(t.get("A").unwrap().mapping, "MA2");
}
