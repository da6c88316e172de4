//! Common test utilities for building flow records and tables.
use flowloc::prelude::*;

/// Creates a bare record with no location rules and no attachment.
#[allow(dead_code)]
pub fn record(code: &str, mapping: &str, name: &str) -> FlowRecord {
    FlowRecord {
        code: code.to_string(),
        mapping: mapping.to_string(),
        name: name.to_string(),
        location_rules: Vec::new(),
        attached_mapping: None,
    }
}

/// Adds location rule slots to a record, in order.
#[allow(dead_code)]
pub fn with_rules(mut record: FlowRecord, slots: &[(&str, &str)]) -> FlowRecord {
    record.location_rules = slots
        .iter()
        .map(|(location, rule)| LocationRule {
            location: location.to_string(),
            rule: rule.to_string(),
        })
        .collect();
    record
}

/// Attaches a record to another via its mapping code.
#[allow(dead_code)]
pub fn attached(mut record: FlowRecord, mapping: &str) -> FlowRecord {
    record.attached_mapping = Some(mapping.to_string());
    record
}

#[allow(dead_code)]
pub fn table(records: Vec<FlowRecord>) -> FlowTable {
    records.into_iter().collect()
}

/// A timestamp builder for readable assertions. 2026-08-03 is a Monday.
#[allow(dead_code)]
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

/// Monday of a week in August 2026; add `offset` days to reach any ISO
/// weekday (0 = Monday .. 6 = Sunday).
#[allow(dead_code)]
pub fn weekday_at(offset: u32, hour: u32, minute: u32) -> NaiveDateTime {
    at(2026, 8, 3 + offset, hour, minute)
}
