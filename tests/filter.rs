//! Tests for display-side filtering and day grouping.

use chrono::{NaiveDate, NaiveDateTime};
use fanlog::record::LogRecord;
use fanlog::{FilterSettings, Level, group_by_day};

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn record(label: &str, level: Level, timestamp: NaiveDateTime) -> LogRecord {
    LogRecord {
        label: label.to_string(),
        timestamp,
        level,
        file: "src/lib.rs (1)".to_string(),
        function: "f".to_string(),
        message: format!("{label}-{level}"),
        source: None,
    }
}

#[test]
fn default_settings_keep_everything_and_are_inactive() {
    let settings = FilterSettings::default();
    assert!(!settings.active());

    let records = vec![
        record("a", Level::Trace, at(20, 1)),
        record("b", Level::Critical, at(20, 2)),
    ];
    assert_eq!(settings.apply(&records).len(), 2);
}

#[test]
fn level_filter_drops_unselected_levels() {
    let settings = FilterSettings {
        levels: vec![Level::Error, Level::Critical],
        labels: Vec::new(),
    };
    assert!(settings.active());

    let records = vec![
        record("a", Level::Trace, at(20, 1)),
        record("a", Level::Error, at(20, 2)),
        record("a", Level::Critical, at(20, 3)),
    ];

    let kept = settings.apply(&records);
    assert_eq!(kept.len(), 2);
    assert!(kept.iter().all(|r| r.level >= Level::Error));
}

#[test]
fn label_filter_restricts_to_selected_labels() {
    let settings = FilterSettings {
        levels: Level::all().to_vec(),
        labels: vec!["net".to_string()],
    };
    assert!(settings.active());

    let records = vec![
        record("net", Level::Debug, at(20, 1)),
        record("db", Level::Debug, at(20, 2)),
    ];

    let kept = settings.apply(&records);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].label, "net");
}

#[test]
fn apply_sorts_newest_first() {
    let settings = FilterSettings::default();
    let records = vec![
        record("a", Level::Debug, at(20, 1)),
        record("a", Level::Debug, at(22, 1)),
        record("a", Level::Debug, at(21, 1)),
    ];

    let sorted = settings.apply(&records);
    let days: Vec<u32> = sorted
        .iter()
        .map(|r| chrono::Datelike::day(&r.timestamp.date()))
        .collect();
    assert_eq!(days, vec![22, 21, 20]);
}

#[test]
fn group_by_day_sections_newest_first() {
    let records = vec![
        record("a", Level::Debug, at(22, 9)),
        record("a", Level::Debug, at(22, 8)),
        record("a", Level::Debug, at(20, 5)),
    ];

    let sections = group_by_day(records);
    assert_eq!(sections.len(), 2);
    assert_eq!(
        sections[0].date,
        NaiveDate::from_ymd_opt(2026, 8, 22).unwrap()
    );
    assert_eq!(sections[0].records.len(), 2);
    assert_eq!(
        sections[1].date,
        NaiveDate::from_ymd_opt(2026, 8, 20).unwrap()
    );
    assert_eq!(sections[1].records.len(), 1);
}

#[test]
fn group_by_day_preserves_input_order_within_a_day() {
    let records = vec![
        record("first", Level::Debug, at(22, 9)),
        record("second", Level::Debug, at(22, 8)),
    ];

    let sections = group_by_day(records);
    assert_eq!(sections[0].records[0].label, "first");
    assert_eq!(sections[0].records[1].label, "second");
}

#[test]
fn group_by_day_of_empty_input_is_empty() {
    assert!(group_by_day(Vec::new()).is_empty());
}
