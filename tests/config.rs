//! Tests for the process-wide configuration. These run in their own test
//! binary so the freeze-on-first-use format does not leak into other suites.

use fanlog::config;

#[test]
fn first_init_wins_and_later_calls_are_no_ops() {
    config::init("%Y-%m-%d %H:%M");
    assert_eq!(config::timestamp_format(), "%Y-%m-%d %H:%M");

    config::init("%H:%M:%S");
    assert_eq!(config::timestamp_format(), "%Y-%m-%d %H:%M");
}

#[test]
fn writer_and_reader_share_the_installed_format() {
    config::init("%Y-%m-%d %H:%M");

    let timestamp = chrono::NaiveDate::from_ymd_opt(2026, 8, 25)
        .unwrap()
        .and_hms_opt(9, 15, 0)
        .unwrap();

    let text = config::format_timestamp(timestamp);
    assert_eq!(text, "2026-08-25 09:15");
    assert_eq!(config::parse_timestamp(&text), Some(timestamp));
}

#[test]
fn enable_flag_round_trips() {
    assert!(config::enabled());
    config::set_enabled(false);
    assert!(!config::enabled());
    config::set_enabled(true);
    assert!(config::enabled());
}
