//! Display-side filtering and grouping over parsed records.

use crate::level::Level;
use crate::record::LogRecord;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Which records the display path keeps: a level set and an optional label
/// set. Defaults keep everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSettings {
    /// Records whose level is not in this set are dropped.
    pub levels: Vec<Level>,
    /// Empty means "all labels"; non-empty restricts to the listed ones.
    pub labels: Vec<String>,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            levels: Level::all().to_vec(),
            labels: Vec::new(),
        }
    }
}

impl FilterSettings {
    /// Whether any filtering is actually engaged — drives "filters active"
    /// indicators in consumers.
    #[must_use]
    pub fn active(&self) -> bool {
        !self.labels.is_empty() || self.levels.len() != Level::all().len()
    }

    /// Applies level then label membership, and sorts newest-first.
    #[must_use]
    pub fn apply(&self, records: &[LogRecord]) -> Vec<LogRecord> {
        let mut filtered: Vec<LogRecord> = records
            .iter()
            .filter(|record| self.levels.contains(&record.level))
            .filter(|record| self.labels.is_empty() || self.labels.contains(&record.label))
            .cloned()
            .collect();

        filtered.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        filtered
    }
}

/// One display group: all records from a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSection {
    pub date: NaiveDate,
    pub records: Vec<LogRecord>,
}

/// Groups records by calendar day, sections ordered newest-first. Record
/// order within a section follows the input order, so feeding the output of
/// [`FilterSettings::apply`] keeps records newest-first inside each day.
#[must_use]
pub fn group_by_day(records: Vec<LogRecord>) -> Vec<LogSection> {
    let mut groups: BTreeMap<NaiveDate, Vec<LogRecord>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.timestamp.date())
            .or_default()
            .push(record);
    }

    groups
        .into_iter()
        .rev()
        .map(|(date, records)| LogSection { date, records })
        .collect()
}
