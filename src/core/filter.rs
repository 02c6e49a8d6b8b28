// logtally - core/filter.rs
//
// Level filter for parsed records.
// Core layer: pure logic, no I/O.

use crate::core::model::LogRecord;

/// Case-insensitive level filter.
///
/// The requested level is lower-cased once on construction so matching
/// only lower-cases the record side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelFilter {
    level: String,
}

impl LevelFilter {
    pub fn new(level: &str) -> Self {
        Self {
            level: level.to_lowercase(),
        }
    }

    /// The requested level, lower-cased.
    pub fn level(&self) -> &str {
        &self.level
    }

    /// Returns true if `record` has the requested level, ignoring case.
    pub fn matches(&self, record: &LogRecord) -> bool {
        record.level.to_lowercase() == self.level
    }

    /// Return the matching records in their original order.
    ///
    /// A level absent from `records` yields an empty result.
    pub fn apply<'a>(&self, records: &'a [LogRecord]) -> Vec<&'a LogRecord> {
        records.iter().filter(|record| self.matches(record)).collect()
    }
}

/// Select the records whose level equals `level`, ignoring case.
pub fn filter_by_level<'a>(records: &'a [LogRecord], level: &str) -> Vec<&'a LogRecord> {
    LevelFilter::new(level).apply(records)
}
