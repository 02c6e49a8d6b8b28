// logtally - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies.
//
// These types are the shared vocabulary across all layers.

// =============================================================================
// Log Record (output of parsing)
// =============================================================================

/// A single parsed log line.
///
/// Every field is kept as the text found in the file. Dates and times are
/// opaque: nothing here validates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// First whitespace-separated token.
    pub date: String,

    /// Second token.
    pub time: String,

    /// Third token, case preserved (e.g. "INFO", "Error").
    pub level: String,

    /// Remaining tokens joined by single spaces. Empty if the line had
    /// exactly three tokens.
    pub description: String,
}

impl LogRecord {
    /// The record rebuilt as a single whitespace-normalised line.
    pub fn to_line(&self) -> String {
        let mut line = format!("{} {} {}", self.date, self.time, self.level);
        if !self.description.is_empty() {
            line.push(' ');
            line.push_str(&self.description);
        }
        line
    }
}

// =============================================================================
// Level Counts (output of aggregation)
// =============================================================================

/// Number of records per level, ordered by descending count.
///
/// Levels with equal counts stay in the order they were first seen in the
/// input. Keys are case-sensitive: "INFO" and "info" are counted apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelCounts {
    pub(crate) entries: Vec<(String, usize)>,
}

impl LevelCounts {
    /// Iterate `(level, count)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries.iter().map(|(level, count)| (level.as_str(), *count))
    }

    /// Count for an exact level key, if present.
    pub fn get(&self, level: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(key, _)| key == level)
            .map(|(_, count)| *count)
    }

    /// Number of distinct levels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts; equals the number of records aggregated.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }
}
