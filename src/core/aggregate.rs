// logtally - core/aggregate.rs
//
// Per-level tallying of parsed records.
// Core layer: pure logic, no I/O.

use crate::core::model::{LevelCounts, LogRecord};
use std::collections::HashMap;

/// Count records per level, most frequent first.
///
/// Levels are keyed exactly as stored (case-sensitive). The tally keeps
/// levels in first-seen order and the sort is stable, so levels with equal
/// counts are reported in the order they first appeared.
pub fn count_by_level(records: &[LogRecord]) -> LevelCounts {
    let mut entries: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        match index.get(record.level.as_str()) {
            Some(&slot) => entries[slot].1 += 1,
            None => {
                index.insert(record.level.as_str(), entries.len());
                entries.push((record.level.clone(), 1));
            }
        }
    }

    entries.sort_by(|a, b| b.1.cmp(&a.1));

    tracing::debug!(
        records = records.len(),
        levels = entries.len(),
        "Aggregated records by level"
    );

    LevelCounts { entries }
}
