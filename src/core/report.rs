// logtally - core/report.rs
//
// Plain-text rendering of level counts and filtered record details.
// Core layer: writes to any Write trait object.

use crate::core::model::{LevelCounts, LogRecord};
use crate::util::constants;
use crate::util::error::ReportError;
use std::io::Write;

/// Column headers for the counts table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    pub left_header: String,
    pub right_header: String,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            left_header: constants::DEFAULT_LEFT_HEADER.to_string(),
            right_header: constants::DEFAULT_RIGHT_HEADER.to_string(),
        }
    }
}

/// Write `counts` as a two-column, left-aligned table.
///
/// Each column is as wide as its header or its widest cell, whichever is
/// larger. Widths are measured in characters. The separator row is
/// `left + right + 3` dashes, matching the `" | "` column separator. Every
/// cell is padded to its column width, the last one included.
pub fn write_counts_table<W: Write>(
    counts: &LevelCounts,
    layout: &TableLayout,
    mut writer: W,
) -> Result<(), ReportError> {
    let left_width = counts
        .iter()
        .map(|(level, _)| level.chars().count())
        .chain(std::iter::once(layout.left_header.chars().count()))
        .max()
        .unwrap_or(0);
    let right_width = counts
        .iter()
        .map(|(_, count)| count.to_string().chars().count())
        .chain(std::iter::once(layout.right_header.chars().count()))
        .max()
        .unwrap_or(0);
    let sep = constants::COLUMN_SEPARATOR;

    writeln!(
        writer,
        "{:<left_width$}{sep}{:<right_width$}",
        layout.left_header, layout.right_header
    )?;
    writeln!(
        writer,
        "{}",
        "-".repeat(left_width + sep.chars().count() + right_width)
    )?;
    for (level, count) in counts.iter() {
        writeln!(writer, "{level:<left_width$}{sep}{count:<right_width$}")?;
    }

    Ok(())
}

/// Write the detail section for `level`: a blank line, a header naming the
/// level in upper case, then `"{date} {time} - {description}"` per record.
pub fn write_level_details<W: Write>(
    level: &str,
    records: &[&LogRecord],
    mut writer: W,
) -> Result<(), ReportError> {
    writeln!(writer)?;
    writeln!(writer, "Log details for '{}' level", level.to_uppercase())?;
    for record in records {
        writeln!(
            writer,
            "{} {} - {}",
            record.date, record.time, record.description
        )?;
    }
    Ok(())
}
