// logtally - app/pipeline.rs
//
// Orchestrates one report: load -> parse -> aggregate/filter -> render.
//
// Everything is loaded and parsed before the first byte of output is
// written, so a malformed file never produces a partial report.

use crate::app::cli::Invocation;
use crate::core::aggregate::count_by_level;
use crate::core::filter::LevelFilter;
use crate::core::model::LogRecord;
use crate::core::parser::parse_content;
use crate::core::report::{write_counts_table, write_level_details, TableLayout};
use crate::platform::config::AppConfig;
use crate::platform::fs::read_text_file;
use crate::util::error::{ReportError, Result};
use std::io::Write;
use std::path::Path;

/// Statistics about a completed report, for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Records parsed from the file.
    pub records: usize,
    /// Distinct levels in the counts table.
    pub levels: usize,
    /// Records listed in the detail section, if one was requested.
    pub matched: Option<usize>,
}

/// Read `path` and parse every line into a [`LogRecord`].
pub fn load_logs(path: &Path, max_file_size: u64) -> Result<Vec<LogRecord>> {
    let content = read_text_file(path, max_file_size)?;
    let records = parse_content(&content)?;
    tracing::info!(
        path = %path.display(),
        records = records.len(),
        "Loaded log file"
    );
    Ok(records)
}

/// Table layout configured in `config`.
pub fn table_layout(config: &AppConfig) -> TableLayout {
    TableLayout {
        left_header: config.left_header.clone(),
        right_header: config.right_header.clone(),
    }
}

/// Produce the full report for `invocation` into `writer`.
pub fn run<W: Write>(
    invocation: &Invocation,
    config: &AppConfig,
    mut writer: W,
) -> Result<RunSummary> {
    let records = load_logs(&invocation.path, config.max_file_size)?;
    let counts = count_by_level(&records);

    write_counts_table(&counts, &table_layout(config), &mut writer)?;

    let matched = match invocation.level.as_deref() {
        Some(level) => {
            let filter = LevelFilter::new(level);
            let selected = filter.apply(&records);
            tracing::debug!(level = filter.level(), matched = selected.len(), "Filtered records");
            write_level_details(level, &selected, &mut writer)?;
            Some(selected.len())
        }
        None => None,
    };

    writer.flush().map_err(ReportError::from)?;

    Ok(RunSummary {
        records: records.len(),
        levels: counts.len(),
        matched,
    })
}
