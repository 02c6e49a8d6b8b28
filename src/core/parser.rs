// logtally - core/parser.rs
//
// Line-oriented log parsing.
// Core layer: accepts text, never touches the filesystem directly.

use crate::core::model::LogRecord;
use crate::util::constants::MIN_LINE_TOKENS;
use crate::util::error::ParseError;

/// Parse one log line into a [`LogRecord`].
///
/// The line is split on runs of whitespace. The first three tokens are the
/// date, time and level; the rest are joined with single spaces into the
/// description. Leading and trailing whitespace (including a newline) is
/// ignored.
///
/// Returns `ParseError::MalformedLine` with `line_number` 0 when fewer than
/// three tokens are present. Use [`parse_content`] to get real line numbers.
pub fn parse_line(line: &str) -> Result<LogRecord, ParseError> {
    parse_numbered_line(line, 0)
}

fn parse_numbered_line(line: &str, line_number: u64) -> Result<LogRecord, ParseError> {
    let mut tokens = line.split_whitespace();

    let (date, time, level) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(date), Some(time), Some(level)) => (date, time, level),
        _ => {
            return Err(ParseError::MalformedLine {
                line_number,
                token_count: line.split_whitespace().count(),
                line: line.trim_end().to_string(),
            })
        }
    };

    Ok(LogRecord {
        date: date.to_string(),
        time: time.to_string(),
        level: level.to_string(),
        description: tokens.collect::<Vec<_>>().join(" "),
    })
}

/// Split `content` into lines ending in `\n`, `\r\n`, or a lone `\r`.
///
/// The terminator is not part of the line. Text after the last terminator
/// is a final line; a terminator at the very end adds no empty line.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\n' || c == '\r') {
            Some(idx) => {
                let line = &rest[..idx];
                let terminator = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + terminator..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

/// Parse every line of `content`, in order.
///
/// All-or-nothing: the first line with fewer than three tokens (a blank line
/// included) aborts parsing and no records are returned. Content with no
/// lines at all yields `ParseError::NoEntries`.
pub fn parse_content(content: &str) -> Result<Vec<LogRecord>, ParseError> {
    let mut records = Vec::new();

    for (line_idx, line) in split_lines(content).enumerate() {
        let line_number = (line_idx as u64) + 1;
        match parse_numbered_line(line, line_number) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!(
                    line_number,
                    min_tokens = MIN_LINE_TOKENS,
                    error = %e,
                    "Malformed log line; abandoning report"
                );
                return Err(e);
            }
        }
    }

    if records.is_empty() {
        return Err(ParseError::NoEntries);
    }

    tracing::debug!(records = records.len(), "Parsing complete");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_basic() {
        let record = parse_line("2024-01-01 10:00:00 ERROR Disk failure on node 3").unwrap();
        assert_eq!(record.date, "2024-01-01");
        assert_eq!(record.time, "10:00:00");
        assert_eq!(record.level, "ERROR");
        assert_eq!(record.description, "Disk failure on node 3");
    }

    #[test]
    fn test_parse_line_collapses_whitespace() {
        let record = parse_line("  2024-01-01\t10:00:00   INFO   User    logged  in\n").unwrap();
        assert_eq!(record.description, "User logged in");
        assert_eq!(record.to_line(), "2024-01-01 10:00:00 INFO User logged in");
    }

    #[test]
    fn test_parse_line_without_description() {
        let record = parse_line("2024-01-01 10:00:00 DEBUG").unwrap();
        assert_eq!(record.level, "DEBUG");
        assert_eq!(record.description, "");
    }

    #[test]
    fn test_parse_line_preserves_level_case() {
        let record = parse_line("2024-01-01 10:00:00 Warning low disk").unwrap();
        assert_eq!(record.level, "Warning");
    }

    #[test]
    fn test_parse_line_two_tokens_is_malformed() {
        let err = parse_line("2024-01-01 10:00:00").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedLine {
                line_number: 0,
                token_count: 2,
                line: "2024-01-01 10:00:00".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_content_keeps_order() {
        let content = "2024-01-01 10:00:00 INFO first\n\
                       2024-01-01 10:00:01 ERROR second\n\
                       2024-01-01 10:00:02 INFO third\n";
        let records = parse_content(content).unwrap();
        let descriptions: Vec<_> = records.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(descriptions, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_parse_content_handles_crlf() {
        let content = "2024-01-01 10:00:00 INFO first\r\n2024-01-01 10:00:01 ERROR second\r\n";
        let records = parse_content(content).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].description, "second");
    }

    #[test]
    fn test_parse_content_handles_lone_cr() {
        let content = "2024-01-01 10:00:00 INFO a\r2024-01-01 10:00:01 ERROR b\r";
        let records = parse_content(content).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].description, "a");
        assert_eq!(records[1].level, "ERROR");
    }

    #[test]
    fn test_split_lines_mixed_terminators() {
        let lines: Vec<_> = split_lines("a\nb\r\nc\rd").collect();
        assert_eq!(lines, vec!["a", "b", "c", "d"]);
        let lines: Vec<_> = split_lines("a\n\nb\n").collect();
        assert_eq!(lines, vec!["a", "", "b"]);
        assert_eq!(split_lines("").count(), 0);
    }

    #[test]
    fn test_parse_content_aborts_on_first_bad_line() {
        let content = "2024-01-01 10:00:00 INFO ok\n\
                       2024-01-01 10:00:01\n\
                       2024-01-01 10:00:02 ERROR never reached\n";
        match parse_content(content) {
            Err(ParseError::MalformedLine { line_number, .. }) => assert_eq!(line_number, 2),
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_content_blank_line_is_malformed() {
        let content = "2024-01-01 10:00:00 INFO ok\n\n2024-01-01 10:00:02 INFO ok\n";
        assert!(matches!(
            parse_content(content),
            Err(ParseError::MalformedLine {
                line_number: 2,
                token_count: 0,
                ..
            })
        ));
    }

    #[test]
    fn test_parse_empty_content() {
        assert_eq!(parse_content(""), Err(ParseError::NoEntries));
    }
}
