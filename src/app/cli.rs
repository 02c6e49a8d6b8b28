// logtally - app/cli.rs
//
// Positional-argument resolution for the `logtally` binary.
//
// clap owns flag parsing and --help/--version. The positional contract
// (a path and an optional level, exit status 1 otherwise) is checked here so
// that usage errors carry this tool's own messages and exit status.

use crate::util::constants;
use crate::util::error::{ErrorCategory, LogTallyError, UsageError};
use std::path::PathBuf;

/// A validated request: which file to report on and, optionally, which
/// level to list in detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub path: PathBuf,
    pub level: Option<String>,
}

/// Turn the positional arguments into an [`Invocation`].
pub fn resolve_invocation(positionals: &[String]) -> Result<Invocation, UsageError> {
    match positionals {
        [] => Err(UsageError::MissingPath),
        [path] => Ok(Invocation {
            path: PathBuf::from(path),
            level: None,
        }),
        [path, level] => Ok(Invocation {
            path: PathBuf::from(path),
            level: Some(level.clone()),
        }),
        _ => Err(UsageError::TooManyArguments {
            count: positionals.len(),
        }),
    }
}

/// Lines printed to the user for a usage error.
pub fn usage_message(error: &UsageError) -> Vec<&'static str> {
    match error {
        UsageError::MissingPath => vec![constants::MSG_MISSING_PATH],
        UsageError::TooManyArguments { .. } => vec![
            constants::MSG_TOO_MANY_ARGS,
            constants::MSG_TOO_MANY_ARGS_HINT,
        ],
    }
}

/// Where a failure message is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStream {
    Stdout,
    Stderr,
}

/// What the binary prints, and how it exits, for a failed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureOutcome {
    pub lines: Vec<String>,
    pub stream: OutputStream,
    pub exit_code: u8,
}

/// Map a failed run to its user-facing message and exit status.
///
/// Usage errors exit 1 with their fixed messages. A missing file and an
/// unusable file print their fixed message on stdout and exit 0. Anything
/// else is printed as `Error: {detail}` on stderr and exits 1.
pub fn failure_outcome(error: &LogTallyError) -> FailureOutcome {
    let fixed = |message: &str, exit_code| FailureOutcome {
        lines: vec![message.to_string()],
        stream: OutputStream::Stdout,
        exit_code,
    };

    match (error, error.category()) {
        (LogTallyError::Usage(usage), _) => FailureOutcome {
            lines: usage_message(usage).into_iter().map(str::to_string).collect(),
            stream: OutputStream::Stdout,
            exit_code: 1,
        },
        (_, ErrorCategory::NotFound) => fixed(constants::MSG_FILE_NOT_FOUND, 0),
        (_, ErrorCategory::Corrupted) => fixed(constants::MSG_CORRUPTED, 0),
        (_, ErrorCategory::Usage | ErrorCategory::Other) => FailureOutcome {
            lines: vec![format!("Error: {error}")],
            stream: OutputStream::Stderr,
            exit_code: 1,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::error::{LoadError, ParseError};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_arguments_is_missing_path() {
        assert_eq!(resolve_invocation(&[]), Err(UsageError::MissingPath));
    }

    #[test]
    fn test_path_only() {
        let inv = resolve_invocation(&args(&["app.log"])).unwrap();
        assert_eq!(inv.path, PathBuf::from("app.log"));
        assert_eq!(inv.level, None);
    }

    #[test]
    fn test_path_and_level() {
        let inv = resolve_invocation(&args(&["app.log", "Error"])).unwrap();
        assert_eq!(inv.level.as_deref(), Some("Error"));
    }

    #[test]
    fn test_three_arguments_is_too_many() {
        assert_eq!(
            resolve_invocation(&args(&["a.log", "error", "extra"])),
            Err(UsageError::TooManyArguments { count: 3 })
        );
    }

    #[test]
    fn test_usage_messages() {
        assert_eq!(
            usage_message(&UsageError::MissingPath),
            vec!["Error: Please enter the path to the file."]
        );
        assert_eq!(
            usage_message(&UsageError::TooManyArguments { count: 4 }).len(),
            2
        );
    }

    #[test]
    fn test_failure_outcome_usage() {
        let outcome = failure_outcome(&UsageError::TooManyArguments { count: 3 }.into());
        assert_eq!(
            outcome,
            FailureOutcome {
                lines: vec![
                    "Error: Too many arguments entered.".to_string(),
                    "Please enter the path to the file and log level".to_string(),
                ],
                stream: OutputStream::Stdout,
                exit_code: 1,
            }
        );
        let missing = failure_outcome(&UsageError::MissingPath.into());
        assert_eq!(missing.lines, vec!["Error: Please enter the path to the file."]);
        assert_eq!(missing.exit_code, 1);
    }

    #[test]
    fn test_failure_outcome_not_found_exits_cleanly() {
        let error = LoadError::NotFound {
            path: PathBuf::from("missing.log"),
        }
        .into();
        assert_eq!(
            failure_outcome(&error),
            FailureOutcome {
                lines: vec!["Error: The file not found".to_string()],
                stream: OutputStream::Stdout,
                exit_code: 0,
            }
        );
    }

    #[test]
    fn test_failure_outcome_corrupted_exits_cleanly() {
        let outcome = failure_outcome(&ParseError::NoEntries.into());
        assert_eq!(
            outcome.lines,
            vec!["Error: The file is corrupted or doesn't have logs"]
        );
        assert_eq!(outcome.stream, OutputStream::Stdout);
        assert_eq!(outcome.exit_code, 0);
    }

    #[test]
    fn test_failure_outcome_other_goes_to_stderr() {
        let error = LoadError::TooLarge {
            path: PathBuf::from("big.log"),
            size: 64,
            max_size: 10,
        }
        .into();
        let outcome = failure_outcome(&error);
        assert_eq!(outcome.stream, OutputStream::Stderr);
        assert_eq!(outcome.exit_code, 1);
        assert_eq!(outcome.lines.len(), 1);
        assert!(outcome.lines[0].starts_with("Error: Load error: 'big.log' is 64 bytes"));
    }
}
