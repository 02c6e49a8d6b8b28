// logtally - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all logtally operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum LogTallyError {
    /// Command-line arguments were missing or in excess.
    Usage(UsageError),

    /// The log file could not be read.
    Load(LoadError),

    /// Log content could not be parsed.
    Parse(ParseError),

    /// The report could not be written.
    Report(ReportError),

    /// Configuration loading or validation failed.
    Config(ConfigError),
}

/// Coarse classification of an error, used by the binary to choose the
/// user-facing message and the exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad invocation. Exit status 1.
    Usage,
    /// The log file does not exist. Clean exit.
    NotFound,
    /// Malformed line, undecodable bytes, or no log lines. Clean exit.
    Corrupted,
    /// Anything else (permissions, oversized file, broken stdout). Exit status 1.
    Other,
}

impl LogTallyError {
    /// Classify this error for top-level dispatch.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Usage(_) => ErrorCategory::Usage,
            Self::Load(LoadError::NotFound { .. }) => ErrorCategory::NotFound,
            Self::Load(LoadError::InvalidEncoding { .. }) => ErrorCategory::Corrupted,
            Self::Parse(_) => ErrorCategory::Corrupted,
            Self::Load(_) | Self::Report(_) | Self::Config(_) => ErrorCategory::Other,
        }
    }
}

impl fmt::Display for LogTallyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(e) => write!(f, "Usage error: {e}"),
            Self::Load(e) => write!(f, "Load error: {e}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Report(e) => write!(f, "Report error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for LogTallyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Usage(e) => Some(e),
            Self::Load(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Report(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Usage errors
// ---------------------------------------------------------------------------

/// Errors in the positional command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// No log file path was given.
    MissingPath,

    /// More than a path and a level were given.
    TooManyArguments { count: usize },
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPath => write!(f, "no log file path given"),
            Self::TooManyArguments { count } => {
                write!(f, "{count} positional arguments given, expected at most 2")
            }
        }
    }
}

impl std::error::Error for UsageError {}

impl From<UsageError> for LogTallyError {
    fn from(e: UsageError) -> Self {
        Self::Usage(e)
    }
}

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Errors related to reading a log file from disk.
#[derive(Debug)]
pub enum LoadError {
    /// The path does not exist.
    NotFound { path: PathBuf },

    /// File content is not valid UTF-8.
    InvalidEncoding {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },

    /// File exceeds the configured size limit.
    TooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Any other I/O failure (permission denied, path is a directory, ...).
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "'{}' does not exist", path.display())
            }
            Self::InvalidEncoding { path, source } => {
                write!(f, "'{}': invalid UTF-8 encoding: {source}", path.display())
            }
            Self::TooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "'{}' is {size} bytes, exceeds maximum of {max_size} bytes. \
                 Raise [loading] max_file_size_bytes in config to read it.",
                path.display()
            ),
            Self::Io { path, source } => {
                write!(f, "cannot read '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidEncoding { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<LoadError> for LogTallyError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

// ---------------------------------------------------------------------------
// Parse errors
// ---------------------------------------------------------------------------

/// Errors related to log content parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A line has fewer than the required date, time and level tokens.
    /// `line_number` is 1-based, or 0 for a line parsed outside a file.
    MalformedLine {
        line_number: u64,
        token_count: usize,
        line: String,
    },

    /// The content holds no log lines at all.
    NoEntries,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLine {
                line_number,
                token_count,
                line,
            } => write!(
                f,
                "line {line_number}: expected at least {} fields, found {token_count} in '{line}'",
                super::constants::MIN_LINE_TOKENS
            ),
            Self::NoEntries => write!(f, "no log entries found"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for LogTallyError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

// ---------------------------------------------------------------------------
// Report errors
// ---------------------------------------------------------------------------

/// Errors related to writing the report.
#[derive(Debug)]
pub enum ReportError {
    /// The output sink rejected a write.
    Io { source: io::Error },
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { source } => write!(f, "failed to write report: {source}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source } => Some(source),
        }
    }
}

impl From<io::Error> for ReportError {
    fn from(source: io::Error) -> Self {
        Self::Io { source }
    }
}

impl From<ReportError> for LogTallyError {
    fn from(e: ReportError) -> Self {
        Self::Report(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for LogTallyError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Companion utility errors
// ---------------------------------------------------------------------------

/// Errors from the memoised Fibonacci calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FibonacciError {
    /// F(n) does not fit in a `u128`.
    Overflow { n: i64 },
}

impl fmt::Display for FibonacciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow { n } => write!(f, "Fibonacci number {n} does not fit in 128 bits"),
        }
    }
}

impl std::error::Error for FibonacciError {}

/// Errors from assistant bot commands. The `Display` text is the reply
/// shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotError {
    /// `add`/`change` was not given exactly a name and a phone.
    MissingNameAndPhone,

    /// `phone` was given no name.
    MissingName,

    /// `phone` named a contact that does not exist.
    UnknownContact { name: String },
}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingNameAndPhone => write!(f, "Give me name and phone please."),
            Self::MissingName => write!(f, "Give me name please"),
            Self::UnknownContact { .. } => write!(f, "There is no such name in contacts."),
        }
    }
}

impl std::error::Error for BotError {}

/// Convenience type alias for logtally results.
pub type Result<T> = std::result::Result<T, LogTallyError>;
