// logtally - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "logtally";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "logtally";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Parsing
// =============================================================================

/// Minimum number of whitespace-separated tokens in a log line:
/// date, time and level. Everything after the level is the description.
pub const MIN_LINE_TOKENS: usize = 3;

// =============================================================================
// Loading limits
// =============================================================================

/// Default ceiling on the size of a log file read into memory.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024; // 100 MB

/// Smallest accepted value for `[loading] max_file_size_bytes`.
pub const MIN_MAX_FILE_SIZE: u64 = 1;

/// Hard upper bound on `[loading] max_file_size_bytes`.
pub const ABSOLUTE_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024; // 1 GB

// =============================================================================
// Report layout
// =============================================================================

/// Header of the level column in the counts table.
pub const DEFAULT_LEFT_HEADER: &str = "Log level";

/// Header of the count column in the counts table.
pub const DEFAULT_RIGHT_HEADER: &str = "Counts";

/// Separator placed between the two table columns.
pub const COLUMN_SEPARATOR: &str = " | ";

/// Maximum length of a configured column header, in characters.
pub const MAX_HEADER_LEN: usize = 64;

// =============================================================================
// User-facing messages
// =============================================================================

/// Printed when no log file path was given.
pub const MSG_MISSING_PATH: &str = "Error: Please enter the path to the file.";

/// Printed when more than a path and a level were given.
pub const MSG_TOO_MANY_ARGS: &str = "Error: Too many arguments entered.";

/// Follow-up hint printed after [`MSG_TOO_MANY_ARGS`].
pub const MSG_TOO_MANY_ARGS_HINT: &str = "Please enter the path to the file and log level";

/// Printed when the log file does not exist.
pub const MSG_FILE_NOT_FOUND: &str = "Error: The file not found";

/// Printed when the file holds a malformed line, bad bytes, or no lines.
pub const MSG_CORRUPTED: &str = "Error: The file is corrupted or doesn't have logs";

// =============================================================================
// Configuration
// =============================================================================

/// Name of the optional configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG, --debug, nor config set one.
///
/// Kept at `warn` so a normal run shows nothing but the report.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Companion utilities
// =============================================================================

/// Fibonacci indices printed by the `fibonacci` binary when none are given.
pub const FIBONACCI_DEMO_INDICES: &[i64] = &[20, 5];

/// Sample text summed by the `total-income` binary when none is given.
pub const INCOME_SAMPLE_TEXT: &str = "Загальний дохід працівника складається з \
     декількох частин: 1000.01 як основний дохід, доповнений \
     додатковими надходженнями 44.45 і 324.00 доларів.";

/// Greeting printed when the assistant bot starts.
pub const BOT_GREETING: &str = "Welcome to the assistant bot!";

/// Prompt shown before each assistant bot command.
pub const BOT_PROMPT: &str = "Enter a command: ";
