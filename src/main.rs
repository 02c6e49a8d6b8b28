// logtally - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing and positional validation
// 2. Configuration loading
// 3. Logging initialisation (debug mode support)
// 4. Running the report and printing the failure outcome

use clap::Parser;
use logtally::app::cli::{self, OutputStream};
use logtally::app::pipeline;
use logtally::platform::config::{self, AppConfig, PlatformPaths};
use logtally::util::constants;
use logtally::util::error::{ConfigError, LogTallyError};
use logtally::util::logging;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// logtally - count log lines per level and list the lines of one level.
///
/// Each line of the log file must read `<date> <time> <level> <description...>`.
#[derive(Parser, Debug)]
#[command(name = "logtally", version, about)]
struct Cli {
    /// Log file path, optionally followed by a level to list in detail.
    #[arg(value_name = "ARGS", num_args = 0..)]
    args: Vec<String>,

    /// Read configuration from this file instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Usage errors win over everything else, config problems included.
    let invocation = match cli::resolve_invocation(&cli.args) {
        Ok(invocation) => invocation,
        Err(e) => return exit_with(&LogTallyError::from(e)),
    };

    let (app_config, config_warnings) = match load_config(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            logging::init(cli.debug, None);
            return exit_with(&LogTallyError::from(e));
        }
    };

    logging::init(cli.debug, app_config.log_level.as_deref());

    tracing::debug!(version = constants::APP_VERSION, debug = cli.debug, "logtally starting");
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config validation warning");
    }

    let stdout = std::io::stdout();
    match pipeline::run(&invocation, &app_config, stdout.lock()) {
        Ok(summary) => {
            tracing::info!(
                records = summary.records,
                levels = summary.levels,
                matched = ?summary.matched,
                "Report complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => exit_with(&e),
    }
}

/// Resolve which config file to read: --config if given, else the platform
/// default location.
fn load_config(explicit: Option<&Path>) -> Result<(AppConfig, Vec<String>), ConfigError> {
    match explicit {
        Some(path) => config::load_config(path, true),
        None => config::load_config(&PlatformPaths::resolve().config_file(), false),
    }
}

/// Print the failure message for `error` and return its exit status.
fn exit_with(error: &LogTallyError) -> ExitCode {
    tracing::info!(error = %error, category = ?error.category(), "Run failed");
    let outcome = cli::failure_outcome(error);
    for line in &outcome.lines {
        match outcome.stream {
            OutputStream::Stdout => println!("{line}"),
            OutputStream::Stderr => eprintln!("{line}"),
        }
    }
    ExitCode::from(outcome.exit_code)
}
