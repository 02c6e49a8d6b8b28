// logtally - platform/config.rs
//
// Platform config directory resolution and config.toml loading with
// startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for logtally configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/logtally/ or %APPDATA%\logtally\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Default location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[loading]` section.
    pub loading: LoadingSection,
    /// `[report]` section.
    pub report: ReportSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[loading]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoadingSection {
    /// Largest log file read into memory, in bytes.
    pub max_file_size_bytes: Option<u64>,
}

/// `[report]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ReportSection {
    /// Header of the level column.
    pub left_header: Option<String>,
    /// Header of the count column.
    pub right_header: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Largest log file read into memory, in bytes.
    pub max_file_size: u64,
    /// Header of the level column.
    pub left_header: String,
    /// Header of the count column.
    pub right_header: String,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_file_size: constants::DEFAULT_MAX_FILE_SIZE,
            left_header: constants::DEFAULT_LEFT_HEADER.to_string(),
            right_header: constants::DEFAULT_RIGHT_HEADER.to_string(),
            log_level: None,
        }
    }
}

/// Load and validate a config file.
///
/// Returns the validated config plus non-fatal warnings for values that were
/// rejected. Warnings are returned rather than logged because this runs
/// before the logging subsystem is initialised.
///
/// When `explicit` is false (the platform default location) a missing or
/// unreadable file falls back to defaults with a warning. When `explicit`
/// is true (passed with --config) the same problems are hard errors.
pub fn load_config(
    config_path: &Path,
    explicit: bool,
) -> Result<(AppConfig, Vec<String>), ConfigError> {
    let mut warnings: Vec<String> = Vec::new();

    if !explicit && !config_path.exists() {
        return Ok((AppConfig::default(), warnings));
    }

    let raw = match read_raw_config(config_path) {
        Ok(raw) => raw,
        Err(e) if !explicit => {
            warnings.push(format!("{e}. Using defaults."));
            return Ok((AppConfig::default(), warnings));
        }
        Err(e) => return Err(e),
    };

    let (config, mut value_warnings) = validate(raw);
    warnings.append(&mut value_warnings);
    Ok((config, warnings))
}

fn read_raw_config(config_path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Io {
        path: config_path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: config_path.to_path_buf(),
        source,
    })
}

/// Validate each field against named constants, accumulating all problems.
fn validate(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut config = AppConfig::default();
    let mut warnings = Vec::new();

    // -- Loading: max_file_size_bytes --
    if let Some(size) = raw.loading.max_file_size_bytes {
        if (constants::MIN_MAX_FILE_SIZE..=constants::ABSOLUTE_MAX_FILE_SIZE).contains(&size) {
            config.max_file_size = size;
        } else {
            warnings.push(out_of_range(
                "[loading] max_file_size_bytes",
                size.to_string(),
                format!(
                    "{}-{} (using default {})",
                    constants::MIN_MAX_FILE_SIZE,
                    constants::ABSOLUTE_MAX_FILE_SIZE,
                    constants::DEFAULT_MAX_FILE_SIZE
                ),
            ));
        }
    }

    // -- Report: headers --
    for (field, value, target) in [
        (
            "[report] left_header",
            raw.report.left_header,
            &mut config.left_header,
        ),
        (
            "[report] right_header",
            raw.report.right_header,
            &mut config.right_header,
        ),
    ] {
        let Some(value) = value else { continue };
        let len = value.chars().count();
        if (1..=constants::MAX_HEADER_LEN).contains(&len) {
            *target = value;
        } else {
            warnings.push(out_of_range(
                field,
                value,
                format!(
                    "1-{} characters (using default \"{target}\")",
                    constants::MAX_HEADER_LEN
                ),
            ));
        }
    }

    // -- Logging: level --
    if let Some(level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(out_of_range(
                "[logging] level",
                level,
                format!("one of {}", constants::VALID_LOG_LEVELS.join(", ")),
            ));
        }
    }

    (config, warnings)
}

fn out_of_range(field: &str, value: String, expected: String) -> String {
    ConfigError::ValueOutOfRange {
        field: field.to_string(),
        value,
        expected,
    }
    .to_string()
}
