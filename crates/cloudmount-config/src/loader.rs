//! Configuration loading: parse a user-supplied document, overlay it onto
//! the defaults, and validate the result.
//!
//! The overlay itself is carried by serde: every schema struct declares
//! container-level defaults (see [`crate::domain::mount`]), so deserializing
//! a partial document produces "defaults with the present keys replaced".
//! This module adds the parts serde cannot express: choosing a format from
//! the file extension, treating a missing or empty file as "no user
//! configuration", and range-checking values that are representable but
//! invalid.
//!
//! # Validation
//!
//! The schema keeps rotation numbers signed, exactly as users write them, so
//! an explicitly negative `max-file-size-mb` or `backup-file-count` reaches
//! [`validate`] and is rejected with an error naming the offending key.
//! Silent clamping would mask the typo.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::mount::MountConfig;

// Dotted key names used in error messages, matching the document layout.
const KEY_MAX_FILE_SIZE_MB: &str = "logging.log-rotate.max-file-size-mb";
const KEY_BACKUP_FILE_COUNT: &str = "logging.log-rotate.backup-file-count";

/// Error type for configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred (other than "not found").
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The YAML content could not be parsed (malformed document, wrong
    /// value type, or unrecognized severity).
    #[error("failed to parse config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The JSON content could not be parsed.
    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// The config file extension does not map to a supported format.
    #[error("config file {path} has an unsupported extension: expected .yaml, .yml, .json, or .toml")]
    UnsupportedFormat { path: PathBuf },

    /// A numeric value is outside its permitted range.
    #[error("config value out of range: {key} must be non-negative, got {value}")]
    OutOfRange { key: &'static str, value: i64 },
}

/// Supported config document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

impl ConfigFormat {
    /// Chooses the format from the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] when the extension is
    /// missing or not one of `.yaml`, `.yml`, `.json`, `.toml`.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            Some("json") => Ok(ConfigFormat::Json),
            Some("toml") => Ok(ConfigFormat::Toml),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Parses a config document and overlays it onto the defaults.
///
/// Absent keys keep their default values at every nesting level; an empty
/// (or whitespace-only) document therefore yields [`MountConfig::new`]
/// unchanged.  The parsed result is validated before it is returned.
///
/// # Errors
///
/// Returns the format's parse variant for malformed documents, wrong value
/// types, unknown keys, or unrecognized severities, and
/// [`ConfigError::OutOfRange`] for negative rotation numbers.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<MountConfig, ConfigError> {
    if content.trim().is_empty() {
        return Ok(MountConfig::new());
    }

    let config: MountConfig = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        ConfigFormat::Json => serde_json::from_str(content)?,
        ConfigFormat::Toml => toml::from_str(content)?,
    };

    validate(&config)?;
    Ok(config)
}

/// Checks range invariants that the schema types cannot express.
///
/// # Errors
///
/// Returns [`ConfigError::OutOfRange`] naming the offending key when
/// `max-file-size-mb` or `backup-file-count` is negative.  `0` is valid for
/// both: a zero size threshold disables the size trigger, and a zero backup
/// count means unlimited retention.
pub fn validate(config: &MountConfig) -> Result<(), ConfigError> {
    let rotate = &config.logging.log_rotate;

    if rotate.max_file_size_mb < 0 {
        return Err(ConfigError::OutOfRange {
            key: KEY_MAX_FILE_SIZE_MB,
            value: rotate.max_file_size_mb,
        });
    }
    if rotate.backup_file_count < 0 {
        return Err(ConfigError::OutOfRange {
            key: KEY_BACKUP_FILE_COUNT,
            value: rotate.backup_file_count,
        });
    }

    Ok(())
}

/// Loads the mount configuration from `path`.
///
/// The format is chosen from the file extension.  A missing file is not an
/// error: the tool runs with the defaults when the user supplies no config
/// file.
///
/// # Errors
///
/// Returns [`ConfigError::UnsupportedFormat`] for unrecognized extensions,
/// [`ConfigError::Io`] for file-system failures other than "not found", and
/// any [`parse_config`] error for invalid content.
pub fn load_config(path: &Path) -> Result<MountConfig, ConfigError> {
    let format = ConfigFormat::from_path(path)?;

    match std::fs::read_to_string(path) {
        Ok(content) => {
            let config = parse_config(&content, format)?;
            debug!("mount config loaded from {}", path.display());
            Ok(config)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(
                "config file {} not found, continuing with defaults",
                path.display()
            );
            Ok(MountConfig::new())
        }
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
