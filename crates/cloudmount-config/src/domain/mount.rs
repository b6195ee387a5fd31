//! Mount configuration schema and defaults.
//!
//! [`MountConfig`] is the top-level object the mount process consumes.  It
//! is built once at startup via [`MountConfig::new`], optionally overlaid
//! with user-supplied values by the loader (see [`crate::loader`]), and then
//! treated as immutable for the remainder of the process.
//!
//! # Serde key contract
//!
//! The serialized form is a nested mapping whose key names are part of the
//! external contract and must not change:
//!
//! ```yaml
//! write:
//!   create-empty-file: false
//! logging:
//!   severity: INFO
//!   format: ""
//!   file-path: ""
//!   log-rotate:
//!     max-file-size-mb: 512
//!     backup-file-count: 10
//!     compress: true
//! ```
//!
//! Every struct carries container-level `#[serde(default)]`, so a document
//! may specify any subset of keys and the absent ones take their defaults
//! at each nesting level.  This is the whole "defaults object plus
//! present-only overlay" mechanism; there is no hand-written merge.

use serde::{Deserialize, Serialize};

use super::severity::Severity;

// ── Default values ────────────────────────────────────────────────────────────
//
// Single defaults table shared by the `Default` impls and the serde overlay.

/// Default maximum size of the active log file before rotation, in megabytes.
pub const DEFAULT_MAX_FILE_SIZE_MB: i64 = 512;

/// Default number of rotated backup files retained.
pub const DEFAULT_BACKUP_FILE_COUNT: i64 = 10;

/// Whether rotated files are gzip-compressed by default.
pub const DEFAULT_COMPRESS: bool = true;

/// Default minimum severity recorded by the log writer.
pub const DEFAULT_SEVERITY: Severity = Severity::Info;

// ── Schema types ──────────────────────────────────────────────────────────────

/// Behavior applied to file creation during mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct WriteConfig {
    /// Whether a newly created file is materialized as an empty object in
    /// the backing store immediately, rather than on first flush.
    pub create_empty_file: bool,
}

/// Logging destination, format, severity, and rotation policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct LogConfig {
    /// Minimum severity recorded by the log writer.
    pub severity: Severity,
    /// Output format passed through to the log writer (e.g. `"text"` or
    /// `"json"`).  Empty selects the writer's built-in default.
    pub format: String,
    /// Path of the active log file.  Empty means log to the standard
    /// streams instead of a file.
    pub file_path: String,
    /// Rotation policy for the active log file.
    pub log_rotate: LogRotateConfig,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            severity: DEFAULT_SEVERITY,
            format: String::new(),
            file_path: String::new(),
            log_rotate: LogRotateConfig::default(),
        }
    }
}

/// Parameters for rotating the active log file.
///
/// Three knobs, read by the external rotator:
///
/// 1. `max-file-size-mb`: maximum size in megabytes the active log file may
///    reach before it is rotated.  Defaults to 512.
/// 2. `backup-file-count`: maximum number of rotated backup files retained,
///    oldest deleted first.  When set to `0`, all backups are retained.
///    Defaults to 10.
/// 3. `compress`: whether rotated files are gzip-compressed.  The active
///    log file is never compressed.  Defaults to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct LogRotateConfig {
    /// Maximum size in megabytes before the active log file is rotated.
    pub max_file_size_mb: i64,
    /// Maximum number of rotated backups retained; `0` retains all.
    pub backup_file_count: i64,
    /// Whether rotated files are gzip-compressed.
    pub compress: bool,
}

impl Default for LogRotateConfig {
    /// The default rotation policy: 512 MiB threshold, 10 backups, gzip on.
    fn default() -> Self {
        Self {
            max_file_size_mb: DEFAULT_MAX_FILE_SIZE_MB,
            backup_file_count: DEFAULT_BACKUP_FILE_COUNT,
            compress: DEFAULT_COMPRESS,
        }
    }
}

impl LogRotateConfig {
    /// Returns `true` when every rotated backup is retained.
    ///
    /// A `backup_file_count` of `0` means unlimited retention, not "retain
    /// none"; rotators must consult this instead of comparing the raw count.
    pub fn retains_all_backups(&self) -> bool {
        self.backup_file_count == 0
    }
}

/// Top-level mount configuration consumed by the mount process.
///
/// Owns its [`WriteConfig`] and [`LogConfig`] by value.  After construction
/// (and the loader's overlay) it is read-only; share it behind an `Arc`
/// rather than mutating it concurrently with reads.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MountConfig {
    /// File-creation behavior during mount.
    pub write: WriteConfig,
    /// Logging destination, format, severity, and rotation policy.
    pub logging: LogConfig,
}

impl MountConfig {
    /// Returns the fully-defaulted configuration: severity `INFO`, the
    /// default rotation policy, and zero values everywhere else
    /// (`create_empty_file = false`, empty `format` and `file-path`).
    pub fn new() -> Self {
        Self::default()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
