//! # cloudmount-config
//!
//! Configuration subsystem for CloudMount: the mount-level configuration
//! model (write behavior plus logging and log-rotation policy), the
//! defaulting rules applied when the user supplies partial or no
//! configuration, and the loader that overlays a user document onto those
//! defaults.
//!
//! This crate has zero dependencies on the mount machinery itself.  It is
//! consumed by three collaborators: the mount process reads the resolved
//! [`MountConfig`], the log writer reads `severity`/`format`/`file-path`,
//! and the log rotator reads the [`LogRotateConfig`] thresholds.
//!
//! # How defaulting works
//!
//! [`MountConfig::new`] returns the fully-defaulted configuration.  A user
//! config file never has to be complete: the loader deserializes whatever
//! subset of keys is present and every absent key keeps its default, at
//! each nesting level.  So this document:
//!
//! ```yaml
//! logging:
//!   log-rotate:
//!     max-file-size-mb: 100
//! ```
//!
//! produces the default configuration with only the rotation size threshold
//! changed (backup count stays 10, compression stays on).
//!
//! # One edge case worth knowing
//!
//! `logging.log-rotate.backup-file-count: 0` means "retain all rotated
//! backups", not "retain none".  [`LogRotateConfig::retains_all_backups`]
//! encodes that reading so rotator code cannot get it backwards.
//!
//! # Example
//!
//! ```rust
//! use cloudmount_config::{parse_config, ConfigFormat, Severity};
//!
//! let config = parse_config("logging:\n  severity: debug\n", ConfigFormat::Yaml)?;
//! assert_eq!(config.logging.severity, Severity::Debug);
//! assert_eq!(config.logging.log_rotate.max_file_size_mb, 512);
//! # Ok::<(), cloudmount_config::ConfigError>(())
//! ```

/// Domain layer: pure configuration types, defaults, and the severity enum.
pub mod domain;

/// Loader: document parsing, overlay onto defaults, and validation.
pub mod loader;

// Re-export the most-used types at the crate root so callers can write
// `cloudmount_config::MountConfig` instead of the longer module paths.
pub use domain::mount::{
    LogConfig, LogRotateConfig, MountConfig, WriteConfig, DEFAULT_BACKUP_FILE_COUNT,
    DEFAULT_COMPRESS, DEFAULT_MAX_FILE_SIZE_MB, DEFAULT_SEVERITY,
};
pub use domain::severity::{ParseSeverityError, Severity};
pub use loader::{load_config, parse_config, validate, ConfigError, ConfigFormat};
