//! Domain layer for cloudmount-config.
//!
//! Pure configuration types with no dependencies on I/O or external state:
//! the mount configuration schema, its defaults, and the ordered severity
//! enumeration.  Everything here is plain data plus pure construction; file
//! reading and validation live in [`crate::loader`].

pub mod mount;
pub mod severity;

// Re-export the schema types at the domain boundary so callers can write
// `domain::MountConfig` instead of the longer path.
pub use mount::{
    LogConfig, LogRotateConfig, MountConfig, WriteConfig, DEFAULT_BACKUP_FILE_COUNT,
    DEFAULT_COMPRESS, DEFAULT_MAX_FILE_SIZE_MB, DEFAULT_SEVERITY,
};
pub use severity::{ParseSeverityError, Severity};
