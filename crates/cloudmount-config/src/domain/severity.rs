//! Ordered log severity levels.
//!
//! The severity is the minimum importance at which the log writer records an
//! entry.  Levels form a total order (`Trace` is the most verbose, `Off`
//! disables logging entirely), so a writer can filter with a plain
//! comparison: record an entry when its level is at or above the configured
//! severity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Minimum importance level at which a log entry is recorded.
///
/// Variants are declared from most to least verbose so the derived `Ord`
/// matches the severity order:
/// `Trace < Debug < Info < Warning < Error < Off`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
    /// Disables logging entirely.
    Off,
}

/// Error returned when a severity string is not one of the recognized levels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized severity '{0}': expected one of TRACE, DEBUG, INFO, WARNING, ERROR, OFF")]
pub struct ParseSeverityError(String);

impl Severity {
    /// Canonical (uppercase) name of the severity, as written in config
    /// documents and log output.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Off => "OFF",
        }
    }

    /// Maps the severity to the `tracing` level the log writer should use.
    ///
    /// Returns `None` for [`Severity::Off`], which has no `tracing`
    /// equivalent; the writer should emit nothing at all.
    pub fn as_tracing_level(self) -> Option<tracing::Level> {
        match self {
            Severity::Trace => Some(tracing::Level::TRACE),
            Severity::Debug => Some(tracing::Level::DEBUG),
            Severity::Info => Some(tracing::Level::INFO),
            Severity::Warning => Some(tracing::Level::WARN),
            Severity::Error => Some(tracing::Level::ERROR),
            Severity::Off => None,
        }
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Parses case-insensitively.  `warn` is accepted as an alias of
    /// `warning`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TRACE" => Ok(Severity::Trace),
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARNING" | "WARN" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            "OFF" => Ok(Severity::Off),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Serde goes through FromStr/Display rather than derived variant names so
// that config documents accept any casing and serialize to the canonical
// uppercase form.

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
