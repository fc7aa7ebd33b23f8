//! Error types for configuration loading and metadata assembly.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort rendering before any document is produced.
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration file is missing, unreadable, not JSON, or not a mapping.
    #[error("configuration source {path}: {reason}")]
    Source {
        /// Path of the configuration file.
        path: PathBuf,
        /// What went wrong while reading or parsing it.
        reason: String,
    },

    /// A required configuration field is absent or has the wrong shape.
    #[error("invalid configuration field '{field}': {reason}")]
    Validation {
        /// Dotted path of the offending field (e.g. `metadata.openGraph`).
        field: &'static str,
        /// Description of what's wrong.
        reason: String,
    },
}

impl Error {
    pub(crate) fn missing(field: &'static str) -> Self {
        Self::Validation {
            field,
            reason: "required field is missing".to_string(),
        }
    }

    pub(crate) fn shape(field: &'static str, expected: &str) -> Self {
        Self::Validation {
            field,
            reason: format!("expected {expected}"),
        }
    }

    /// The field named by a validation error, if this is one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            Self::Source { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_display_includes_path() {
        let err = Error::Source {
            path: PathBuf::from("config/setting.json"),
            reason: "file not found".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("config/setting.json"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn missing_field_display() {
        let err = Error::missing("appUrl");
        assert_eq!(
            err.to_string(),
            "invalid configuration field 'appUrl': required field is missing"
        );
        assert_eq!(err.field(), Some("appUrl"));
    }

    #[test]
    fn shape_error_names_expectation() {
        let err = Error::shape("frame", "a JSON object");
        assert!(err.to_string().contains("expected a JSON object"));
    }

    #[test]
    fn source_error_has_no_field() {
        let err = Error::Source {
            path: PathBuf::from("x.json"),
            reason: "bad".to_string(),
        };
        assert!(err.field().is_none());
    }
}
