//! Core error types for storedesk.
//!
//! [`StoreDeskError`] covers the failures that can cross a crate boundary:
//! configuration, fixture loading, unknown pages or records, bad command-line
//! input, and rejected form submissions. Form validation inside the engine is
//! represented as data, not as an error; [`ValidationError`] is only used when
//! a failed submission has to be reported at the process boundary.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// A rejected form submission with per-field messages.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use storedesk_core::error::ValidationError;
///
/// let mut fields = BTreeMap::new();
/// fields.insert("email".to_string(), vec!["email is required".to_string()]);
/// let err = ValidationError::new(fields);
/// assert_eq!(err.to_string(), "email: email is required");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    /// Error messages keyed by field name.
    pub field_errors: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    /// Creates a `ValidationError` from per-field messages.
    pub const fn new(field_errors: BTreeMap<String, Vec<String>>) -> Self {
        Self { field_errors }
    }

    /// Returns the number of fields with at least one message.
    pub fn len(&self) -> usize {
        self.field_errors.len()
    }

    /// Returns `true` if no field has a message.
    pub fn is_empty(&self) -> bool {
        self.field_errors.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, errors) in &self.field_errors {
            for error in errors {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {error}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// The primary error type for storedesk.
#[derive(Error, Debug)]
pub enum StoreDeskError {
    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Fixture or payload (de)serialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// A page, tab, or record was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input supplied by a caller could not be interpreted.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A form submission was rejected by validation.
    #[error("Validation error: {0}")]
    Validation(ValidationError),

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl StoreDeskError {
    /// Returns the process exit code associated with this error.
    ///
    /// - `InvalidInput` -> 2 (usage error)
    /// - `Validation` -> 3
    /// - `NotFound` -> 4
    /// - everything else -> 1
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput(_) => 2,
            Self::Validation(_) => 3,
            Self::NotFound(_) => 4,
            Self::ConfigurationError(_) | Self::SerializationError(_) | Self::IoError(_) => 1,
        }
    }
}

impl From<serde_json::Error> for StoreDeskError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// A convenience type alias for `Result<T, StoreDeskError>`.
pub type StoreDeskResult<T> = Result<T, StoreDeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display_multiple() {
        let mut fields = BTreeMap::new();
        fields.insert("country".to_string(), vec!["country is required".to_string()]);
        fields.insert("email".to_string(), vec!["email is required".to_string()]);
        let err = ValidationError::new(fields);
        assert_eq!(
            err.to_string(),
            "country: country is required; email: email is required"
        );
        assert_eq!(err.len(), 2);
    }

    #[test]
    fn test_validation_error_empty() {
        let err = ValidationError::default();
        assert!(err.is_empty());
        assert_eq!(err.to_string(), "");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(StoreDeskError::InvalidInput("x".into()).exit_code(), 2);
        assert_eq!(
            StoreDeskError::Validation(ValidationError::default()).exit_code(),
            3
        );
        assert_eq!(StoreDeskError::NotFound("x".into()).exit_code(), 4);
        assert_eq!(StoreDeskError::ConfigurationError("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_error_display() {
        let err = StoreDeskError::NotFound("page 'billing'".into());
        assert_eq!(err.to_string(), "Not found: page 'billing'");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: StoreDeskError = io_err.into();
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: StoreDeskError = json_err.into();
        assert!(matches!(err, StoreDeskError::SerializationError(_)));
    }
}
