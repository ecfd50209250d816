//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by contact operations (add, update, delete).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// Candidate fields failed validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No contact matched the search term
    #[error("Contact not found: {0}")]
    NotFound(String),
}

/// Errors that can occur while loading or saving the contact file.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The file to load does not exist
    #[error("No saved contacts found at {}", .0.display())]
    FileNotFound(PathBuf),

    /// Reading or writing the file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not a valid contact document
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The contacts could not be serialized
    #[error("Failed to serialize contacts: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl PersistenceError {
    /// Whether this error only means there was nothing to load.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound(_))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with PersistenceError
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let err = ContactError::NotFound("ann".to_string());
        assert_eq!(err.to_string(), "Contact not found: ann");

        let err = ContactError::from(ValidationError::EmptyName);
        assert_eq!(err.to_string(), "Validation failed: Name cannot be empty");

        let err = PersistenceError::FileNotFound(PathBuf::from("contacts.json"));
        assert_eq!(err.to_string(), "No saved contacts found at contacts.json");

        let err = ConfigError::InvalidValue {
            var: "CONTACT_BOOK_FILE".to_string(),
            reason: "Cannot be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for CONTACT_BOOK_FILE: Cannot be empty"
        );
    }

    #[test]
    fn test_io_error_carries_path_and_source() {
        let err = PersistenceError::Io {
            path: PathBuf::from("/readonly/contacts.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/readonly/contacts.json"));
        assert!(err.to_string().contains("denied"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_is_not_found() {
        assert!(PersistenceError::FileNotFound(PathBuf::from("x")).is_not_found());
    }
}
