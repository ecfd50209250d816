//! Domain validation errors.

use std::fmt;

/// Errors raised when raw user input cannot become a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The contact name is empty.
    EmptyName,

    /// A phone token is not exactly ten ASCII digits.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number (expected 10 digits): {:?}", phone)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
