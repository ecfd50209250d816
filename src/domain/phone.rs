//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile phone number regex"));

/// Separator between numbers in raw phone input.
pub const PHONE_SEPARATOR: char = ',';

/// A validated phone number: exactly ten ASCII digits.
///
/// No normalization happens here. Surrounding whitespace, dashes or a leading
/// `+` all make the number invalid.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("5551234567").unwrap();
/// assert_eq!(phone.as_str(), "5551234567");
/// assert!(PhoneNumber::new("555-123-4567").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the input is exactly ten
    /// ASCII digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !PHONE_REGEX.is_match(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Parse comma-separated phone input into validated numbers.
    ///
    /// Tokens are split strictly on `,` and are not trimmed, so
    /// `"5551234567, 5559876543"` fails on the second token. Empty input
    /// yields a single empty token and fails as well, which guarantees the
    /// result is never empty.
    pub fn parse_list(csv: &str) -> Result<Vec<Self>, ValidationError> {
        csv.split(PHONE_SEPARATOR).map(Self::new).collect()
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = PhoneNumber::new("5551234567").unwrap();
        assert_eq!(phone.as_str(), "5551234567");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(PhoneNumber::new("").is_err());
        assert!(PhoneNumber::new("555123456").is_err());
        assert!(PhoneNumber::new("55512345678").is_err());
        assert!(PhoneNumber::new("555123456a").is_err());
        assert!(PhoneNumber::new("555-123-45").is_err());
        assert!(PhoneNumber::new(" 5551234567").is_err());
        assert!(PhoneNumber::new("5551234567\n").is_err());
        assert!(PhoneNumber::new("0000000000").is_ok());
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not part of the accepted shape
        assert!(PhoneNumber::new("١٢٣٤٥٦٧٨٩٠").is_err());
    }

    #[test]
    fn test_parse_list_multiple() {
        let phones = PhoneNumber::parse_list("5551234567,5559876543").unwrap();
        let raw: Vec<&str> = phones.iter().map(PhoneNumber::as_str).collect();
        assert_eq!(raw, vec!["5551234567", "5559876543"]);
    }

    #[test]
    fn test_parse_list_does_not_trim() {
        let result = PhoneNumber::parse_list("5551234567, 5559876543");
        assert_eq!(
            result,
            Err(ValidationError::InvalidPhone(" 5559876543".to_string()))
        );
    }

    #[test]
    fn test_parse_list_empty_input() {
        assert_eq!(
            PhoneNumber::parse_list(""),
            Err(ValidationError::InvalidPhone(String::new()))
        );
    }

    #[test]
    fn test_parse_list_trailing_comma() {
        assert!(PhoneNumber::parse_list("5551234567,").is_err());
    }

    #[test]
    fn test_phone_display() {
        let phone = PhoneNumber::new("5551234567").unwrap();
        assert_eq!(format!("{}", phone), "5551234567");
    }
}
