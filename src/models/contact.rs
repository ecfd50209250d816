//! Contact model representing a person in the contact book.

use crate::domain::{ContactId, PhoneNumber, ValidationError};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A contact in the book.
///
/// The serialized form uses the capitalized keys `Name`, `Phone`, `Email` and
/// `Address`; `Phone` is always an array. The `id` is runtime-only: it is
/// skipped on save and regenerated on load.
///
/// Equality is structural and ignores `id`. Use [`Contact::id`] when identity
/// matters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    /// Identity key, unique per constructed contact
    #[serde(skip)]
    pub id: ContactId,

    /// Display name, non-empty for contacts created through validation
    #[serde(rename = "Name")]
    pub name: String,

    /// Phone numbers in input order
    #[serde(rename = "Phone")]
    pub phones: Vec<String>,

    /// Email address (free text, may be empty)
    #[serde(rename = "Email", default, deserialize_with = "null_as_empty")]
    pub email: String,

    /// Postal address (free text, may be empty)
    #[serde(rename = "Address", default, deserialize_with = "null_as_empty")]
    pub address: String,
}

/// Read an optional text field, treating `null` like a missing key.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Contact {
    /// Create a contact from validated parts.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is empty.
    pub fn new(
        name: impl Into<String>,
        phones: Vec<PhoneNumber>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        Ok(Self {
            id: ContactId::generate(),
            name,
            phones: phones.into_iter().map(PhoneNumber::into_inner).collect(),
            email: email.into(),
            address: address.into(),
        })
    }

    /// Identity key of this contact.
    pub fn id(&self) -> ContactId {
        self.id
    }

    /// Whether `term` selects this contact.
    ///
    /// The name matches if it contains `term` ignoring case. A phone matches
    /// only on exact, case-sensitive equality; partial numbers never match.
    pub fn matches(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase())
            || self.phones.iter().any(|phone| phone == term)
    }
}

impl PartialEq for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.phones == other.phones
            && self.email == other.email
            && self.address == other.address
    }
}

impl Eq for Contact {}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.phones.join(", "))
    }
}

/// Raw candidate fields for a new or updated contact.
///
/// `phone_csv` holds comma-separated numbers exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub phone_csv: String,
    pub email: String,
    pub address: String,
}

impl ContactDraft {
    pub fn new(
        name: impl Into<String>,
        phone_csv: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone_csv: phone_csv.into(),
            email: email.into(),
            address: address.into(),
        }
    }

    /// Validate the draft and build a contact with a fresh identity key.
    ///
    /// # Errors
    ///
    /// - `ValidationError::EmptyName` if the name is empty
    /// - `ValidationError::InvalidPhone` for the first phone token that is not
    ///   exactly ten digits
    pub fn validate(&self) -> Result<Contact, ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let phones = PhoneNumber::parse_list(&self.phone_csv)?;

        Contact::new(
            self.name.clone(),
            phones,
            self.email.clone(),
            self.address.clone(),
        )
    }
}
