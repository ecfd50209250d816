//! ContactId value object.

use std::fmt;
use uuid::Uuid;

/// Stable identity key for a contact.
///
/// Contacts carry no natural key (two entries may share name, phones, email
/// and address), so every contact gets a random UUID when it is constructed.
/// The key lives only in memory and is never written to the data file.
///
/// # Example
///
/// ```
/// use contact_book::domain::ContactId;
///
/// let a = ContactId::generate();
/// let b = ContactId::generate();
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactId(Uuid);

impl ContactId {
    /// Generate a fresh random identity key.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ContactId {
    fn default() -> Self {
        Self::generate()
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
