//! Stable sorting of the store.

use crate::store::ContactStore;
use std::fmt;
use std::str::FromStr;

/// Field to sort contacts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    /// Byte-wise comparison of the name (uppercase sorts before lowercase)
    Name,
    /// Lexicographic comparison of the phone list
    Phone,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "phone" => Ok(SortField::Phone),
            other => Err(format!("Unknown sort field: {} (expected name or phone)", other)),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortField::Name => write!(f, "Name"),
            SortField::Phone => write!(f, "Phone"),
        }
    }
}

/// Sort the store in place, ascending by `field`.
///
/// The sort is stable: contacts with equal keys keep their relative order.
/// Phone lists compare entry by entry; a list that is a prefix of another
/// sorts first.
pub fn sort_by_field(store: &mut ContactStore, field: SortField) {
    match field {
        SortField::Name => store.sort_by(|a, b| a.name.cmp(&b.name)),
        SortField::Phone => store.sort_by(|a, b| a.phones.cmp(&b.phones)),
    }
}
