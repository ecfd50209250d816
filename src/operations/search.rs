//! Linear contact search.

use crate::models::Contact;
use crate::store::ContactStore;

/// All contacts selected by `term`, in storage order.
///
/// A contact is selected when its name contains `term` ignoring case, or when
/// one of its phone numbers equals `term` exactly. Phone numbers are never
/// matched by substring, so `"555"` does not find `"5551234567"`.
pub fn find<'a>(store: &'a ContactStore, term: &str) -> Vec<&'a Contact> {
    store.all().iter().filter(|c| c.matches(term)).collect()
}

/// The first contact selected by `term`, in storage order.
///
/// Update and delete act on this single record even when the term selects
/// several; callers that need to disambiguate should use [`find`].
pub fn find_first<'a>(store: &'a ContactStore, term: &str) -> Option<&'a Contact> {
    store.all().iter().find(|c| c.matches(term))
}
