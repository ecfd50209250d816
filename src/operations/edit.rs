//! Validated mutations: add, update and delete.

use super::search::find_first;
use crate::error::{ContactError, ContactResult};
use crate::models::{Contact, ContactDraft};
use crate::store::ContactStore;

/// Validate `draft` and append the new contact.
///
/// # Errors
///
/// Returns `ContactError::Validation` if the name is empty or any phone token
/// is not ten digits. The store is unchanged on error.
pub fn add(store: &mut ContactStore, draft: &ContactDraft) -> ContactResult<Contact> {
    let contact = draft.validate()?;
    store.append(contact.clone());
    Ok(contact)
}

/// Replace the first contact matching `term` with the validated `draft`.
///
/// The replacement keeps the original identity key but is appended at the
/// end, so it moves to the last position in storage order.
///
/// # Errors
///
/// - `ContactError::NotFound` if no contact matches `term`
/// - `ContactError::Validation` if the draft is invalid
///
/// The store is unchanged on error.
pub fn update(
    store: &mut ContactStore,
    term: &str,
    draft: &ContactDraft,
) -> ContactResult<Contact> {
    let original_id = find_first(store, term)
        .map(Contact::id)
        .ok_or_else(|| ContactError::NotFound(term.to_string()))?;

    let mut replacement = draft.validate()?;
    replacement.id = original_id;

    store.remove_by_id(original_id);
    store.append(replacement.clone());
    Ok(replacement)
}

/// Remove the first contact matching `term`.
///
/// # Errors
///
/// Returns `ContactError::NotFound` if no contact matches `term`.
pub fn delete(store: &mut ContactStore, term: &str) -> ContactResult<Contact> {
    let target = find_first(store, term)
        .map(Contact::id)
        .ok_or_else(|| ContactError::NotFound(term.to_string()))?;

    store
        .remove_by_id(target)
        .ok_or_else(|| ContactError::NotFound(term.to_string()))
}
