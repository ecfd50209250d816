//! Ordered in-memory collection of contacts.

use crate::domain::ContactId;
use crate::models::Contact;
use std::cmp::Ordering;

/// Owns the ordered list of contacts.
///
/// Insertion order is kept until a sort rewrites it. The store has no
/// behavior beyond storage; matching and validation live in
/// [`crate::operations`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `contacts` in the given order.
    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    /// Insert a contact at the end.
    pub fn append(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Remove the record with `contact`'s identity key.
    ///
    /// Returns the removed record, or `None` if no record carries that key.
    pub fn remove(&mut self, contact: &Contact) -> Option<Contact> {
        self.remove_by_id(contact.id())
    }

    /// Remove the record with the given identity key.
    pub fn remove_by_id(&mut self, id: ContactId) -> Option<Contact> {
        let index = self.contacts.iter().position(|c| c.id() == id)?;
        Some(self.contacts.remove(index))
    }

    /// Read-only view of all contacts in storage order.
    pub fn all(&self) -> &[Contact] {
        &self.contacts
    }

    /// Replace the whole collection, returning the previous contents.
    pub fn replace(&mut self, contacts: Vec<Contact>) -> Vec<Contact> {
        std::mem::replace(&mut self.contacts, contacts)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Contact names in storage order.
    pub fn names(&self) -> Vec<&str> {
        self.contacts.iter().map(|c| c.name.as_str()).collect()
    }

    /// Stable in-place sort.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Contact, &Contact) -> Ordering,
    {
        self.contacts.sort_by(compare);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContactDraft;

    fn contact(name: &str, phone: &str) -> Contact {
        ContactDraft::new(name, phone, "", "").validate().unwrap()
    }

    #[test]
    fn test_append_keeps_order() {
        let mut store = ContactStore::new();
        store.append(contact("Bob", "1111111111"));
        store.append(contact("Ann", "2222222222"));
        assert_eq!(store.names(), vec!["Bob", "Ann"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_by_identity_not_structure() {
        let twin_a = contact("Ann", "1111111111");
        let twin_b = contact("Ann", "1111111111");
        assert_eq!(twin_a, twin_b);

        let mut store = ContactStore::from_contacts(vec![twin_a.clone(), twin_b.clone()]);
        let removed = store.remove(&twin_b).unwrap();
        assert_eq!(removed.id(), twin_b.id());
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].id(), twin_a.id());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = ContactStore::from_contacts(vec![contact("Ann", "1111111111")]);
        let stranger = contact("Ann", "1111111111");
        assert!(store.remove(&stranger).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_replace_returns_previous() {
        let mut store = ContactStore::from_contacts(vec![contact("Old", "1111111111")]);
        let previous = store.replace(vec![contact("New", "2222222222")]);
        assert_eq!(previous.len(), 1);
        assert_eq!(previous[0].name, "Old");
        assert_eq!(store.names(), vec!["New"]);
    }

    #[test]
    fn test_empty_store() {
        let store = ContactStore::new();
        assert!(store.is_empty());
        assert!(store.all().is_empty());
        assert!(store.names().is_empty());
    }
}
