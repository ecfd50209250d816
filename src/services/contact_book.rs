//! Contact book service.
//!
//! Owns the store, routes calls to the stateless operations and the
//! persistence repository, and logs each outcome.

use crate::error::{ContactResult, PersistenceResult};
use crate::models::{Contact, ContactDraft};
use crate::operations::{self, SortField};
use crate::repositories::{ContactRepository, JsonFileRepository};
use crate::store::ContactStore;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Owned contact book state.
///
/// Every operation either completes or returns a typed error; nothing here
/// panics or aborts. Failed operations leave the in-memory store as it was.
pub struct ContactBook {
    store: ContactStore,
    repository: Arc<dyn ContactRepository>,
}

impl ContactBook {
    /// Create an empty book persisting through `repository`.
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self {
            store: ContactStore::new(),
            repository,
        }
    }

    /// Create an empty book persisting to compact JSON files.
    pub fn with_json_files() -> Self {
        Self::new(Arc::new(JsonFileRepository::new()))
    }

    /// Validate the fields and append a new contact.
    pub fn add_contact(
        &mut self,
        name: &str,
        phone_csv: &str,
        email: &str,
        address: &str,
    ) -> ContactResult<Contact> {
        let draft = ContactDraft::new(name, phone_csv, email, address);
        match operations::add(&mut self.store, &draft) {
            Ok(contact) => {
                info!("Added contact {} ({})", contact.name, contact.id());
                Ok(contact)
            }
            Err(e) => {
                warn!("Rejected new contact: {}", e);
                Err(e)
            }
        }
    }

    /// All contacts matching `term` by name substring or exact phone.
    pub fn search_contacts(&self, term: &str) -> Vec<Contact> {
        let results: Vec<Contact> = operations::find(&self.store, term)
            .into_iter()
            .cloned()
            .collect();
        debug!("Search {:?} matched {} contacts", term, results.len());
        results
    }

    /// Replace the first contact matching `term` with the given fields.
    ///
    /// The updated contact moves to the end of the list.
    pub fn update_contact(
        &mut self,
        term: &str,
        name: &str,
        phone_csv: &str,
        email: &str,
        address: &str,
    ) -> ContactResult<Contact> {
        let draft = ContactDraft::new(name, phone_csv, email, address);
        match operations::update(&mut self.store, term, &draft) {
            Ok(contact) => {
                info!("Updated contact {} ({})", contact.name, contact.id());
                Ok(contact)
            }
            Err(e) => {
                warn!("Update for {:?} failed: {}", term, e);
                Err(e)
            }
        }
    }

    /// Delete the first contact matching `term`.
    pub fn delete_contact(&mut self, term: &str) -> ContactResult<Contact> {
        match operations::delete(&mut self.store, term) {
            Ok(contact) => {
                info!("Deleted contact {} ({})", contact.name, contact.id());
                Ok(contact)
            }
            Err(e) => {
                warn!("Delete for {:?} failed: {}", term, e);
                Err(e)
            }
        }
    }

    /// Stable in-place sort by `field`.
    pub fn sort_contacts(&mut self, field: SortField) {
        operations::sort_by_field(&mut self.store, field);
        debug!("Sorted {} contacts by {}", self.store.len(), field);
    }

    /// Write all contacts to `path`.
    pub fn save_to(&self, path: impl AsRef<Path>) -> PersistenceResult<()> {
        let path = path.as_ref();
        self.repository.save(path, self.store.all())?;
        info!("Saved {} contacts to {}", self.store.len(), path.display());
        Ok(())
    }

    /// Replace all contacts with those stored at `path`.
    ///
    /// Returns the number of contacts loaded. On error the current contacts
    /// are kept.
    pub fn load_from(&mut self, path: impl AsRef<Path>) -> PersistenceResult<usize> {
        let path = path.as_ref();
        let contacts = self.repository.load(path)?;
        let count = contacts.len();
        let discarded = self.store.replace(contacts);
        info!(
            "Loaded {} contacts from {} (discarded {})",
            count,
            path.display(),
            discarded.len()
        );
        Ok(count)
    }

    /// Load `path` if it exists.
    ///
    /// A missing file returns `Ok(None)` and keeps the current contacts. A
    /// file that exists but cannot be read or parsed is an error.
    pub fn load_if_present(
        &mut self,
        path: impl AsRef<Path>,
    ) -> PersistenceResult<Option<usize>> {
        match self.load_from(path) {
            Ok(count) => Ok(Some(count)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// All contacts in storage order.
    pub fn list_all(&self) -> &[Contact] {
        self.store.all()
    }

    /// Underlying store.
    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// One-line summary of every contact name, e.g. `Contact Names: Ann, Bob`.
    pub fn dashboard(&self) -> String {
        format!("Contact Names: {}", self.store.names().join(", "))
    }

    /// Multi-line listing with one `Name: phone, phone` line per contact.
    pub fn listing(&self) -> String {
        if self.store.is_empty() {
            return "No contacts available.".to_string();
        }
        self.store
            .all()
            .iter()
            .map(Contact::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for ContactBook {
    fn default() -> Self {
        Self::with_json_files()
    }
}
