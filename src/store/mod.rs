//! In-memory contact storage.

pub mod contact_store;

pub use contact_store::ContactStore;
