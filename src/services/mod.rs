//! Application service layer.
//!
//! `ContactBook` owns the contact state and exposes the operations a
//! presentation layer calls. It contains no presentation logic of its own.

mod contact_book;

pub use contact_book::ContactBook;

// Re-export common types used by callers of the service
pub use crate::models::{Contact, ContactDraft};
pub use crate::operations::SortField;
