//! Data models for the contact book.
//!
//! `Contact` is the stored record; `ContactDraft` carries the raw, unvalidated
//! fields a user typed in.

pub mod contact;

pub use contact::{Contact, ContactDraft};
