//! Contact Book - a single-user personal contact list.
//!
//! Keeps an ordered in-memory list of contacts, offers linear search, update,
//! delete and stable sorting over it, and persists the whole list as one JSON
//! document. An MCP server exposes the same operations as tools.
//!
//! # Architecture
//!
//! - **domain**: Value objects (identity keys, validated phone numbers)
//! - **models**: The `Contact` record and raw `ContactDraft` input
//! - **store**: Ordered in-memory contact collection
//! - **operations**: Stateless search, edit and sort functions over the store
//! - **repositories**: Whole-file persistence (JSON on disk)
//! - **services**: `ContactBook`, the owned state object callers talk to
//! - **server**: MCP tool server over stdio
//! - **config**: Configuration from environment variables
//! - **error**: Error types

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod operations;
pub mod repositories;
pub mod server;
pub mod services;
pub mod store;

pub use config::Config;
pub use error::{ConfigError, ContactError, PersistenceError};
pub use models::{Contact, ContactDraft};
pub use operations::SortField;
pub use repositories::{ContactRepository, JsonFileRepository};
pub use server::ContactBookMcpServer;
pub use services::ContactBook;
pub use store::ContactStore;
