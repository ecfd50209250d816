//! Stateless contact operations over a [`ContactStore`](crate::store::ContactStore).
//!
//! - **search**: `find` / `find_first` with name-substring or exact-phone matching
//! - **edit**: `add`, `update` and `delete` with input validation
//! - **sort**: stable in-place ordering by name or phone list

pub mod edit;
pub mod search;
pub mod sort;

pub use edit::{add, delete, update};
pub use search::{find, find_first};
pub use sort::{sort_by_field, SortField};
