//! Domain value objects and types.
//!
//! Type-safe wrappers for contact identity keys and phone numbers. Phone
//! numbers are validated at construction time so an invalid number can never
//! reach the store through `add` or `update`.

pub mod contact_id;
pub mod errors;
pub mod phone;

pub use contact_id::ContactId;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
