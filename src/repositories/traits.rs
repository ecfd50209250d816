use crate::error::PersistenceResult;
use crate::models::Contact;
use std::path::Path;

/// Repository for persisting the whole contact list.
///
/// Provides abstraction over contact storage, enabling different
/// implementations (JSON file, in-memory mock). The list is always read and
/// written as a whole; there is no per-record access.
pub trait ContactRepository: Send + Sync {
    /// Read every contact stored at `path`, in stored order.
    ///
    /// Returns `PersistenceError::FileNotFound` when nothing has been saved
    /// at `path` yet.
    fn load(&self, path: &Path) -> PersistenceResult<Vec<Contact>>;

    /// Write `contacts` to `path`, replacing whatever was stored there.
    ///
    /// On error the previously stored contents must still be intact.
    fn save(&self, path: &Path, contacts: &[Contact]) -> PersistenceResult<()>;
}
