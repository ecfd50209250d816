use contact_book::error::{PersistenceError, PersistenceResult};
use contact_book::models::Contact;
use contact_book::repositories::ContactRepository;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Keeps saved documents in memory keyed by path, tracks method calls for
/// verification, and can be told to fail saves or loads.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactRepository {
    files: Arc<Mutex<HashMap<PathBuf, Vec<Contact>>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_saves: Arc<Mutex<bool>>,
    corrupt: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a stored document at `path`.
    pub fn put_file(&self, path: impl Into<PathBuf>, contacts: Vec<Contact>) {
        let mut files = self.files.lock().unwrap();
        files.insert(path.into(), contacts);
    }

    /// Stored document at `path`, if any.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<Vec<Contact>> {
        let files = self.files.lock().unwrap();
        files.get(path.as_ref()).cloned()
    }

    /// Make every following save fail with an I/O error.
    pub fn fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }

    /// Make every following load of an existing document fail to parse.
    pub fn corrupt_files(&self, corrupt: bool) {
        *self.corrupt.lock().unwrap() = corrupt;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactRepository for MockContactRepository {
    fn load(&self, path: &Path) -> PersistenceResult<Vec<Contact>> {
        self.track_call("load");

        let files = self.files.lock().unwrap();
        let contacts = files
            .get(path)
            .cloned()
            .ok_or_else(|| PersistenceError::FileNotFound(path.to_path_buf()))?;

        if *self.corrupt.lock().unwrap() {
            let source = serde_json::from_str::<Vec<Contact>>("[{").unwrap_err();
            return Err(PersistenceError::Parse {
                path: path.to_path_buf(),
                source,
            });
        }

        Ok(contacts)
    }

    fn save(&self, path: &Path, contacts: &[Contact]) -> PersistenceResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(PersistenceError::Io {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "mock: save refused"),
            });
        }

        let mut files = self.files.lock().unwrap();
        files.insert(path.to_path_buf(), contacts.to_vec());
        Ok(())
    }
}
