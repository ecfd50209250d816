use crate::error::{PersistenceError, PersistenceResult};
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Contact repository backed by a JSON document on disk.
///
/// The document is an array of objects with the keys `Name`, `Phone`,
/// `Email` and `Address`. Saves serialize into memory first and then write a
/// sibling temporary file that is renamed over the target, so a failed save
/// never truncates an existing file.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFileRepository {
    pretty: bool,
}

impl JsonFileRepository {
    /// Create a repository writing compact JSON.
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Create a repository writing indented JSON.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    fn encode(&self, contacts: &[Contact]) -> PersistenceResult<Vec<u8>> {
        let encoded = if self.pretty {
            serde_json::to_vec_pretty(contacts)
        } else {
            serde_json::to_vec(contacts)
        };
        encoded.map_err(PersistenceError::Serialize)
    }

    fn io_error(path: &Path, source: io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl ContactRepository for JsonFileRepository {
    fn load(&self, path: &Path) -> PersistenceResult<Vec<Contact>> {
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => PersistenceError::FileNotFound(path.to_path_buf()),
            _ => Self::io_error(path, e),
        })?;

        let contacts: Vec<Contact> =
            serde_json::from_slice(&bytes).map_err(|source| PersistenceError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        debug!("Read {} contacts from {}", contacts.len(), path.display());
        Ok(contacts)
    }

    fn save(&self, path: &Path, contacts: &[Contact]) -> PersistenceResult<()> {
        let bytes = self.encode(contacts)?;

        // Write through symlinks so the link itself survives the rename
        let target = match fs::canonicalize(path) {
            Ok(resolved) => resolved,
            Err(e) if e.kind() == io::ErrorKind::NotFound => path.to_path_buf(),
            Err(e) => return Err(Self::io_error(path, e)),
        };

        // An empty parent means the current directory
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)
            .map_err(|e| Self::io_error(path, e))?;
        match fs::metadata(&target) {
            Ok(existing) => tmp
                .as_file()
                .set_permissions(existing.permissions())
                .map_err(|e| Self::io_error(path, e))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(Self::io_error(path, e)),
        }
        tmp.write_all(&bytes).map_err(|e| Self::io_error(path, e))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| Self::io_error(path, e))?;
        tmp.persist(&target)
            .map_err(|e| Self::io_error(path, e.error))?;

        debug!(
            "Wrote {} contacts ({} bytes) to {}",
            contacts.len(),
            bytes.len(),
            target.display()
        );
        Ok(())
    }
}
