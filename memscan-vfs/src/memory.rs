//! In-memory file system implementation

use crate::error::{VfsError, VfsResult};
use crate::VirtualFileSystem;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// An in-memory file system, keyed by normalized path.
///
/// Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    files: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
}

impl MemoryFileSystem {
    /// Create a new empty memory file system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new memory file system pre-populated with `(path, content)` pairs.
    pub fn with_files<I, S, C>(files: I) -> Self
    where
        I: IntoIterator<Item = (S, C)>,
        S: AsRef<str>,
        C: Into<Vec<u8>>,
    {
        let map = files
            .into_iter()
            .map(|(path, content)| (normalize(path.as_ref()), content.into()))
            .collect();
        Self {
            files: Arc::new(RwLock::new(map)),
        }
    }
}

/// Forward slashes everywhere so fixtures are platform independent
fn normalize(path: &str) -> String {
    path.replace('\\', "/")
}

fn key(path: &Path) -> String {
    normalize(&path.to_string_lossy())
}

impl VirtualFileSystem for MemoryFileSystem {
    fn read_file(&self, path: &Path) -> VfsResult<Vec<u8>> {
        let normalized = key(path);
        let files = self.files.read().map_err(|_| VfsError::Io {
            path: normalized.clone(),
            message: String::from("Lock poisoned"),
        })?;

        files
            .get(&normalized)
            .cloned()
            .ok_or(VfsError::NotFound { path: normalized })
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> VfsResult<()> {
        let normalized = key(path);
        let mut files = self.files.write().map_err(|_| VfsError::Io {
            path: normalized.clone(),
            message: String::from("Lock poisoned"),
        })?;
        files.insert(normalized, content.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        match self.files.read() {
            Ok(files) => files.contains_key(&key(path)),
            Err(_) => false,
        }
    }

    fn is_file(&self, path: &Path) -> bool {
        // no directories in memory
        self.exists(path)
    }
}
