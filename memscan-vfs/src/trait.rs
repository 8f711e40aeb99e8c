//! VirtualFileSystem trait definition

use crate::error::VfsResult;
use std::path::Path;

/// Virtual File System trait
///
/// # Implementations
/// - `MemoryFileSystem`: In-memory file system
/// - `NativeFileSystem`: Native OS file system
pub trait VirtualFileSystem: Send + Sync {
    /// Read file contents as bytes
    fn read_file(&self, path: &Path) -> VfsResult<Vec<u8>>;

    /// Write file contents
    ///
    /// Creates the file if it doesn't exist, truncates it if it does.
    fn write_file(&self, path: &Path, content: &[u8]) -> VfsResult<()>;

    /// Check if path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a file
    fn is_file(&self, path: &Path) -> bool;

    /// Read file contents as text without validating the encoding
    ///
    /// Invalid UTF-8 sequences become U+FFFD.
    fn read_to_string_lossy(&self, path: &Path) -> VfsResult<String> {
        let bytes = self.read_file(path)?;
        Ok(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })
    }
}
