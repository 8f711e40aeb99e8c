//! Native file system implementation

use crate::error::{VfsError, VfsResult};
use crate::VirtualFileSystem;
use std::path::Path;

/// A native OS file system implementation wrapping `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct NativeFileSystem;

impl NativeFileSystem {
    /// Create a new native file system.
    pub fn new() -> Self {
        Self
    }
}

impl VirtualFileSystem for NativeFileSystem {
    fn read_file(&self, path: &Path) -> VfsResult<Vec<u8>> {
        if path.is_dir() {
            return Err(VfsError::NotAFile {
                path: path.to_string_lossy().to_string(),
            });
        }
        std::fs::read(path).map_err(|e| VfsError::from_io(e, path))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> VfsResult<()> {
        std::fs::write(path, content).map_err(|e| VfsError::from_io(e, path))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("memscan_vfs_{}_{}", name, std::process::id()))
    }

    #[test]
    fn test_native_read_write() {
        let fs = NativeFileSystem::new();
        let path = temp_file("rw");
        let _ = std::fs::remove_file(&path);

        assert!(!fs.exists(&path));
        fs.write_file(&path, b"mul(3,3)").unwrap();
        assert!(fs.is_file(&path));
        assert_eq!(fs.read_file(&path).unwrap(), b"mul(3,3)");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_native_not_found() {
        let fs = NativeFileSystem::new();
        let path = temp_file("missing");
        let _ = std::fs::remove_file(&path);

        let err = fs.read_file(&path).unwrap_err();
        assert!(matches!(err, VfsError::NotFound { .. }));
    }

    #[test]
    fn test_native_directory_is_not_a_file() {
        let fs = NativeFileSystem::new();
        let err = fs.read_file(&std::env::temp_dir()).unwrap_err();
        assert!(matches!(err, VfsError::NotAFile { .. }));
    }

    #[test]
    fn test_native_lossy_text() {
        let fs = NativeFileSystem::new();
        let path = temp_file("lossy");
        fs.write_file(&path, b"mul(1,\xff2)").unwrap();

        let text = fs.read_to_string_lossy(&path).unwrap();
        assert_eq!(text, "mul(1,\u{FFFD}2)");

        std::fs::remove_file(&path).unwrap();
    }
}
