//! VFS Error Types

use thiserror::Error;

/// Result type for VFS operations
pub type VfsResult<T> = Result<T, VfsError>;

/// Error type for VFS operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VfsError {
    /// File or directory not found
    #[error("Path not found: {path}")]
    NotFound { path: String },

    /// Permission denied
    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    /// Path exists but is not a regular file
    #[error("Not a file: {path}")]
    NotAFile { path: String },

    /// IO error
    #[error("IO error on '{path}': {message}")]
    Io { path: String, message: String },
}

impl VfsError {
    /// Classify an `std::io::Error` raised while accessing `path`
    pub fn from_io(err: std::io::Error, path: &std::path::Path) -> Self {
        let path = path.to_string_lossy().to_string();
        match err.kind() {
            std::io::ErrorKind::NotFound => VfsError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => VfsError::PermissionDenied { path },
            _ => VfsError::Io {
                path,
                message: err.to_string(),
            },
        }
    }

    /// Path the failed operation referred to
    pub fn path(&self) -> &str {
        match self {
            VfsError::NotFound { path }
            | VfsError::PermissionDenied { path }
            | VfsError::NotAFile { path }
            | VfsError::Io { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_from_io_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = VfsError::from_io(io, Path::new("input.txt"));
        assert_eq!(
            err,
            VfsError::NotFound {
                path: "input.txt".to_string()
            }
        );
        assert_eq!(err.to_string(), "Path not found: input.txt");
    }

    #[test]
    fn test_from_io_other() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err = VfsError::from_io(io, Path::new("a"));
        assert_eq!(err.path(), "a");
        assert!(err.to_string().contains("disk on fire"));
    }
}
