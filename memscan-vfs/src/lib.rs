//! Memscan Virtual File System
//!
//! Decouples input loading from the OS file system so the loader can be
//! exercised against in-memory fixtures.
//!
//! # Usage
//! ```rust
//! use memscan_vfs::{MemoryFileSystem, VirtualFileSystem};
//! use std::path::Path;
//!
//! let fs = MemoryFileSystem::new();
//! fs.write_file(Path::new("/input.txt"), b"mul(2,4)").unwrap();
//! assert_eq!(fs.read_to_string_lossy(Path::new("/input.txt")).unwrap(), "mul(2,4)");
//! ```

mod error;
mod memory;
mod native;
mod r#trait;

pub use error::{VfsError, VfsResult};
pub use memory::MemoryFileSystem;
pub use native::NativeFileSystem;
pub use r#trait::VirtualFileSystem;

/// Create a new memory-based file system.
pub fn memory_fs() -> MemoryFileSystem {
    MemoryFileSystem::new()
}

/// Create a new native file system.
pub fn native_fs() -> NativeFileSystem {
    NativeFileSystem::new()
}
