//! Memscan API - Scan orchestration layer
//!
//! Provides:
//! - Input loading (VFS read, lossy decode, line joining)
//! - Configuration abstraction (RunConfig)
//! - Unified error handling (MemscanError)
//!
//! For CLI convenience, this crate provides a global config singleton.
//! For library use, prefer the explicit `scan_file(fs, path, &config)` API.

use memscan_core::scan;
use memscan_vfs::VirtualFileSystem;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub mod config;
pub mod error;
pub mod loader;
pub mod types;

pub use config::{config as get_config, init as init_config, is_initialized, RunConfig};
pub use error::{ErrorReport, MemscanError};
pub use loader::{load_project, load_source, Project};
pub use types::{FileReport, RunReport, ScanOutput};

// Re-export core and config types
pub use memscan_config;
pub use memscan_core::{MulOp, SourcePosition};
pub use memscan_vfs::{MemoryFileSystem, NativeFileSystem};

pub const API_TARGET: &str = "memscan::api";

/// Scan text that is already in memory
pub fn scan_source(source: &str, config: &RunConfig) -> ScanOutput {
    debug!(target: API_TARGET, bytes = source.len(), ?config, "Scanning source");
    let output = ScanOutput::from_ops(scan(source).collect());
    debug!(
        target: API_TARGET,
        tokens = output.ops.len(),
        sum = output.sum,
        "Scan completed"
    );
    output
}

/// Load and scan one file
pub fn scan_file(
    fs: &dyn VirtualFileSystem,
    path: &Path,
    config: &RunConfig,
) -> Result<ScanOutput, MemscanError> {
    let source = load_source(fs, path)?;
    Ok(scan_source(&source, config))
}

/// Scan each input independently
///
/// Stops at the first input that cannot be loaded.
pub fn scan_inputs(
    fs: &dyn VirtualFileSystem,
    inputs: &[PathBuf],
    config: &RunConfig,
) -> Result<RunReport, MemscanError> {
    if inputs.is_empty() {
        return Err(MemscanError::NoInput);
    }

    let files = inputs
        .iter()
        .map(|path| {
            scan_file(fs, path, config).map(|output| FileReport {
                path: path.clone(),
                output,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let report = RunReport::new(files);
    info!(
        target: API_TARGET,
        files = report.files.len(),
        total = report.total,
        "Run completed"
    );
    Ok(report)
}

/// Scan with the global configuration
///
/// # Panics
/// If global config is not initialized
pub fn scan_with_global(source: &str) -> ScanOutput {
    scan_source(source, get_config())
}
