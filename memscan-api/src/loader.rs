//! 输入加载
//!
//! Reads inputs and project files through the VFS. Input text is decoded
//! lossily and its lines are joined with no separator.

use crate::error::MemscanError;
use memscan_config::ProjectConfig;
use memscan_core::join_lines;
use memscan_vfs::VirtualFileSystem;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const LOADER_TARGET: &str = "memscan::loader";

/// Load one input file as a single line of text
pub fn load_source(fs: &dyn VirtualFileSystem, path: &Path) -> Result<String, MemscanError> {
    let raw = fs.read_to_string_lossy(path)?;
    let joined = join_lines(&raw);
    info!(
        target: LOADER_TARGET,
        path = %path.display(),
        bytes = raw.len(),
        joined_bytes = joined.len(),
        "Loaded input"
    );
    Ok(joined)
}

/// A parsed project file and its input paths
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub config: ProjectConfig,
    /// Inputs resolved against the project file's directory
    pub inputs: Vec<PathBuf>,
}

/// Read and parse a project file
pub fn load_project(fs: &dyn VirtualFileSystem, path: &Path) -> Result<Project, MemscanError> {
    let content = fs.read_to_string_lossy(path)?;
    let config = ProjectConfig::from_json(&content).map_err(|e| MemscanError::Config {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let base_dir = path.parent().unwrap_or(Path::new("."));
    let inputs: Vec<PathBuf> = config.inputs.iter().map(|i| base_dir.join(i)).collect();
    debug!(
        target: LOADER_TARGET,
        path = %path.display(),
        inputs = inputs.len(),
        "Loaded project file"
    );

    Ok(Project { config, inputs })
}
