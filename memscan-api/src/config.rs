//! API 层配置
//!
//! 包含运行配置 RunConfig 和全局单例（供 CLI 使用）

use memscan_config::{LogLevel, LogTargets, ProjectConfig};
use once_cell::sync::OnceCell;

/// Run configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Print every extracted token
    pub show_tokens: bool,
    /// Print the report as JSON
    pub json: bool,
    /// Global log level
    pub log_level: LogLevel,
    /// Per-phase log level overrides
    pub log_targets: LogTargets,
}

impl RunConfig {
    /// Build from a project file; `None` fields fall back to defaults
    pub fn from_project(project: &ProjectConfig) -> Self {
        Self {
            show_tokens: project.show_tokens.unwrap_or(false),
            json: false,
            log_level: project.log_level.unwrap_or_default(),
            log_targets: project.log_targets.clone(),
        }
    }
}

// Global config singleton for CLI convenience
static GLOBAL_CONFIG: OnceCell<RunConfig> = OnceCell::new();

/// Initialize global configuration (must be called once before any operation)
///
/// # Panics
/// If config is already initialized
pub fn init(config: RunConfig) {
    GLOBAL_CONFIG
        .set(config)
        .expect("Config already initialized");
}

/// Get global config reference
///
/// # Panics
/// If config is not initialized
pub fn config() -> &'static RunConfig {
    GLOBAL_CONFIG.get().expect("Config not initialized")
}

/// Check if config is initialized
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}
