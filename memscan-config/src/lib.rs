//! Memscan Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Memscan crates.

use serde::Deserialize;

/// Pipeline phase, used for phase-specific log levels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Loader,
    Scanner,
    Api,
    Cli,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Loader, Phase::Scanner, Phase::Api, Phase::Cli];

    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Loader => "loader",
            Phase::Scanner => "scanner",
            Phase::Api => "api",
            Phase::Cli => "cli",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("memscan::{}", self.as_str())
    }
}

/// 日志级别
///
/// `Silent` 只保留错误输出
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Silent,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse a level name, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "silent" => Some(LogLevel::Silent),
            "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Per-phase log level overrides
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogTargets {
    pub loader: Option<LogLevel>,
    pub scanner: Option<LogLevel>,
    pub api: Option<LogLevel>,
}

impl LogTargets {
    /// Override for a phase, if one was configured
    pub fn get(&self, phase: Phase) -> Option<LogLevel> {
        match phase {
            Phase::Loader => self.loader,
            Phase::Scanner => self.scanner,
            Phase::Api => self.api,
            Phase::Cli => None,
        }
    }
}

/// Project file contents (`memscan.json`)
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectConfig {
    /// Input files, relative to the project file
    #[serde(default)]
    pub inputs: Vec<String>,
    /// Print every extracted token
    pub show_tokens: Option<bool>,
    /// Global log level
    pub log_level: Option<LogLevel>,
    #[serde(default)]
    pub log_targets: LogTargets,
}

impl ProjectConfig {
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}
