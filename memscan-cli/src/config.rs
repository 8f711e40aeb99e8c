//! CLI 配置
//!
//! 将 RunConfig 中的日志设置转换为 tracing 的过滤级别

use memscan_api::memscan_config::{LogLevel, Phase};
use memscan_api::RunConfig;
use tracing_subscriber::filter::LevelFilter;

/// CLI 日志配置
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    pub global: LevelFilter,
    pub loader: Option<LevelFilter>,
    pub scanner: Option<LevelFilter>,
    pub api: Option<LevelFilter>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: LevelFilter::WARN,
            loader: None,
            scanner: None,
            api: None,
        }
    }
}

impl LogConfig {
    pub fn from_run_config(config: &RunConfig) -> Self {
        let targets = &config.log_targets;
        Self {
            global: to_filter(config.log_level),
            loader: targets.get(Phase::Loader).map(to_filter),
            scanner: targets.get(Phase::Scanner).map(to_filter),
            api: targets.get(Phase::Api).map(to_filter),
        }
    }

    /// Get log level for a specific phase
    pub fn level_for(&self, phase: Phase) -> LevelFilter {
        let level = match phase {
            Phase::Loader => self.loader,
            Phase::Scanner => self.scanner,
            Phase::Api => self.api,
            Phase::Cli => None,
        };
        level.unwrap_or(self.global)
    }
}

/// silent = only errors
fn to_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Silent | LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    }
}
