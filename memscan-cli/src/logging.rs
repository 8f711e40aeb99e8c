//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现分阶段日志控制。日志写入 stderr，
//! stdout 只留给扫描结果。

use crate::config::LogConfig;
use clap::ValueEnum;
use memscan_api::memscan_config::Phase;
use std::fs::File;
use std::io;
use std::path::Path;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry,
};

/// 日志输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    Pretty,
    /// 紧凑格式
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

/// Per-phase filter targets
pub fn build_targets(log_config: &LogConfig) -> Targets {
    Phase::ALL
        .iter()
        .fold(Targets::new().with_default(log_config.global), |targets, phase| {
            targets.with_target(phase.target(), log_config.level_for(*phase))
        })
}

/// 使用指定格式和日志配置初始化日志系统
///
/// With a log file, records are appended to it as well as written to stderr.
pub fn init_with_file(
    log_config: &LogConfig,
    format: LogFormat,
    file: Option<&Path>,
) -> io::Result<()> {
    let targets = build_targets(log_config);
    let stderr_layer =
        create_format_layer::<Registry, _, _>(format, io::stderr).with_filter(targets.clone());

    match file {
        Some(path) => {
            let file_handle = File::options().create(true).append(true).open(path)?;
            let file_layer = fmt::layer()
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file_handle))
                .with_filter(targets);
            tracing_subscriber::registry()
                .with(stderr_layer)
                .with(file_layer)
                .init();
        }
        None => {
            tracing_subscriber::registry().with(stderr_layer).init();
        }
    }
    Ok(())
}

/// Create formatter layer based on format
fn create_format_layer<S, W, F>(format: LogFormat, make_writer: F) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    W: io::Write + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
    }
}
