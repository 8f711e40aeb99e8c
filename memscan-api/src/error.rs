//! API 错误类型

use memscan_vfs::VfsError;
use serde::Serialize;
use thiserror::Error;

/// Memscan 错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MemscanError {
    /// 输入读取失败
    #[error("{0}")]
    Vfs(#[from] VfsError),

    /// 项目文件无法解析
    #[error("Invalid project file '{path}': {message}")]
    Config { path: String, message: String },

    /// 没有任何输入文件
    #[error("No input given: pass a file path or a project file listing `inputs`")]
    NoInput,
}

impl MemscanError {
    /// 获取错误阶段名称
    pub fn phase(&self) -> &'static str {
        match self {
            MemscanError::Vfs(_) => "loader",
            MemscanError::Config { .. } => "config",
            MemscanError::NoInput => "cli",
        }
    }

    /// Path involved in the failure, if any
    pub fn path(&self) -> Option<&str> {
        match self {
            MemscanError::Vfs(e) => Some(e.path()),
            MemscanError::Config { path, .. } => Some(path),
            MemscanError::NoInput => None,
        }
    }

    /// 转换为结构化错误报告
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            phase: self.phase(),
            message: self.to_string(),
            path: self.path().map(str::to_string),
        }
    }
}

/// 结构化错误报告，可直接序列化为 JSON
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    pub phase: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vfs_error_passthrough() {
        let err: MemscanError = VfsError::NotFound {
            path: "input.txt".to_string(),
        }
        .into();
        assert_eq!(err.phase(), "loader");
        assert_eq!(err.to_string(), "Path not found: input.txt");
        assert_eq!(err.path(), Some("input.txt"));
    }

    #[test]
    fn test_report_json() {
        let report = MemscanError::NoInput.to_report();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["phase"], "cli");
        assert!(json.get("path").is_none());
    }

    #[test]
    fn test_config_error_display() {
        let err = MemscanError::Config {
            path: "memscan.json".to_string(),
            message: "expected value".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid project file 'memscan.json': expected value"
        );
        assert_eq!(err.to_report().path.as_deref(), Some("memscan.json"));
    }
}
