//! API 类型定义
//!
//! 扫描的输出类型。

use memscan_core::{sum_of_products, MulOp};
use serde::Serialize;
use std::path::PathBuf;

/// Result of scanning one input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanOutput {
    /// Tokens in order of appearance
    pub ops: Vec<MulOp>,
    /// Sum of `x * y` over `ops`
    pub sum: u64,
}

impl ScanOutput {
    pub fn from_ops(ops: Vec<MulOp>) -> Self {
        let sum = sum_of_products(ops.iter().copied());
        Self { ops, sum }
    }
}

/// One scanned file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub output: ScanOutput,
}

/// All files of a run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub files: Vec<FileReport>,
    pub total: u64,
}

impl RunReport {
    pub fn new(files: Vec<FileReport>) -> Self {
        let total = files.iter().map(|f| f.output.sum).sum();
        Self { files, total }
    }
}
