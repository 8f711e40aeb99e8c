//! CLI 格式化输出

use memscan_api::{MemscanError, RunReport, ScanOutput};
use std::path::Path;

pub fn print_reading(path: &Path) {
    println!("reading path: {}", path.display());
}

/// Print one file's sum, and its tokens when requested
pub fn print_file_result(output: &ScanOutput, show_tokens: bool) {
    if show_tokens {
        let width = output.ops.len().to_string().len();
        for (i, op) in output.ops.iter().enumerate() {
            println!(
                "{:>width$} | {:<12} at {} = {}",
                i + 1,
                op.to_string(),
                op.start,
                op.product(),
                width = width
            );
        }
    }
    println!("Sum from ops: {}", output.sum);
}

pub fn print_total(report: &RunReport) {
    println!("Total: {}", report.total);
}

pub fn print_json_report(report: &RunReport) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// 打印错误；JSON 模式下输出结构化报告
pub fn print_error(e: &MemscanError, json: bool) {
    if json {
        match serde_json::to_string_pretty(&e.to_report()) {
            Ok(report) => eprintln!("{report}"),
            Err(_) => eprintln!("Error: {e}"),
        }
    } else {
        eprintln!("Error: {e}");
    }
}
