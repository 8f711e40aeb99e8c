//! 测试辅助工具

#![allow(dead_code)]

use memscan_core::{scan, MulScanner};
use std::path::PathBuf;

pub const CANONICAL: &str =
    "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";

/// Operand pairs from a single pass
pub fn pairs(source: &str) -> Vec<(u32, u32)> {
    scan(source).map(|op| op.operands()).collect()
}

/// Operand pairs when `source` is fed in the given chunks
pub fn chunked_pairs<'a, I>(chunks: I) -> Vec<(u32, u32)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scanner = MulScanner::new();
    let mut out = Vec::new();
    for chunk in chunks {
        out.extend(scanner.feed_str(chunk).into_iter().map(|op| op.operands()));
    }
    scanner.finish();
    out
}

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(name)
}

pub fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture(name)).unwrap()
}
