//! 源位置追踪
//!
//! - line/column: 人类可读的显示（1-based）
//! - byte_offset: 文件跳转（0-based）

use serde::Serialize;
use std::fmt;

/// 源位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SourcePosition {
    /// 行号，1-based
    pub line: usize,
    /// 列号，1-based，Unicode码点计数
    pub column: usize,
    /// 字节偏移，0-based，UTF-8编码
    pub byte_offset: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize, byte_offset: usize) -> Self {
        Self {
            line,
            column,
            byte_offset,
        }
    }

    /// 输入起始位置
    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }

    /// 前进一个字符
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.byte_offset += c.len_utf8();
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_start() {
        let pos = SourcePosition::start();
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 1);
        assert_eq!(pos.byte_offset, 0);
        assert_eq!(pos, SourcePosition::default());
    }

    #[test]
    fn test_position_advance_ascii() {
        let mut pos = SourcePosition::start();
        pos.advance('m');
        pos.advance('u');
        assert_eq!(pos.column, 3);
        assert_eq!(pos.byte_offset, 2);
    }

    #[test]
    fn test_position_advance_newline() {
        let mut pos = SourcePosition::start();
        pos.advance('a');
        pos.advance('\n');
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 1);
        assert_eq!(pos.byte_offset, 2);
    }

    #[test]
    fn test_position_advance_multibyte() {
        let mut pos = SourcePosition::start();
        // 3字节UTF-8
        pos.advance('中');
        assert_eq!(pos.column, 2);
        assert_eq!(pos.byte_offset, 3);
    }

    #[test]
    fn test_position_display() {
        assert_eq!(SourcePosition::new(3, 14, 40).to_string(), "3:14");
    }
}
