use std::fmt;

/// 扫描状态
///
/// 记录 `mul(X,Y)` 已匹配到哪一步
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScanState {
    #[default]
    Idle,
    /// `m`
    MatchedM,
    /// `mu`
    MatchedMu,
    /// `mul`
    MatchedMul,
    /// `mul(`
    MatchedOpenParen,
    /// `mul(` + 1..=3 digits
    AccumulatingX,
    /// `mul(X,`
    MatchedComma,
    /// `mul(X,` + 1..=3 digits
    AccumulatingY,
    /// `mul(X,Y)` was just accepted
    MatchedCloseParen,
}

impl ScanState {
    /// Whether a candidate is in flight
    ///
    /// `MatchedCloseParen` behaves like `Idle` except that it lets an
    /// immediately following `m` start the next candidate.
    pub fn has_candidate(self) -> bool {
        !matches!(self, ScanState::Idle | ScanState::MatchedCloseParen)
    }

    /// Whether operand digits have been read for the candidate
    pub fn has_operand(self) -> bool {
        matches!(
            self,
            ScanState::AccumulatingX | ScanState::MatchedComma | ScanState::AccumulatingY
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            ScanState::Idle => "Idle",
            ScanState::MatchedM => "MatchedM",
            ScanState::MatchedMu => "MatchedMu",
            ScanState::MatchedMul => "MatchedMul",
            ScanState::MatchedOpenParen => "MatchedOpenParen",
            ScanState::AccumulatingX => "AccumulatingX",
            ScanState::MatchedComma => "MatchedComma",
            ScanState::AccumulatingY => "AccumulatingY",
            ScanState::MatchedCloseParen => "MatchedCloseParen",
        }
    }
}

impl fmt::Display for ScanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
