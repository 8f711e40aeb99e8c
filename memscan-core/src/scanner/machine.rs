//! `mul(X,Y)` 扫描状态机
//!
//! 单遍、逐字符消费的自动机：每个字符恰好推进一次转移，失配时该字符被
//! 消费并回到 `Idle`，不回溯。唯一的例外是刚接受一个 token 之后遇到 `m`，
//! 直接进入 `MatchedM`，使 `mul(1,2)mul(3,4)` 两个都能被识别。

use super::state::ScanState;
use crate::position::SourcePosition;
use crate::token::MulOp;
use crate::SCANNER_TARGET;

use tracing::{debug, trace};

/// Operands longer than this abandon the candidate
pub const MAX_OPERAND_DIGITS: u8 = 3;

/// Resumable `mul(X,Y)` automaton
///
/// State and scratch persist across [`feed`](Self::feed) calls, so input may
/// arrive in arbitrary chunks.
#[derive(Debug, Clone, Default)]
pub struct MulScanner {
    state: ScanState,
    x: u32,
    y: u32,
    /// Digits read for the operand being accumulated
    digits: u8,
    /// Position of the next character
    position: SourcePosition,
    /// Position of the candidate's `m`
    candidate_start: SourcePosition,
}

impl MulScanner {
    pub fn new() -> Self {
        trace!(target: SCANNER_TARGET, "Creating new MulScanner");
        Self::default()
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Position of the next character to be fed
    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// Consume one character
    ///
    /// Returns the token completed by this character, if any.
    pub fn feed(&mut self, c: char) -> Option<MulOp> {
        let at = self.position;
        self.position.advance(c);

        let from = self.state;
        let emitted = self.step(c, at);
        trace!(
            target: SCANNER_TARGET,
            ?c,
            from = from.name(),
            to = self.state.name(),
            "Transition"
        );
        emitted
    }

    /// Consume a chunk, keeping state for the next one
    pub fn feed_str(&mut self, chunk: &str) -> Vec<MulOp> {
        chunk.chars().filter_map(|c| self.feed(c)).collect()
    }

    /// End of input
    ///
    /// An incomplete candidate is dropped silently. The scanner is back at
    /// the start of a fresh input afterwards.
    pub fn finish(&mut self) {
        if self.state.has_candidate() {
            debug!(
                target: SCANNER_TARGET,
                state = self.state.name(),
                at = %self.candidate_start,
                "Discarding incomplete candidate at end of input"
            );
        }
        *self = Self::default();
    }

    fn step(&mut self, c: char, at: SourcePosition) -> Option<MulOp> {
        match self.state {
            ScanState::Idle | ScanState::MatchedCloseParen => {
                self.state = if c == 'm' {
                    self.candidate_start = at;
                    ScanState::MatchedM
                } else {
                    ScanState::Idle
                };
            }
            ScanState::MatchedM => self.expect(c, 'u', ScanState::MatchedMu),
            ScanState::MatchedMu => self.expect(c, 'l', ScanState::MatchedMul),
            ScanState::MatchedMul => self.expect(c, '(', ScanState::MatchedOpenParen),
            ScanState::MatchedOpenParen => match c.to_digit(10) {
                Some(d) => {
                    self.x = d;
                    self.y = 0;
                    self.digits = 1;
                    self.state = ScanState::AccumulatingX;
                }
                None => self.abandon(c),
            },
            ScanState::AccumulatingX => {
                if c == ',' {
                    self.state = ScanState::MatchedComma;
                } else if let Some(d) = c.to_digit(10) {
                    if let Some(x) = self.push_digit(self.x, d) {
                        self.x = x;
                    }
                } else {
                    self.abandon(c);
                }
            }
            ScanState::MatchedComma => match c.to_digit(10) {
                Some(d) => {
                    self.y = d;
                    self.digits = 1;
                    self.state = ScanState::AccumulatingY;
                }
                None => self.abandon(c),
            },
            ScanState::AccumulatingY => {
                if c == ')' {
                    return Some(self.accept());
                } else if let Some(d) = c.to_digit(10) {
                    if let Some(y) = self.push_digit(self.y, d) {
                        self.y = y;
                    }
                } else {
                    self.abandon(c);
                }
            }
        }
        None
    }

    fn expect(&mut self, c: char, literal: char, next: ScanState) {
        if c == literal {
            self.state = next;
        } else {
            self.abandon(c);
        }
    }

    /// Append a digit to `value`, or abandon the candidate on a 4th digit
    fn push_digit(&mut self, value: u32, d: u32) -> Option<u32> {
        if self.digits >= MAX_OPERAND_DIGITS {
            debug!(
                target: SCANNER_TARGET,
                at = %self.candidate_start,
                "Operand exceeds {} digits, abandoning candidate",
                MAX_OPERAND_DIGITS
            );
            self.reset_candidate();
            return None;
        }
        self.digits += 1;
        Some(value * 10 + d)
    }

    fn accept(&mut self) -> MulOp {
        let op = MulOp::new(self.x, self.y, self.candidate_start);
        debug!(
            target: SCANNER_TARGET,
            x = op.x,
            y = op.y,
            at = %op.start,
            "Accepted token"
        );
        self.reset_scratch();
        self.state = ScanState::MatchedCloseParen;
        op
    }

    fn abandon(&mut self, c: char) {
        if self.state.has_operand() {
            debug!(
                target: SCANNER_TARGET,
                ?c,
                state = self.state.name(),
                at = %self.candidate_start,
                "Abandoning candidate"
            );
        }
        self.reset_candidate();
    }

    fn reset_candidate(&mut self) {
        self.reset_scratch();
        self.state = ScanState::Idle;
    }

    fn reset_scratch(&mut self) {
        self.x = 0;
        self.y = 0;
        self.digits = 0;
    }
}
