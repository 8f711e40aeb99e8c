//! Extracted instruction token

use crate::position::SourcePosition;
use serde::Serialize;
use std::fmt;

/// A recognized `mul(X,Y)` instruction
///
/// Operands are at most three decimal digits, so both lie in `0..=999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MulOp {
    pub x: u32,
    pub y: u32,
    /// Position of the leading `m`
    pub start: SourcePosition,
}

impl MulOp {
    pub fn new(x: u32, y: u32, start: SourcePosition) -> Self {
        Self { x, y, start }
    }

    pub fn operands(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    pub fn product(&self) -> u64 {
        u64::from(self.x) * u64::from(self.y)
    }
}

impl fmt::Display for MulOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mul({},{})", self.x, self.y)
    }
}
