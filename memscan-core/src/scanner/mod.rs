//! Corrupted-instruction scanner

mod machine;
mod state;
mod tokens;


pub use machine::{MulScanner, MAX_OPERAND_DIGITS};
pub use state::ScanState;
pub use tokens::{scan, Tokens};
