//! Memscan Core - pure scanning logic, no IO
//!
//! Extracts `mul(X,Y)` instructions from a corrupted memory dump and
//! reduces them to the sum of their products.
//!
//! ```
//! use memscan_core::{scan, sum_of_products};
//!
//! let ops: Vec<_> = scan("xmul(2,4)%&mul[3,7]!mul(5,5)").collect();
//! assert_eq!(sum_of_products(ops), 33);
//! ```

pub mod aggregate;
pub mod position;
pub mod scanner;
pub mod source;
pub mod token;

pub use aggregate::sum_of_products;
pub use position::SourcePosition;
pub use scanner::{scan, MulScanner, ScanState, Tokens, MAX_OPERAND_DIGITS};
pub use source::join_lines;
pub use token::MulOp;

/// Log target for the scanner phase
pub const SCANNER_TARGET: &str = "memscan::scanner";
