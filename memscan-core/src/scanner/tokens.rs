use super::machine::MulScanner;
use crate::token::MulOp;

use std::iter::FusedIterator;
use std::str::Chars;

/// Lazy token stream over a character source
///
/// Pulls characters only until the next token completes.
#[derive(Debug, Clone)]
pub struct Tokens<I> {
    chars: I,
    scanner: MulScanner,
    finished: bool,
}

impl<I> Tokens<I>
where
    I: Iterator<Item = char>,
{
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            chars: source.into_iter(),
            scanner: MulScanner::new(),
            finished: false,
        }
    }
}

impl<I> Iterator for Tokens<I>
where
    I: Iterator<Item = char>,
{
    type Item = MulOp;

    fn next(&mut self) -> Option<MulOp> {
        if self.finished {
            return None;
        }
        for c in self.chars.by_ref() {
            if let Some(op) = self.scanner.feed(c) {
                return Some(op);
            }
        }
        self.scanner.finish();
        self.finished = true;
        None
    }
}

impl<I> FusedIterator for Tokens<I> where I: Iterator<Item = char> {}

/// Scan `source` lazily for `mul(X,Y)` tokens
pub fn scan(source: &str) -> Tokens<Chars<'_>> {
    Tokens::new(source.chars())
}
