//! Sum-of-products reduction over extracted tokens

use crate::token::MulOp;

/// Sum of `x * y` over all tokens; an empty sequence sums to 0
pub fn sum_of_products<I>(ops: I) -> u64
where
    I: IntoIterator<Item = MulOp>,
{
    ops.into_iter().map(|op| op.product()).sum()
}
