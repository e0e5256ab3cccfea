//! Eager iterative generation

use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::mem;

use super::{reserve_terms, TermCount};
use crate::common::Result;

/// Compute the first `count` terms, remembering only the last two
///
/// Fails with `TooManyTerms` if the result cannot be allocated.
pub fn iterative(count: TermCount) -> Result<Vec<BigUint>> {
    let n = count.get();
    let mut terms = reserve_terms(count)?;
    let mut current = BigUint::zero();
    let mut next = BigUint::one();

    for _ in 0..n {
        let after = &current + &next;
        terms.push(mem::replace(&mut current, mem::replace(&mut next, after)));
    }

    Ok(terms)
}
