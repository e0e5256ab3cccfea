//! Recursive generation
//!
//! The sequence for n is the sequence for n-1 plus one more term, so the work
//! is linear. Recursion depth is n, which is what the depth limit bounds.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::{TermCount, MAX_RECURSION_DEPTH};
use crate::common::{Error, Result};

/// Compute the first `count` terms recursively
///
/// Fails with `RecursionLimit` if `count` exceeds `depth_limit`, before any
/// recursion happens. `depth_limit` is clamped to [`MAX_RECURSION_DEPTH`].
pub fn recursive(count: TermCount, depth_limit: usize) -> Result<Vec<BigUint>> {
    let n = count.get();
    let limit = depth_limit.min(MAX_RECURSION_DEPTH);
    if n > limit {
        return Err(Error::RecursionLimit {
            requested: n,
            limit,
        });
    }
    Ok(build(n))
}

fn build(n: usize) -> Vec<BigUint> {
    match n {
        0 => Vec::new(),
        1 => vec![BigUint::zero()],
        2 => vec![BigUint::zero(), BigUint::one()],
        _ => {
            let mut terms = build(n - 1);
            let next = &terms[n - 2] + &terms[n - 3];
            terms.push(next);
            terms
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{iterative, DEFAULT_RECURSION_DEPTH};

    #[test]
    fn test_base_cases() {
        assert!(recursive(TermCount::new(0), 10).unwrap().is_empty());
        assert_eq!(recursive(TermCount::new(1), 10).unwrap(), vec![BigUint::zero()]);
        assert_eq!(
            recursive(TermCount::new(2), 10).unwrap(),
            vec![BigUint::zero(), BigUint::one()]
        );
    }

    #[test]
    fn test_matches_iterative_up_to_limit() {
        let count = TermCount::new(DEFAULT_RECURSION_DEPTH);
        assert_eq!(
            recursive(count, DEFAULT_RECURSION_DEPTH).unwrap(),
            iterative(count).unwrap()
        );
    }

    #[test]
    fn test_limit_is_inclusive() {
        assert_eq!(recursive(TermCount::new(5), 5).unwrap().len(), 5);
        match recursive(TermCount::new(6), 5) {
            Err(Error::RecursionLimit { requested, limit }) => {
                assert_eq!(requested, 6);
                assert_eq!(limit, 5);
            }
            other => panic!("Expected RecursionLimit, got {:?}", other),
        }
    }

    #[test]
    fn test_limit_is_clamped_to_hard_maximum() {
        match recursive(TermCount::new(MAX_RECURSION_DEPTH + 1), usize::MAX) {
            Err(Error::RecursionLimit { requested, limit }) => {
                assert_eq!(requested, MAX_RECURSION_DEPTH + 1);
                assert_eq!(limit, MAX_RECURSION_DEPTH);
            }
            other => panic!("Expected RecursionLimit, got {:?}", other.map(|t| t.len())),
        }
    }
}
