//! Lazy term production
//!
//! [`Fibonacci`] is a finite, restartable iterator over the first N terms. It
//! lets the CLI stream one term per line without holding the whole sequence.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::iter::FusedIterator;
use std::mem;

use super::TermCount;

/// The last two terms; advancing yields the older one
#[derive(Debug, Clone)]
struct Pair {
    current: BigUint,
    next: BigUint,
}

impl Pair {
    fn seed() -> Self {
        Self {
            current: BigUint::zero(),
            next: BigUint::one(),
        }
    }

    fn advance(&mut self) -> BigUint {
        let after = &self.current + &self.next;
        mem::replace(&mut self.current, mem::replace(&mut self.next, after))
    }
}

/// Iterator over exactly `count` Fibonacci terms
#[derive(Debug, Clone)]
pub struct Fibonacci {
    pair: Pair,
    count: TermCount,
    emitted: usize,
}

impl Fibonacci {
    pub fn new(count: TermCount) -> Self {
        Self {
            pair: Pair::seed(),
            count,
            emitted: 0,
        }
    }

    /// Iterator that never ends; pair it with `take`
    pub fn unbounded() -> Unbounded {
        Unbounded { pair: Pair::seed() }
    }

    /// Rewind to the first term
    pub fn restart(&mut self) {
        self.pair = Pair::seed();
        self.emitted = 0;
    }

    /// Number of terms yielded so far
    pub fn emitted(&self) -> usize {
        self.emitted
    }
}

impl Iterator for Fibonacci {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        if self.emitted >= self.count.get() {
            return None;
        }
        self.emitted += 1;
        Some(self.pair.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count.get() - self.emitted;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Fibonacci {}

impl FusedIterator for Fibonacci {}

/// Endless Fibonacci iterator, see [`Fibonacci::unbounded`]
#[derive(Debug, Clone)]
pub struct Unbounded {
    pair: Pair,
}

impl Iterator for Unbounded {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        Some(self.pair.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for Unbounded {}
