//! Fibonacci sequence generation
//!
//! All strategies produce the same sequence: `0, 1, 1, 2, 3, 5, ...`, with
//! arbitrary-precision terms. None of them do any I/O.

mod iterative;
mod lazy;
mod recursive;
mod term_count;

pub use iterative::iterative;
pub use lazy::{Fibonacci, Unbounded};
pub use recursive::recursive;
pub use term_count::TermCount;

use num_bigint::BigUint;
use serde::Deserialize;
use std::fmt;

use crate::common::{Error, Result};

/// Default maximum term count for the recursive strategy
pub const DEFAULT_RECURSION_DEPTH: usize = 1_000;

/// Hard ceiling on recursion depth; configured limits above it are rejected
pub const MAX_RECURSION_DEPTH: usize = 10_000;

/// How the sequence is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Loop keeping the last two terms
    #[default]
    Iterative,
    /// Extend the sequence for n-1 by one term
    Recursive,
    /// Pull terms from a lazy iterator
    Lazy,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Iterative, Strategy::Recursive, Strategy::Lazy];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Iterative => "iterative",
            Strategy::Recursive => "recursive",
            Strategy::Lazy => "lazy",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compute the first `n` Fibonacci numbers
///
/// Negative `n` fails with `NegativeValue`.
pub fn generate(n: i64) -> Result<Vec<BigUint>> {
    let count = TermCount::try_from(n)?;
    iterative(count)
}

/// Allocate room for `count` terms, failing instead of aborting when it can't
pub(crate) fn reserve_terms(count: TermCount) -> Result<Vec<BigUint>> {
    let mut terms = Vec::new();
    terms
        .try_reserve_exact(count.get())
        .map_err(|_| Error::TooManyTerms {
            requested: count.get(),
        })?;
    Ok(terms)
}

/// Compute the first `count` terms with the given strategy and default limits
pub fn generate_terms(count: TermCount, strategy: Strategy) -> Result<Vec<BigUint>> {
    Generator::new(strategy).generate(count)
}

/// A strategy together with its limits
#[derive(Debug, Clone, Copy)]
pub struct Generator {
    strategy: Strategy,
    recursion_depth: usize,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}

impl Generator {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            recursion_depth: DEFAULT_RECURSION_DEPTH,
        }
    }

    /// Cap the term count accepted by the recursive strategy
    ///
    /// Values above [`MAX_RECURSION_DEPTH`] are clamped to it.
    pub fn with_recursion_depth(mut self, limit: usize) -> Self {
        self.recursion_depth = limit.min(MAX_RECURSION_DEPTH);
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn recursion_depth(&self) -> usize {
        self.recursion_depth
    }

    /// Compute the first `count` terms
    pub fn generate(&self, count: TermCount) -> Result<Vec<BigUint>> {
        self.generate_with(self.strategy, count)
    }

    /// Run every strategy and check that they agree
    ///
    /// Returns the sequences in [`Strategy::ALL`] order.
    pub fn compare(&self, count: TermCount) -> Result<Vec<(Strategy, Vec<BigUint>)>> {
        let results = Strategy::ALL
            .iter()
            .map(|&strategy| {
                self.generate_with(strategy, count)
                    .map(|terms| (strategy, terms))
            })
            .collect::<Result<Vec<_>>>()?;

        let (baseline, expected) = &results[0];
        for (strategy, terms) in &results[1..] {
            if let Some(index) = first_difference(expected, terms) {
                return Err(Error::strategy_mismatch(
                    baseline.as_str(),
                    strategy.as_str(),
                    index,
                ));
            }
        }

        Ok(results)
    }

    fn generate_with(&self, strategy: Strategy, count: TermCount) -> Result<Vec<BigUint>> {
        tracing::debug!(%strategy, %count, "Generating sequence");
        let terms = match strategy {
            Strategy::Iterative => iterative(count)?,
            Strategy::Recursive => recursive(count, self.recursion_depth)?,
            Strategy::Lazy => {
                let mut terms = reserve_terms(count)?;
                terms.extend(Fibonacci::new(count));
                terms
            }
        };
        tracing::trace!(%strategy, len = terms.len(), "Sequence ready");
        Ok(terms)
    }
}

/// Index of the first term where two sequences differ, if any
fn first_difference(a: &[BigUint], b: &[BigUint]) -> Option<usize> {
    a.iter()
        .zip(b)
        .position(|(x, y)| x != y)
        .or_else(|| (a.len() != b.len()).then(|| a.len().min(b.len())))
}
