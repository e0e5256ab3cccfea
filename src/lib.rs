//! Fibonacci sequence generator
//!
//! Computes the first N Fibonacci numbers with arbitrary-precision terms,
//! using an iterative, recursive or lazy strategy, and renders them for the
//! `fibonacci` command-line tool.

pub mod cli;
pub mod commands;
pub mod common;
pub mod output;
pub mod sequence;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use sequence::{generate, generate_terms, Fibonacci, Generator, Strategy, TermCount};
