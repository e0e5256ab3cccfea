//! Error types for the Fibonacci generator
//!
//! Messages are printed verbatim to the user by `main`, so they should say
//! what went wrong and how to call the program correctly.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Fibonacci generator
#[derive(Error, Debug)]
pub enum Error {
    // === Input Errors ===
    #[error("Usage: fibonacci <number_of_terms>")]
    MissingArgument,

    #[error("Invalid input '{0}'. Please enter an integer.")]
    InvalidFormat(String),

    #[error("Number of terms must be non-negative, got {0}")]
    NegativeValue(String),

    // === Generation Errors ===
    #[error("Cannot hold {requested} terms in memory. Use --strategy lazy --format lines to stream them")]
    TooManyTerms { requested: usize },

    #[error("Recursive strategy supports at most {limit} terms, got {requested}. Use --strategy iterative for larger inputs")]
    RecursionLimit { requested: usize, limit: usize },

    #[error("Strategies disagree: {left} and {right} differ at term {index}")]
    StrategyMismatch {
        left: String,
        right: String,
        index: usize,
    },

    // === Configuration Errors ===
    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid format error from the raw argument
    pub fn invalid_format(raw: &str) -> Self {
        Self::InvalidFormat(raw.to_string())
    }

    /// Create a negative value error from the raw argument
    pub fn negative_value(raw: &str) -> Self {
        Self::NegativeValue(raw.trim().to_string())
    }

    /// Create a strategy mismatch error
    pub fn strategy_mismatch(left: &str, right: &str, index: usize) -> Self {
        Self::StrategyMismatch {
            left: left.to_string(),
            right: right.to_string(),
            index,
        }
    }
}
