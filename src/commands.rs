//! CLI argument definitions
//!
//! Defines the clap arguments for the fibonacci CLI.

use clap::Args;

use crate::common::{Error, Result};
use crate::output::OutputFormat;
use crate::sequence::{Strategy, TermCount};

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// How many Fibonacci numbers to print
    ///
    /// Kept as raw text so a missing, malformed or negative value gets
    /// our own message instead of clap's.
    #[arg(value_name = "NUMBER_OF_TERMS", allow_negative_numbers = true)]
    pub terms: Option<String>,

    /// Algorithm used to produce the terms (default from config, else iterative)
    #[arg(long, short, value_enum)]
    pub strategy: Option<Strategy>,

    /// Output format (default from config, else list)
    #[arg(long, short, value_enum)]
    pub format: Option<OutputFormat>,

    /// Run every strategy, print each result and check they agree
    #[arg(long)]
    pub compare: bool,
}

impl GenerateArgs {
    /// Validate the term count argument
    pub fn term_count(&self) -> Result<TermCount> {
        let raw = self.terms.as_deref().ok_or(Error::MissingArgument)?;
        TermCount::parse(raw)
    }
}
