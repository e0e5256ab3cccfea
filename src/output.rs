//! Rendering sequences for display
//!
//! Everything here returns text or writes to a caller-supplied writer; the
//! CLI decides where it goes.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::str::FromStr;

use crate::common::Result;
use crate::sequence::{Strategy, TermCount};

/// How a sequence is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Bracketed list: [0, 1, 1, 2]
    #[default]
    List,
    /// One term per line
    Lines,
    /// JSON object with the terms as exact integers
    Json,
}

/// A computed sequence and how it was produced
#[derive(Debug, Clone)]
pub struct Report {
    pub count: TermCount,
    pub strategy: Strategy,
    pub terms: Vec<BigUint>,
}

impl Report {
    pub fn new(count: TermCount, strategy: Strategy, terms: Vec<BigUint>) -> Self {
        Self {
            count,
            strategy,
            terms,
        }
    }

    /// Heading used when several strategies are printed together
    pub fn label(&self) -> String {
        let name = self.strategy.as_str();
        let mut chars = name.chars();
        let capitalized: String = chars
            .next()
            .map(|c| c.to_ascii_uppercase())
            .into_iter()
            .chain(chars)
            .collect();
        format!("{} approach", capitalized)
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    terms: usize,
    strategy: &'a str,
    sequence: Vec<serde_json::Number>,
}

impl<'a> JsonReport<'a> {
    fn from_report(report: &'a Report) -> Result<Self> {
        let sequence = report
            .terms
            .iter()
            .map(|t| serde_json::Number::from_str(&t.to_string()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self {
            terms: report.count.get(),
            strategy: report.strategy.as_str(),
            sequence,
        })
    }
}

/// Render terms as `[0, 1, 1, 2]`
pub fn format_list(terms: &[BigUint]) -> String {
    let inner = terms
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", inner)
}

/// Render terms one per line, each line newline-terminated
pub fn format_lines(terms: &[BigUint]) -> String {
    terms.iter().map(|t| format!("{}\n", t)).collect()
}

/// Render a single report, newline-terminated
pub fn render(format: OutputFormat, report: &Report) -> Result<String> {
    Ok(match format {
        OutputFormat::List => format!("{}\n", format_list(&report.terms)),
        OutputFormat::Lines => format_lines(&report.terms),
        OutputFormat::Json => {
            format!("{}\n", serde_json::to_string(&JsonReport::from_report(report)?)?)
        }
    })
}

/// Render several reports of the same count side by side
///
/// `list` prints `Iterative approach: [..]` per strategy, `lines` prints a
/// `Number of terms: N` line then a `---Iterative approach---` header above
/// each block, `json` prints an array.
pub fn render_comparison(format: OutputFormat, reports: &[Report]) -> Result<String> {
    match format {
        OutputFormat::List => Ok(reports
            .iter()
            .map(|r| format!("{}: {}\n", r.label(), format_list(&r.terms)))
            .collect()),
        OutputFormat::Lines => {
            let mut text = reports
                .first()
                .map(|r| format!("Number of terms: {}\n", r.count))
                .unwrap_or_default();
            for r in reports {
                text.push_str(&format!("---{}---\n{}", r.label(), format_lines(&r.terms)));
            }
            Ok(text)
        }
        OutputFormat::Json => {
            let json = reports
                .iter()
                .map(JsonReport::from_report)
                .collect::<Result<Vec<_>>>()?;
            Ok(format!("{}\n", serde_json::to_string(&json)?))
        }
    }
}

/// Write terms one per line as they are produced
///
/// Returns the number of terms written.
pub fn write_lines<W, I>(out: &mut W, terms: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = BigUint>,
{
    let mut written = 0;
    for term in terms {
        writeln!(out, "{}", term)?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}
