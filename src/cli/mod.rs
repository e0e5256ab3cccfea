//! CLI command handling
//!
//! Validates arguments, resolves defaults from the config file, runs the
//! generator and writes the formatted result.

use std::io::{self, Write};

use crate::commands::GenerateArgs;
use crate::common::config::Config;
use crate::common::Result;
use crate::output::{self, OutputFormat, Report};
use crate::sequence::{Fibonacci, Generator, Strategy, TermCount};

/// Run the CLI against stdout
pub fn run(args: GenerateArgs) -> Result<()> {
    // Argument errors take precedence over config problems
    let count = args.term_count()?;
    let config = Config::load()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(count, &args, &config, &mut out)
}

/// Generate and print `count` terms according to `args` and `config`
pub fn execute<W: Write>(
    count: TermCount,
    args: &GenerateArgs,
    config: &Config,
    out: &mut W,
) -> Result<()> {
    let strategy = args.strategy.unwrap_or(config.defaults.strategy);
    let format = args.format.unwrap_or(config.defaults.format);
    let generator =
        Generator::new(strategy).with_recursion_depth(config.limits.recursion_depth);

    tracing::debug!(%count, %strategy, ?format, compare = args.compare, "Dispatching");

    if args.compare {
        let reports: Vec<Report> = generator
            .compare(count)?
            .into_iter()
            .map(|(strategy, terms)| Report::new(count, strategy, terms))
            .collect();
        out.write_all(output::render_comparison(format, &reports)?.as_bytes())?;
    } else if strategy == Strategy::Lazy && format == OutputFormat::Lines {
        let written = output::write_lines(out, Fibonacci::new(count))?;
        tracing::trace!(written, "Streamed terms");
    } else {
        let terms = generator.generate(count)?;
        let report = Report::new(count, generator.strategy(), terms);
        out.write_all(output::render(format, &report)?.as_bytes())?;
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn run_to_string(n: usize, args: GenerateArgs, config: &Config) -> Result<String> {
        let mut out = Vec::new();
        execute(TermCount::new(n), &args, config, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_default_prints_list() {
        let text = run_to_string(10, GenerateArgs::default(), &Config::default()).unwrap();
        assert_eq!(text, "[0, 1, 1, 2, 3, 5, 8, 13, 21, 34]\n");
    }

    #[test]
    fn test_zero_terms() {
        let text = run_to_string(0, GenerateArgs::default(), &Config::default()).unwrap();
        assert_eq!(text, "[]\n");
    }

    #[test]
    fn test_lazy_lines_streams() {
        let args = GenerateArgs {
            strategy: Some(Strategy::Lazy),
            format: Some(OutputFormat::Lines),
            ..Default::default()
        };
        let text = run_to_string(5, args, &Config::default()).unwrap();
        assert_eq!(text, "0\n1\n1\n2\n3\n");
    }

    #[test]
    fn test_config_defaults_apply() {
        let mut config = Config::default();
        config.defaults.format = OutputFormat::Lines;
        config.defaults.strategy = Strategy::Recursive;
        let text = run_to_string(3, GenerateArgs::default(), &config).unwrap();
        assert_eq!(text, "0\n1\n1\n");
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = Config::default();
        config.defaults.format = OutputFormat::Json;
        let args = GenerateArgs {
            format: Some(OutputFormat::List),
            ..Default::default()
        };
        let text = run_to_string(3, args, &config).unwrap();
        assert_eq!(text, "[0, 1, 1]\n");
    }

    #[test]
    fn test_recursion_limit_from_config() {
        let mut config = Config::default();
        config.limits.recursion_depth = 4;
        let args = GenerateArgs {
            strategy: Some(Strategy::Recursive),
            ..Default::default()
        };
        let err = run_to_string(5, args, &config).unwrap_err();
        assert!(matches!(err, Error::RecursionLimit { requested: 5, limit: 4 }));
    }

    #[test]
    fn test_compare() {
        let args = GenerateArgs {
            compare: true,
            ..Default::default()
        };
        let text = run_to_string(4, args, &Config::default()).unwrap();
        assert_eq!(
            text,
            "Iterative approach: [0, 1, 1, 2]\n\
             Recursive approach: [0, 1, 1, 2]\n\
             Lazy approach: [0, 1, 1, 2]\n"
        );
    }
}
