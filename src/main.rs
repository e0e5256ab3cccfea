//! Fibonacci CLI - print the first N Fibonacci numbers
//!
//! Usage: `fibonacci <number_of_terms>`. Exits 1 with a message on stderr
//! when the argument is missing, not an integer, or negative.

use clap::Parser;
use fibseq::commands::GenerateArgs;
use fibseq::{cli, common::logging};

#[derive(Parser)]
#[command(name = "fibonacci", about = "Print the first N Fibonacci numbers")]
#[command(version, long_about = None)]
struct Cli {
    #[command(flatten)]
    args: GenerateArgs,
}

fn main() {
    logging::init_cli();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version print to stdout and exit 0
            if !e.use_stderr() {
                e.exit();
            }
            let _ = e.print();
            std::process::exit(1);
        }
    };

    if let Err(e) = cli::run(cli.args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
