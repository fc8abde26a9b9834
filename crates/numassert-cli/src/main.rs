//! numassert CLI - evaluate big-integer aware assertions from the command line.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod operand;
mod output;

use commands::{check, normalize};

#[derive(Parser)]
#[command(name = "numassert")]
#[command(about = "Big-integer aware assertion checks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical decimal form of an operand
    Normalize {
        /// Operand (`big:<int>`, `u256:<int>`, `i256:<int>`, a number, or a string)
        #[arg(allow_hyphen_values = true)]
        operand: String,
        /// Accept 0x-prefixed hex strings
        #[arg(long)]
        hex: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate one assertion; flags go before the operands
    Check {
        /// Assertion method (equal, gt, within, closeTo, ...)
        method: String,
        /// Value under test
        #[arg(allow_hyphen_values = true)]
        subject: String,
        /// Method arguments
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
        /// Negate the assertion
        #[arg(long)]
        not: bool,
        /// Compare the subject's length
        #[arg(long)]
        length: bool,
        /// Accept 0x-prefixed hex strings
        #[arg(long)]
        hex: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Normalize { operand, hex, json } => normalize::run(operand, hex, json),
        Commands::Check {
            method,
            subject,
            args,
            not,
            length,
            hex,
            json,
        } => check::run(check::CheckArgs {
            method,
            subject,
            args,
            not,
            length,
            hex,
            json,
        }),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
