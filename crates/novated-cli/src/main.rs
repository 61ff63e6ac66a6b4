mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::compare::CompareArgs;
use commands::payment::PaymentArgs;

/// Novated lease vs. buy cost comparison
#[derive(Parser)]
#[command(
    name = "nlc",
    version,
    about = "Compare the cost of a novated lease, cash purchase and car loan",
    long_about = "Projects the monthly and total cost of acquiring a vehicle via a \
                  salary-sacrificed novated lease, an outright cash purchase, or a \
                  standard amortizing loan, with decimal precision, and ranks the \
                  cheapest option over the comparison term."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare lease, outright and loan over the same term
    Compare(CompareArgs),
    /// Project the novated lease scenario only
    Lease(CompareArgs),
    /// Project the outright purchase scenario only
    Outright(CompareArgs),
    /// Project the loan scenario only
    Loan(CompareArgs),
    /// Raw amortized payment lookup
    Payment(PaymentArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Compare(args) => commands::compare::run_compare(args),
        Commands::Lease(args) => commands::compare::run_lease(args),
        Commands::Outright(args) => commands::compare::run_outright(args),
        Commands::Loan(args) => commands::compare::run_loan(args),
        Commands::Payment(args) => commands::payment::run_payment(args),
        Commands::Version => {
            println!("nlc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
