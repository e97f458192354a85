//! Rust Account Ledger CLI
//!
//! Command-line interface for replaying ledger command scripts, or running the
//! interactive menu when no script is given.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- commands.csv > accounts.csv
//! cargo run -- --strategy async --batch-size 2000 commands.csv > accounts.csv
//! cargo run -- --fraud-threshold 5000 --review-output review.csv commands.csv
//! cargo run
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (invalid arguments, file not found, output not writable, etc.)

use rust_account_ledger::cli::{self, CliArgs, StrategyType};
use rust_account_ledger::core::Ledger;
use rust_account_ledger::io::{write_accounts_csv, write_review_queue_csv, Shell};
use rust_account_ledger::strategy;
use std::fs::File;
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = cli::parse_args();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<(), String> {
    let ledger_config = args.to_ledger_config();

    let Some(input_file) = args.input_file.as_deref() else {
        let stdin = io::stdin();
        let mut shell = Shell::new(stdin.lock(), io::stdout(), Ledger::with_config(ledger_config));
        return shell.run().map_err(|e| e.to_string());
    };

    let batch_config = matches!(args.strategy, StrategyType::Async).then(|| args.to_batch_config());
    let strategy = strategy::create_strategy(args.strategy, batch_config, ledger_config);

    let ledger = strategy.run(input_file)?;
    tracing::info!(
        accounts = ledger.accounts().len(),
        flagged = ledger.review_queue().len(),
        "Replay finished"
    );

    let mut output = io::stdout().lock();
    write_accounts_csv(ledger.list_accounts(), &mut output)?;

    if let Some(path) = &args.review_output {
        let mut file = File::create(path)
            .map_err(|e| format!("Failed to create file '{}': {}", path.display(), e))?;
        write_review_queue_csv(ledger.list_review_queue(), &mut file)?;
    }

    Ok(())
}
