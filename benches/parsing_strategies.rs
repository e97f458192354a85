//! Benchmark suite for comparing processing strategies
//!
//! Compares synchronous and asynchronous script replay using the divan
//! benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! # Benchmark Fixtures
//!
//! - `benchmark_small.csv` - 100 commands over 10 accounts
//! - `benchmark_medium.csv` - 1,000 commands over 100 accounts
//!
//! Each fixture mixes deposits, withdrawals (some rejected), balance checks,
//! undos and a threshold change, with opening balances inserted in shuffled
//! account order so the index is not a degenerate chain.

use rust_account_ledger::cli::StrategyType;
use rust_account_ledger::core::LedgerConfig;
use rust_account_ledger::strategy::{create_strategy, BatchConfig};
use std::path::Path;

const FIXTURES: &[&str] = &["benchmark_small", "benchmark_medium"];

fn main() {
    divan::main();
}

fn replay(strategy_type: StrategyType, batch_config: Option<BatchConfig>, fixture: &str) {
    let strategy = create_strategy(strategy_type, batch_config, LedgerConfig::default());
    let path = format!("benches/fixtures/{}.csv", fixture);
    let mut output = Vec::new();

    strategy
        .process(Path::new(&path), &mut output)
        .expect("Processing failed");
}

#[divan::bench(args = FIXTURES)]
fn sync_strategy(fixture: &str) {
    replay(StrategyType::Sync, None, fixture);
}

#[divan::bench(args = FIXTURES)]
fn async_strategy(fixture: &str) {
    replay(StrategyType::Async, Some(BatchConfig::default()), fixture);
}

#[divan::bench(args = FIXTURES)]
fn async_strategy_small_batches(fixture: &str) {
    replay(StrategyType::Async, Some(BatchConfig::new(50, 2)), fixture);
}
