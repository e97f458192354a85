use crate::core::LedgerConfig;
use crate::strategy::BatchConfig;
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;

/// In-memory account ledger with undo and fraud review
#[derive(Parser, Debug)]
#[command(name = "rust-account-ledger")]
#[command(
    about = "In-memory account ledger with undo and fraud review",
    long_about = "Replays a CSV command script and prints the final accounts as CSV. \
                  Without INPUT, runs an interactive menu on stdin/stdout."
)]
pub struct CliArgs {
    /// Input CSV command script; omit for the interactive menu
    #[arg(value_name = "INPUT", help = "Path to the command script CSV file")]
    pub input_file: Option<PathBuf>,

    /// Processing strategy to use for replaying the script
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Processing strategy: 'sync' for synchronous or 'async' for batched async"
    )]
    pub strategy: StrategyType,

    /// Number of commands per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of commands per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Number of runtime worker threads (async mode only)
    #[arg(
        long = "worker-threads",
        value_name = "COUNT",
        help = "Number of async worker threads (default: CPU cores)"
    )]
    pub worker_threads: Option<usize>,

    /// Initial fraud threshold
    #[arg(
        long = "fraud-threshold",
        value_name = "AMOUNT",
        value_parser = parse_amount,
        help = "Flag transactions strictly above this amount (default: 10000.00)"
    )]
    pub fraud_threshold: Option<Decimal>,

    /// Where to write the review queue after replay
    #[arg(
        long = "review-output",
        value_name = "PATH",
        help = "Write the review queue as CSV to this file"
    )]
    pub review_output: Option<PathBuf>,
}

/// Available processing strategies for script replay
#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum StrategyType {
    #[default]
    Sync,
    Async,
}

fn parse_amount(value: &str) -> Result<Decimal, String> {
    Decimal::from_str(value.trim()).map_err(|e| format!("invalid amount '{}': {}", value, e))
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments
    ///
    /// Missing values take their defaults; zero values are replaced by
    /// `BatchConfig::new`, which logs a warning.
    pub fn to_batch_config(&self) -> BatchConfig {
        if self.batch_size.is_some() || self.worker_threads.is_some() {
            let default = BatchConfig::default();
            BatchConfig::new(
                self.batch_size.unwrap_or(default.batch_size),
                self.worker_threads.unwrap_or(default.worker_threads),
            )
        } else {
            BatchConfig::default()
        }
    }

    /// Create the LedgerConfig every run starts from
    pub fn to_ledger_config(&self) -> LedgerConfig {
        match self.fraud_threshold {
            Some(fraud_threshold) => LedgerConfig { fraud_threshold },
            None => LedgerConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case::default_strategy(&["program", "input.csv"], StrategyType::Sync)]
    #[case::explicit_sync(&["program", "--strategy", "sync", "input.csv"], StrategyType::Sync)]
    #[case::explicit_async(&["program", "--strategy", "async", "input.csv"], StrategyType::Async)]
    fn test_strategy_parsing(#[case] args: &[&str], #[case] expected: StrategyType) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.strategy, expected);
    }

    #[rstest]
    #[case::with_input(&["program", "input.csv"], Some("input.csv"))]
    #[case::interactive(&["program"], None)]
    #[case::interactive_with_threshold(&["program", "--fraud-threshold", "50"], None)]
    fn test_input_is_optional(#[case] args: &[&str], #[case] expected: Option<&str>) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.input_file, expected.map(PathBuf::from));
    }

    #[rstest]
    #[case::batch_size(&["program", "--batch-size", "2000", "input.csv"], Some(2000), None)]
    #[case::worker_threads(&["program", "--worker-threads", "8", "input.csv"], None, Some(8))]
    #[case::no_options(&["program", "input.csv"], None, None)]
    #[case::all_options(
        &["program", "--strategy", "async", "--batch-size", "2000", "--worker-threads", "8", "input.csv"],
        Some(2000),
        Some(8)
    )]
    fn test_config_options(
        #[case] args: &[&str],
        #[case] batch_size: Option<usize>,
        #[case] worker_threads: Option<usize>,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.batch_size, batch_size);
        assert_eq!(parsed.worker_threads, worker_threads);
    }

    #[rstest]
    #[case::all_defaults(&["program", "input.csv"], 1000, num_cpus::get())]
    #[case::custom_batch_size(&["program", "--batch-size", "2000", "input.csv"], 2000, num_cpus::get())]
    #[case::custom_worker_threads(&["program", "--worker-threads", "8", "input.csv"], 1000, 8)]
    #[case::zero_batch_size(&["program", "--batch-size", "0", "input.csv"], 1000, num_cpus::get())]
    #[case::zero_worker_threads(&["program", "--worker-threads", "0", "input.csv"], 1000, num_cpus::get())]
    fn test_batch_config_conversion(
        #[case] args: &[&str],
        #[case] expected_batch_size: usize,
        #[case] expected_worker_threads: usize,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        let config = parsed.to_batch_config();

        assert_eq!(config.batch_size, expected_batch_size);
        assert_eq!(config.worker_threads, expected_worker_threads);
    }

    #[rstest]
    #[case::default(&["program"], dec!(10000.00))]
    #[case::custom(&["program", "--fraud-threshold", "2500.50"], dec!(2500.50))]
    #[case::negative(&["program", "--fraud-threshold=-1"], dec!(-1))]
    fn test_ledger_config_conversion(#[case] args: &[&str], #[case] expected: Decimal) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.to_ledger_config().fraud_threshold, expected);
    }

    #[rstest]
    #[case::invalid_strategy(&["program", "--strategy", "invalid", "input.csv"])]
    #[case::invalid_threshold(&["program", "--fraud-threshold", "lots", "input.csv"])]
    #[case::invalid_batch_size(&["program", "--batch-size", "-5", "input.csv"])]
    #[case::removed_max_concurrent(&["program", "--max-concurrent", "8", "input.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }

    #[test]
    fn test_review_output_path() {
        let parsed =
            CliArgs::try_parse_from(["program", "--review-output", "review.csv", "input.csv"])
                .unwrap();
        assert_eq!(parsed.review_output, Some(PathBuf::from("review.csv")));
    }
}
