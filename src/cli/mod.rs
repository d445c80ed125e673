//! Command-line parsing for the empirical complexity estimator.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the measurement/fitting code.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::domain::{ComplexityKind, Workload};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "bigo", version, about = "Empirical time-complexity estimator")]
pub struct Cli {
    /// Increase log verbosity (-v: per-size timings, -vv: per-model fits).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Measure a built-in workload and report its best-fitting complexity class.
    Estimate(EstimateArgs),
    /// Print (and optionally re-fit) a previously exported estimate JSON.
    Show(ShowArgs),
    /// List the available growth models in default registry order.
    Classes,
}

/// Options for measuring and fitting.
#[derive(Debug, Parser, Clone)]
pub struct EstimateArgs {
    /// Workload to measure.
    #[arg(value_enum)]
    pub workload: Workload,

    /// Smallest input size.
    #[arg(long, default_value_t = 100)]
    pub min_n: u64,

    /// Largest input size (defaults depend on the workload).
    #[arg(long)]
    pub max_n: Option<u64>,

    /// Number of sizes measured between min and max (both included).
    #[arg(long, default_value_t = 10)]
    pub n_measures: usize,

    /// Calls per timing round (cumulative time is recorded).
    #[arg(long, default_value_t = 1)]
    pub n_repeats: usize,

    /// Timing rounds per size; the minimum is kept.
    #[arg(long, default_value_t = 1)]
    pub n_timings: usize,

    /// Candidate growth models, comma separated (default: all, simplest first).
    #[arg(long, value_enum, value_delimiter = ',')]
    pub classes: Vec<ComplexityKind>,

    /// Include the raw measurements in the output.
    #[arg(long)]
    pub raw: bool,

    /// Random seed for input generation.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Render an ASCII plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Export the estimate (model, residuals, measurements) to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

/// Options for showing a saved estimate.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Estimate JSON file produced by `bigo estimate --export`.
    #[arg(value_name = "JSON")]
    pub file: PathBuf,

    /// Re-fit the stored measurements against these models, comma separated.
    #[arg(long, value_enum, value_delimiter = ',')]
    pub classes: Vec<ComplexityKind>,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn parses_estimate_flags() {
        let cli = Cli::parse_from([
            "bigo",
            "-v",
            "estimate",
            "sum",
            "--max-n",
            "5000",
            "--classes",
            "constant,linear,quadratic",
            "--no-plot",
        ]);
        assert_eq!(cli.verbose, 1);
        let Command::Estimate(args) = cli.command else {
            panic!("expected estimate subcommand");
        };
        assert_eq!(args.workload, Workload::Sum);
        assert_eq!(args.max_n, Some(5000));
        assert_eq!(args.min_n, 100);
        assert_eq!(
            args.classes,
            vec![ComplexityKind::Constant, ComplexityKind::Linear, ComplexityKind::Quadratic]
        );
        assert!(args.no_plot);
    }

    #[test]
    fn workload_names_match_cli_values() {
        for w in [
            Workload::Noop,
            Workload::Sum,
            Workload::Sort,
            Workload::BinarySearch,
            Workload::Pairs,
            Workload::Triples,
        ] {
            let parsed = Workload::from_str(w.name(), false).unwrap();
            assert_eq!(parsed, w);
        }
    }
}
