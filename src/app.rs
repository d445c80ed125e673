//! Top-level application orchestration.
//!
//! `src/main.rs` stays tiny; this module is the "real main" that:
//! - parses CLI arguments and sets up logging
//! - runs the measure/fit pipeline
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::cli::{Cli, Command, EstimateArgs, ShowArgs};
use crate::domain::{ComplexityKind, EstimateConfig, SamplingPlan};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `bigo` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Estimate(args) => handle_estimate(&args, cli.verbose),
        Command::Show(args) => handle_show(&args),
        Command::Classes => {
            print!("{}", format_classes());
            Ok(())
        }
    }
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing(verbose: u8) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(verbose, rust_log.as_deref());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// `RUST_LOG` wins when set; otherwise `-v` picks the level.
fn log_filter(verbose: u8, rust_log: Option<&str>) -> EnvFilter {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(rust_log.unwrap_or_default())
}

fn handle_estimate(args: &EstimateArgs, verbose: u8) -> Result<(), AppError> {
    let config = estimate_config_from_args(args, verbose);
    let est = pipeline::run_estimate(&config)?;

    println!(
        "{}",
        crate::report::format_header(config.workload.name(), &config.plan)
    );
    if config.include_raw {
        println!("{}", crate::report::format_measurements(&est.observations));
    }
    println!(
        "{}",
        crate::report::format_fits(&est.best, &est.fitted, &est.skipped)
    );

    if config.plot {
        let plot = crate::plot::render_ascii_plot(
            &est.observations,
            Some(&est.best),
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }

    if let Some(path) = &config.export {
        crate::io::write_estimate_json(path, &est, config.workload.name(), &config.plan)?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

fn handle_show(args: &ShowArgs) -> Result<(), AppError> {
    let file = crate::io::read_estimate_json(&args.file)?;

    println!("{}", crate::report::format_header(&file.target, &file.plan));
    println!("{}", crate::report::format_measurements(&file.observations));

    let best = if args.classes.is_empty() {
        println!(
            "{}",
            crate::report::format_fits(&file.best, &file.fitted, &file.skipped)
        );
        file.best
    } else {
        let refit = crate::estimate::infer(file.observations.clone(), &args.classes, false)?;
        println!(
            "{}",
            crate::report::format_fits(&refit.best, &refit.fitted, &refit.skipped)
        );
        refit.best
    };

    if !args.no_plot {
        let plot =
            crate::plot::render_ascii_plot(&file.observations, Some(&best), args.width, args.height);
        println!("{plot}");
    }
    Ok(())
}

/// One line per growth model, in default registry order.
pub fn format_classes() -> String {
    let mut out = String::new();
    for kind in ComplexityKind::ALL {
        out.push_str(&format!(
            "{:<13} {:<11} params={}\n",
            kind.display_name(),
            kind.notation(),
            kind.param_count()
        ));
    }
    out
}

pub fn estimate_config_from_args(args: &EstimateArgs, verbose: u8) -> EstimateConfig {
    let candidates = if args.classes.is_empty() {
        ComplexityKind::ALL.to_vec()
    } else {
        args.classes.clone()
    };

    EstimateConfig {
        workload: args.workload,
        plan: SamplingPlan {
            min_size: args.min_n,
            max_size: args.max_n.unwrap_or_else(|| args.workload.default_max_size()),
            num_points: args.n_measures,
            repeats: args.n_repeats,
            timing_rounds: args.n_timings,
        },
        candidates,
        include_raw: args.raw,
        seed: args.seed,
        verbose: verbose > 0,
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export: args.export.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Workload;

    fn parse(argv: &[&str]) -> EstimateArgs {
        let cli = Cli::parse_from(argv);
        match cli.command {
            Command::Estimate(args) => args,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn config_defaults_to_all_classes_and_workload_max() {
        let args = parse(&["bigo", "estimate", "pairs"]);
        let config = estimate_config_from_args(&args, 0);
        assert_eq!(config.workload, Workload::Pairs);
        assert_eq!(config.plan.min_size, 100);
        assert_eq!(config.plan.max_size, 2_000);
        assert_eq!(config.plan.num_points, 10);
        assert_eq!(config.plan.repeats, SamplingPlan::default().repeats);
        assert_eq!(config.plan.timing_rounds, SamplingPlan::default().timing_rounds);
        assert_eq!(config.candidates, ComplexityKind::ALL.to_vec());
        assert!(config.plot);
        assert!(!config.verbose);
    }

    #[test]
    fn config_honours_explicit_flags() {
        let args = parse(&[
            "bigo",
            "estimate",
            "sum",
            "--max-n",
            "500",
            "--n-measures",
            "5",
            "--classes",
            "linear,constant",
            "--raw",
            "--no-plot",
        ]);
        let config = estimate_config_from_args(&args, 2);
        assert_eq!(config.plan.max_size, 500);
        assert_eq!(config.plan.num_points, 5);
        assert_eq!(
            config.candidates,
            vec![ComplexityKind::Linear, ComplexityKind::Constant]
        );
        assert!(config.include_raw);
        assert!(!config.plot);
        assert!(config.verbose);
    }

    #[test]
    fn rust_log_overrides_verbosity() {
        let from_env = log_filter(0, Some("debug")).to_string().to_lowercase();
        assert!(from_env.contains("debug"), "{from_env}");
        assert!(!from_env.contains("warn"), "{from_env}");

        let quiet = log_filter(0, None).to_string().to_lowercase();
        assert!(quiet.contains("warn"), "{quiet}");
        let chatty = log_filter(2, Some("")).to_string().to_lowercase();
        assert!(chatty.contains("debug"), "{chatty}");
    }

    #[test]
    fn classes_listing_is_ordered_simplest_first() {
        let txt = format_classes();
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("Constant"));
        assert!(lines[7].starts_with("Exponential"));
    }
}
