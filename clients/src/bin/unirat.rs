//! `unirat` — Verifies the numerical claims of "Unirationality of
//! hypersurfaces via highly tangent lines" and evaluates single quantities.
//!
//! **Usage:**
//! ```text
//! unirat verify [--config <file>] [--section <name>]... [--keep-going] [--format text|json]
//! unirat eval m <i> <j>
//! unirat eval n-min <d>
//! ```
//!
//! `verify` exits non-zero if any claim fails. Log output goes to stderr and
//! is filtered by `RUST_LOG` on top of `--log-level`.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use unirat_conformance::{run_all, Section, Severity, VerificationReport, VerifyConfig};
use unirat_foundation::{dimensions, CoefficientTable, MultiplicitySequence, RameroFunctions};

/// Verify and evaluate the bounds on n_min for hypersurfaces.
#[derive(Parser)]
#[command(
    name = "unirat",
    about = "Verify the numerical claims on unirationality of hypersurfaces"
)]
struct Cli {
    /// Minimum level of log events written to stderr.
    #[arg(long, global = true, default_value = "warn")]
    log_level: Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the claim catalogue.
    Verify {
        /// TOML configuration file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Section to run; repeat for several. Overrides the configuration.
        #[arg(long = "section", value_name = "NAME")]
        sections: Vec<Section>,

        /// Record every failed claim instead of stopping at the first.
        #[arg(long)]
        keep_going: bool,

        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Print a single value.
    Eval {
        #[command(subcommand)]
        quantity: Quantity,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Quantity {
    /// The coefficient m(i,j).
    M { i: usize, j: usize },
    /// The exact quotient b(i,j).
    B { i: usize, j: usize },
    /// The approximate constant c(i,j), for i >= 7 and j >= 1.
    C { i: usize, j: usize },
    /// The closed form n(d).
    N { d: usize },
    /// n_min of a general degree-d hypersurface.
    NMin { d: usize },
    /// r of a general degree-d hypersurface.
    R { d: usize },
    /// Ramero's bound m(d).
    RameroM { d: u64 },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(cli.log_level.into()))
        .init();

    match cli.command {
        Command::Verify {
            config,
            sections,
            keep_going,
            format,
        } => {
            let mut settings = match &config {
                Some(path) => VerifyConfig::load(path)
                    .with_context(|| format!("Failed to load {}", path.display()))?,
                None => VerifyConfig::default(),
            };
            if keep_going {
                settings.fail_fast = false;
            }
            if !sections.is_empty() {
                settings.sections = sections;
            }

            let report = run_all(&settings)?;
            match format {
                Format::Text => print_text(&report, settings.fail_fast),
                Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
            if !report.all_passed() {
                process::exit(1);
            }
            Ok(())
        }
        Command::Eval { quantity } => {
            println!("{}", evaluate(quantity)?);
            Ok(())
        }
    }
}

fn print_text(report: &VerificationReport, fail_fast: bool) {
    println!("Unirationality Claim Report");
    println!("===========================");
    println!();

    let mut passed = 0usize;
    let mut failed = 0usize;

    for result in &report.results {
        match result.severity {
            Severity::Pass => {
                passed += 1;
                println!("[PASS] {}: {}", result.claim, result.message);
            }
            Severity::Failure => {
                failed += 1;
                println!("[FAIL] {}: {}", result.claim, result.message);
            }
        }
    }

    println!();
    println!("Summary: {} passed, {} failed", passed, failed);

    if failed > 0 {
        if fail_fast {
            eprintln!("Stopped at the first failed claim; rerun with --keep-going for all.");
        }
        eprintln!("Verification FAILED: {} claim(s) did not hold.", failed);
        return;
    }

    println!("Verification PASSED.");
}

fn evaluate(quantity: Quantity) -> Result<String> {
    let mut table = CoefficientTable::new();
    let value = match quantity {
        Quantity::M { i, j } => table.m(i, j)?.to_string(),
        Quantity::B { i, j } => table.b(i, j)?.to_string(),
        Quantity::C { i, j } => table.c(i, j)?.to_string(),
        Quantity::N { d } => table.n(d)?.to_string(),
        Quantity::NMin { d } => {
            dimensions::n_min(&MultiplicitySequence::from_degree(d, 1)?)?.to_string()
        }
        Quantity::R { d } => dimensions::r(&MultiplicitySequence::from_degree(d, 1)?)?.to_string(),
        Quantity::RameroM { d } => RameroFunctions::new().m(d)?.to_string(),
    };
    Ok(value)
}
