//! ctr-kat CLI
//!
//! Command-line interface for running counter-based RNG known-answer tests.

#![allow(clippy::doc_markdown)]

use clap::{Parser, Subcommand};
use ctr_kat_cli::{
    EXIT_FATAL, RunOptions, RunOutcome, list_bindings, run_vectors, verify_reference,
};
use ctr_kat_runner::{ErrorReporter, Registry};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ctr-kat")]
#[command(about = "Known-answer tests for counter-based random number generators", long_about = None)]
#[command(version)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a known-answer vector file
    Run {
        /// Path to the vector file
        #[arg(value_name = "VECTORS")]
        vectors: PathBuf,

        /// Check every record's binding before running any record
        #[arg(long)]
        preflight: bool,

        /// Write a JSON summary to this path
        #[arg(long, value_name = "PATH")]
        json: Option<PathBuf>,

        /// Write a JUnit XML report to this path
        #[arg(long, value_name = "PATH")]
        junit: Option<PathBuf>,
    },

    /// List the compiled-in (generator, rounds) bindings
    List,

    /// Run the built-in reference vectors
    Verify {
        /// Write a JSON summary to this path
        #[arg(long, value_name = "PATH")]
        json: Option<PathBuf>,

        /// Write a JUnit XML report to this path
        #[arg(long, value_name = "PATH")]
        junit: Option<PathBuf>,
    },
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn finish(result: ctr_kat_cli::Result<RunOutcome>) -> ! {
    match result {
        Ok(outcome) => {
            for line in outcome.report_lines() {
                println!("{line}");
            }
            std::process::exit(outcome.exit_code());
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(EXIT_FATAL);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            vectors,
            preflight,
            json,
            junit,
        } => {
            let options = RunOptions {
                preflight,
                json,
                junit,
            };
            finish(run_vectors(&vectors, &options, ErrorReporter::stderr()));
        }
        Commands::List => {
            for line in list_bindings(&Registry::builtin()) {
                println!("{line}");
            }
        }
        Commands::Verify { json, junit } => {
            let options = RunOptions {
                preflight: true,
                json,
                junit,
            };
            finish(verify_reference(&options, ErrorReporter::stderr()));
        }
    }
}
