//! Sample Founders Online documents and write their text to JSON.
//!
//! Usage: founders-sample [--max-items N] [--seed S] [--no-randomize]
//!                        [--metadata PATH] [--output-dir DIR]
//!                        [--timeout-secs N] [--continue-on-error]
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{ArgAction, Parser};
use founders_sample::options::{DEFAULT_METADATA_PATH, DEFAULT_OUTPUT_DIR};
use founders_sample::Options;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "founders-sample", version, about)]
struct Cli {
    /// Maximum number of records to sample.
    #[arg(long, default_value_t = 1000)]
    max_items: usize,

    /// Seed for the random sample.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Take the first records instead of a random sample.
    #[arg(long = "no-randomize", action = ArgAction::SetFalse)]
    randomize: bool,

    /// Metadata JSON file.
    #[arg(long, default_value = DEFAULT_METADATA_PATH)]
    metadata: PathBuf,

    /// Directory for the sample file.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Per-request timeout in seconds (default: wait indefinitely).
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Record fetch errors on the item instead of aborting the run.
    #[arg(long)]
    continue_on_error: bool,
}

impl From<Cli> for Options {
    fn from(cli: Cli) -> Self {
        Self {
            randomize: cli.randomize,
            max_items: cli.max_items,
            seed: cli.seed,
            metadata_path: cli.metadata,
            output_dir: cli.output_dir,
            timeout: cli.timeout_secs.map(Duration::from_secs),
            continue_on_error: cli.continue_on_error,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();

    let options = Options::from(Cli::parse());
    let summary = founders_sample::run(&options).with_context(|| {
        format!(
            "sampling run failed (metadata: {})",
            options.metadata_path.display()
        )
    })?;

    tracing::info!(
        processed = summary.processed,
        extracted = summary.extracted,
        failed = summary.failed,
        "done"
    );
    Ok(())
}
