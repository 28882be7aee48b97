//! Command line front end: mine closed sequential patterns from an SPMF file.

use anyhow::{bail, Context, Result};
use clap::Parser;
use clospan::{rank, spmf, Config};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "clospan")]
#[command(about = "Closed sequential pattern mining", long_about = None)]
struct Cli {
    /// SPMF input file (-1 ends an itemset, -2 ends a sequence)
    input: PathBuf,

    /// Minimum support, as a sequence count
    #[arg(short = 's', long)]
    min_support: Option<usize>,

    /// Maximum pattern length
    #[arg(long)]
    max_length: Option<usize>,

    /// CSV file receiving the closed patterns
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not write the CSV file
    #[arg(long)]
    no_csv: bool,

    /// Print longest patterns first instead of discovery order
    #[arg(long)]
    ranked: bool,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long)]
    log_level: Option<String>,
}

impl Cli {
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => Config::from_env("CLOSPAN")?,
        };

        if let Some(min_support) = self.min_support {
            config.mining.min_support = min_support;
        }
        if let Some(max_length) = self.max_length {
            config.mining.max_length = Some(max_length);
        }
        if let Some(output) = &self.output {
            config.output.path = output.clone();
        }
        if self.no_csv {
            config.output.write_csv = false;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config()?;

    // Setup logging
    let level = match config.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        other => bail!("Invalid log level: {}", other),
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let database = spmf::read_database(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    if database.is_empty() {
        bail!("no valid input data in {}", cli.input.display());
    }
    info!(
        sequences = database.len(),
        min_support = config.mining.min_support,
        "mining"
    );

    let mut closed = config.miner().mine(&database)?;
    if closed.is_empty() {
        println!("No patterns satisfy the minimum support.");
        return Ok(());
    }
    if cli.ranked {
        rank(&mut closed);
    }

    for (pattern, support) in &closed {
        println!(
            "{}",
            spmf::display_result(database.alphabet(), pattern, *support)
        );
    }

    if config.output.write_csv {
        spmf::save_results(&config.output.path, database.alphabet(), &closed)
            .with_context(|| format!("failed to write {}", config.output.path.display()))?;
        info!(
            patterns = closed.len(),
            path = %config.output.path.display(),
            "saved results"
        );
    }

    Ok(())
}
