use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use tarock_sim::config::SimulationConfig;
use tarock_sim::logging::init_logging;
use tarock_sim::runner::DealRunner;

/// Plays one deal of three-hand tarock between computer seats.
#[derive(Debug, Parser)]
#[command(
    name = "tarock",
    author,
    version,
    about = "Single-deal three-hand tarock simulator"
)]
struct Cli {
    /// Path to an optional YAML configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the RNG seed for the deal.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Override the diagnostic log level (trace, debug, info, warn, error).
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => SimulationConfig::from_path(path)?,
        None => SimulationConfig::default(),
    };

    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    if let Some(level) = cli.log_level {
        config.logging.tracing_level = level;
    }

    config.validate()?;

    let _logging_guard = init_logging(&config.logging);
    let runner = DealRunner::new(&config)?;
    let seed = runner.seed();
    let outcome = runner
        .run()
        .with_context(|| format!("playing deal with seed {seed}"))?;

    println!("{}", outcome.to_json()?);
    Ok(())
}
