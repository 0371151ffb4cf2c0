use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gantt_cli::render::{self, Outcome, RenderArgs};
use gantt_cli::{Cli, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let args = RenderArgs {
        path: cli.path,
        width: cli.width.unwrap_or(config.width),
        output: cli.output.unwrap_or_else(|| config.output.clone()),
    };
    tracing::info!(path = %args.path.display(), width = args.width, "starting");

    let mut stdout = io::stdout().lock();
    match render::run(&mut stdout, &args, config.layout())? {
        Outcome::Written {
            path,
            width,
            height,
        } => tracing::debug!(path = %path.display(), width, height, "done"),
        Outcome::Skipped => tracing::debug!("done without output"),
    }

    Ok(())
}
