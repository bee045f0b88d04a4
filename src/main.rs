mod cli;
mod config;
mod event;
mod github;
mod http;
mod logger;
mod release;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logger::init(args.verbose)?;

    let config = Config::from_args(args).context("invalid arguments")?;

    log::info!(
        "Running {:?} strategy for {} at {}",
        config.strategy,
        config.release.version,
        config.release.target
    );
    release::execute(&config).await?;

    Ok(())
}
