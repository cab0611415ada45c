mod auth;
mod cli;
mod constants;
mod error;
mod insights;
mod output;
mod providers;
mod tasks;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    info!("Starting buildstats - CI build metrics");
    cli.execute().await?;

    Ok(())
}
