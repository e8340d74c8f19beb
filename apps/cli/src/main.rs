//! growthloop CLI — simulated content-marketing pipeline.
//!
//! Each subcommand narrates one pipeline stage (keyword discovery, article
//! generation and publishing, UGC collection, curation, spotlighting,
//! analytics self-optimization) over deterministic sample data.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
