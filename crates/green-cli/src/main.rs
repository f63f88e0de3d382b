//! Green CLI Application
//!
//! Command-line interface for the green garden assistant.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use green_core::{
    display::OperationStatus, params::parse_date, FixedClock, GardenError, GardenerBuilder,
    StaticCatalog,
};
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        user,
        catalog_file,
        today,
        no_color,
        command,
    } = Args::parse();

    let mut builder = GardenerBuilder::new()
        .with_database_path(database_file)
        .with_user(user);

    if let Some(path) = catalog_file {
        let catalog = StaticCatalog::from_path(&path)
            .with_context(|| format!("Failed to load plant catalog from {}", path.display()))?;
        builder = builder.with_catalog(catalog);
    }
    if let Some(today) = today {
        let date = parse_date("today", &today)?;
        builder = builder.with_clock(FixedClock::at_date(date)?);
    }

    let gardener = builder
        .build()
        .await
        .context("Failed to initialize gardener")?;

    info!("Green started for user '{}'", gardener.user_id());

    let cli = Cli::new(gardener, TerminalRenderer::new(!no_color));
    let result = cli.run(command).await;
    if let Err(err) = &result {
        if let Some(not_due) = err.downcast_ref::<GardenError>().filter(|e| e.is_not_yet_due()) {
            cli.renderer()
                .status(&OperationStatus::info(not_due.to_string()))?;
            std::process::exit(1);
        }
    }
    result
}
