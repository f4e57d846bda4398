//! Walkthrough entry point.
//!
//! Usage:
//!   cargo run -p walkthrough -- --values 1,2,3 --style arrows

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use walkthrough::{Config, run};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,walkthrough=debug".into());
    let registry = tracing_subscriber::registry().with(filter);
    if config.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(values = ?config.values, style = ?config.style, "starting walkthrough");

    let lines = run(&config)?;
    if let Some(last) = lines.last() {
        println!("{last}");
    }

    tracing::info!(steps = lines.len(), "walkthrough finished");
    Ok(())
}
