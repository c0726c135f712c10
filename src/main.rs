//! keyreport - stream global key presses to stdout as JSON lines.
//!
//! Stdout carries only the record stream; diagnostics go to stderr and are
//! controlled with `RUST_LOG`.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use key_event_reporter::{report, RdevSource};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Reports every key press as {"type":"press","key":...} until Escape is
/// pressed, then writes {"type":"exit"} and exits.
#[derive(Parser, Debug)]
#[command(name = "keyreport", version, about, long_about = None)]
struct Cli {}

#[tokio::main]
async fn main() {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    info!(version = env!("CARGO_PKG_VERSION"), "keyreport starting");

    report(RdevSource::new(), std::io::stdout().lock())
        .await
        .context("key reporting failed")?;

    info!("listener finished");
    Ok(())
}
