//! Binary crate for the `weather-tui` terminal application.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and interactive configuration
//! - The two-page terminal UI (home input, weather card)
//! - The event loop driving fetches and redraws

use clap::Parser;

mod app;
mod cli;
mod controller;
mod event;
mod router;
mod view;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging goes to stderr and stays silent unless RUST_LOG is set, so it
    // cannot draw over the alternate screen in normal use.
    env_logger::init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
