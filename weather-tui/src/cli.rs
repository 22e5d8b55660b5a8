use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use weather_core::Config;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-tui", version, about = "Terminal browser for current weather")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key used for lookups.
    Configure,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            None => {
                let config = Config::load()?;
                crate::app::run(&config).await
            }
        }
    }
}

/// Interactive credential setup, persisted to the platform config directory.
fn configure() -> Result<()> {
    let mut config = Config::load()?;

    if config.is_configured() {
        println!("An API key is already configured; it will be replaced.");
    }

    let api_key = inquire::Text::new("OpenWeather API key:")
        .prompt()
        .context("Failed to read API key from prompt")?;

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved API key to {}", Config::config_file_path()?.display());

    Ok(())
}
