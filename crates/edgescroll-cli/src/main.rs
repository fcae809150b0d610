use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use edgescroll_core::{AppConfig, ScrollBehavior};

mod commands;

#[derive(Parser)]
#[command(name = "edgescroll")]
#[command(author, version, about = "Simulate and tune drag-and-drop edge auto-scrolling")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a scripted drag against a simulated page
    Simulate {
        /// Scenario file (TOML, or JSON with a .json extension)
        scenario: PathBuf,
        /// Override the scenario's scroll behavior
        #[arg(short = 'b', long)]
        behavior: Option<ScrollBehavior>,
        /// Print one JSON object per frame
        #[arg(long)]
        json: bool,
        /// Run frames on a real-time frame clock instead of stepping them
        #[arg(long)]
        realtime: bool,
    },
    /// Print the distance-to-velocity table for a region
    Curve {
        /// Region size along the scrolling axis, in pixels
        #[arg(short = 's', long, default_value_t = 600.0)]
        size: f64,
        /// Apply time dampening as if the drag had lasted this long
        #[arg(short = 'e', long)]
        elapsed_ms: Option<u64>,
        /// Distance step between rows, in pixels
        #[arg(long, default_value_t = 10.0)]
        step: f64,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short = 'f', long)]
        force: bool,
    },
    /// Print the configuration file path
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    // Handle commands
    match cli.command {
        Commands::Simulate {
            scenario,
            behavior,
            json,
            realtime,
        } => {
            let options = commands::simulate::Options {
                behavior,
                json,
                realtime,
            };
            commands::simulate::run(&config, &scenario, options).await
        }
        Commands::Curve {
            size,
            elapsed_ms,
            step,
        } => commands::curve::run(&config, size, elapsed_ms, step),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Init { force } => commands::config::init(force),
            ConfigAction::Path => commands::config::path(),
        },
    }
}
