mod config;
mod logging;
mod server;
mod signals;

use std::path::PathBuf;

use anon_auth::AnonymousIssuer;
use anyhow::Result;
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::config::{AppConfig, CliOverrides};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Baby shower RSVP server
#[derive(Parser)]
#[command(name = "shower-server")]
#[command(about = "Baby shower RSVP server")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use an in-memory SQLite database
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.config
        && !path.is_file()
    {
        anyhow::bail!("config file does not exist: {}", path.display());
    }

    // defaults -> YAML -> env (SHOWER__*) -> CLI
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(CliOverrides {
        port: cli.port,
        verbose: cli.verbose,
        mock: cli.mock,
    });

    logging::init_logging(&config.logging)?;

    if cli.print_config {
        println!("{}", config.to_pretty_json()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            tracing::info!("Shower server starting");
            server::run(config).await
        }
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    humantime::parse_duration(&config.server.shutdown_timeout)?;
    humantime::parse_duration(&config.database.connect_timeout)?;
    AnonymousIssuer::from_config(&config.auth)?;
    config.rsvp.validate()?;

    println!("Configuration is valid");
    println!("{}", config.to_pretty_json()?);
    Ok(())
}
