#![forbid(unsafe_code)]

//! Muawin CLI
//!
//! Launches the patient intake form and offers read-only inspection of the
//! record store.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,muawin=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = commands::resolve_config(&args)?;
    tracing::debug!(?config, "Resolved configuration");

    let mut stdout = std::io::stdout();
    match args.command.unwrap_or_default() {
        Command::Serve { .. } => commands::cmd_serve(&config).await?,
        Command::List => {
            let store = commands::open_store(&config).await?;
            commands::cmd_list(&store, &mut stdout).await?;
        }
        Command::Show { id } => {
            let store = commands::open_store(&config).await?;
            commands::cmd_show(&store, &id, &mut stdout).await?;
        }
        Command::Config => commands::cmd_config(&config, &mut stdout)?,
    }

    Ok(())
}
