//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Muawin - patient intake form
#[derive(Parser, Debug)]
#[command(name = "muawin")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, env = "MUAWIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// SQLite file holding the patients table
    #[arg(short, long, env = "DATABASE_PATH")]
    pub database: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands. Defaults to `serve`.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the web form
    Serve {
        /// Interface to bind
        #[arg(long, env = "MUAWIN_HOST")]
        host: Option<String>,
        /// Port to bind
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,
    },
    /// Print all patients as a table
    List,
    /// Print one patient as JSON
    Show {
        /// Patient ID (e.g. P001)
        id: String,
    },
    /// Print the resolved configuration
    Config,
}

impl Default for Command {
    fn default() -> Self {
        Command::Serve {
            host: None,
            port: None,
        }
    }
}
