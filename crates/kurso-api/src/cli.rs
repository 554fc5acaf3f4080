//! Command-line arguments.

use clap::{Parser, Subcommand};

use crate::config::KursoConfig;

/// Kurso - markdown course catalogue served as a JSON API
#[derive(Parser, Debug)]
#[command(name = "kurso", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Run the HTTP API (default)
    Serve(ServeArgs),
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Listener overrides for `serve`.
#[derive(clap::Args, Debug, Default, PartialEq)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "KURSO_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "KURSO_PORT")]
    pub port: Option<u16>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ConfigAction {
    /// Print the config file path
    Path,
    /// Print a value by dotted key, e.g. `server.port`
    Get { key: String },
    /// Write a default config file
    Init {
        /// Target file instead of the default location
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl ServeArgs {
    /// Apply command-line or environment overrides to a loaded config.
    pub fn apply(&self, config: &mut KursoConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

impl Cli {
    /// The subcommand to run, with `serve` when none is given.
    pub fn into_command(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Serve(ServeArgs::default()))
    }
}
