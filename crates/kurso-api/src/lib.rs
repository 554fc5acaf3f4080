//! # kurso-api
//!
//! HTTP API, configuration, and CLI for the Kurso course catalogue.
//!
//! - [`routes`]: axum handlers under `/api`
//! - [`config`]: TOML configuration ([`KursoConfig`])
//! - [`cli`] and [`config_handlers`]: the `kurso` command line
//! - [`server`]: listener with graceful shutdown

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use cli::{Cli, Command, ConfigAction, ServeArgs};
pub use config::KursoConfig;
pub use error::{ApiError, ApiResult};
pub use routes::router;
pub use state::AppState;

/// Run a parsed command line.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.clone();
    match cli.into_command() {
        Command::Serve(args) => {
            let mut config = KursoConfig::load(config_path.as_deref())?;
            args.apply(&mut config);
            server::serve(&config).await
        }
        Command::Config { action } => {
            config_handlers::handle_config_command(config_path.as_deref(), action)?;
            Ok(())
        }
    }
}
