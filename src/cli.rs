use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use crate::config::ServerConfig;
use commands::serve;

#[derive(Parser)]
#[command(name = "agripredict")]
#[command(about = "Serves the AgriPredict single-page application")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Configuration file (TOML, YAML or JSON)
        ///
        /// Without this flag an optional `agripredict.toml` in the working
        /// directory is read. Environment variables prefixed with
        /// `AGRIPREDICT_` override file values.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:8080, 127.0.0.1:8080)
        #[arg(short, long)]
        bind_address: Option<String>,

        /// Directory holding the built front-end bundle (`index.html`, wasm, js)
        #[arg(short, long)]
        static_dir: Option<PathBuf>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                config,
                bind_address,
                static_dir,
            } => {
                let config = ServerConfig::load(config.as_deref())?.with_overrides(bind_address, static_dir);
                serve(config).await?;
            }
        }
        Ok(())
    }
}
