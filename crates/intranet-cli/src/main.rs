//! CLI entry point - the composition root.
//!
//! Command dispatch routes to the axum bootstrap; all infrastructure
//! wiring happens there.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use intranet_axum::{ServerConfig, start_server};

#[derive(Parser)]
#[command(name = "intranet", about = "Intranet back-office API server")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server.
    Serve {
        /// Port to listen on.
        #[arg(long, env = "INTRANET_PORT", default_value_t = 8080)]
        port: u16,

        /// Path to the SQLite database file.
        #[arg(long, env = "INTRANET_DATABASE", default_value = "data/intranet.db")]
        database: PathBuf,

        /// Allowed CORS origins. Repeat for multiple; omit to allow all.
        #[arg(long = "cors-origin")]
        cors_origins: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve {
            port,
            database,
            cors_origins,
        } => {
            let mut config = ServerConfig::with_defaults().with_database_path(database);
            config.port = port;
            if !cors_origins.is_empty() {
                config = config.with_allowed_origins(cors_origins);
            }

            tracing::info!(port = config.port, "starting intranet API server");
            start_server(config).await
        }
    }
}
