//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. All concrete implementations are instantiated here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use intranet_core::gateway::ProcedureRegistry;
use intranet_core::ports::ProcedureStore;
use intranet_core::services::AppCore;
use intranet_db::{CoreFactory, SqlitePool, setup_database};

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with default paths.
    pub fn with_defaults() -> Self {
        Self {
            port: 8080,
            database_path: PathBuf::from("data/intranet.db"),
            cors: CorsConfig::default(),
        }
    }

    /// Set the database path.
    #[must_use]
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = path.into();
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<AppCore>,
}

/// Bootstrap the web server services from configuration.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        database_path = %config.database_path.display(),
        "bootstrap resolved paths"
    );
    let pool = setup_database(&config.database_path).await?;
    build_context(pool).await
}

/// Assemble the application context over an existing pool.
///
/// Split out of [`bootstrap`] so tests can wire an in-memory database.
pub async fn build_context(pool: SqlitePool) -> Result<AxumContext> {
    let repos = CoreFactory::build_repos(pool.clone());
    let store: Arc<dyn ProcedureStore> = CoreFactory::procedure_store(pool);

    // Populate the gateway command table once, at startup.
    let targets = store.list_targets().await?;
    tracing::info!(procedures = targets.len(), "loaded procedure command table");
    let registry = ProcedureRegistry::new(targets);

    let core = Arc::new(AppCore::new(repos, store, registry));
    Ok(AxumContext { core })
}

/// Start the web server on the configured port.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("intranet web server listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
