//! Idea & Feature Tracker Backend
//!
//! Layered architecture:
//! - domain: Items, list kinds and domain errors
//! - repository: SQLite storage behind the `ListRepository` trait
//! - routes: `axum` handlers for the `/api/{kind}` endpoints

use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub mod config;
pub mod domain;
pub mod repository;
pub mod routes;

pub use config::Config;

use domain::DomainError;
use repository::{init_db, SqliteListRepository};
use routes::{router, AppState};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("database setup failed: {0}")]
    Database(#[from] DomainError),
    #[error("server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Install the global `tracing` subscriber. `RUST_LOG` overrides the
/// default `info` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Open the database and serve until Ctrl-C.
pub async fn run(config: Config) -> Result<(), ServerError> {
    tracing::info!("opening database at {}", config.db.display());
    let db = init_db(&config.db)?;
    let state = AppState {
        repo: Arc::new(SqliteListRepository::new(db)),
    };

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await?;
    Ok(())
}
