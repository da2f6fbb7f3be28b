mod config;
mod contact;
mod content;
mod db;
mod errors;
mod models;
mod render;
mod routes;
mod state;
mod store;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, StoreBackend};
use crate::content::PORTFOLIO;
use crate::db::create_pool;
use crate::render::PageRenderer;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::postgres::PgStore;
use crate::store::rest::RestStore;
use crate::store::MessageStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration first: the log filter depends on it
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio site v{}", env!("CARGO_PKG_VERSION"));

    let store = build_store(&config)?;
    info!(
        "Message store initialized (backend: {}, table: {})",
        store.backend(),
        config.messages_table
    );

    // Connectivity check only; the site serves regardless of the outcome
    if config.probe_store_on_start {
        match store.probe().await {
            Ok(()) => info!("Store probe succeeded"),
            Err(e) => warn!("Store probe failed, contact submissions may fail: {e}"),
        }
    }

    let pages = PageRenderer::new(PORTFOLIO).context("Failed to compile page templates")?;

    let state = AppState {
        store,
        pages: Arc::new(pages),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Picks the store backend from configuration.
fn build_store(config: &Config) -> Result<Arc<dyn MessageStore>> {
    let store: Arc<dyn MessageStore> = match &config.store {
        StoreBackend::Rest { url, api_key } => Arc::new(RestStore::new(
            url,
            &config.messages_table,
            api_key.clone(),
        )),
        StoreBackend::Postgres { database_url } => {
            let pool = create_pool(database_url)?;
            Arc::new(PgStore::new(pool, &config.messages_table))
        }
    };
    Ok(store)
}
