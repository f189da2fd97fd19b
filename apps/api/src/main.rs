mod assist;
mod config;
mod errors;
mod export;
mod forms;
mod matcher;
mod models;
mod render;
mod routes;
mod session;
mod state;
mod validation;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assist::CannedAssistant;
use crate::config::Config;
use crate::routes::build_router;
use crate::session::storage::FileStorage;
use crate::session::store::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ResumeAI API v{}", env!("CARGO_PKG_VERSION"));

    // Local device storage backs the session across restarts
    let storage = FileStorage::open(&config.storage_dir).with_context(|| {
        format!(
            "could not open local storage in {}",
            config.storage_dir.display()
        )
    })?;
    let session = SessionStore::load(Box::new(storage));

    let assistant = Arc::new(CannedAssistant::new(
        config.assist_delay,
        config.cover_letter_delay,
    ));
    info!(
        "Writing assistant initialized (backend: canned, delays {:?}/{:?})",
        config.assist_delay, config.cover_letter_delay
    );

    let state = AppState::new(config.clone(), session, assistant);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
