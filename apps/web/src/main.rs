mod api;
mod config;
mod content;
mod errors;
mod media;
mod models;
mod render;
mod routes;
mod site;
mod state;
mod theme;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::content::{articles::ARTICLES, projects::PROJECTS};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio site v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Content loaded: {} projects, {} articles",
        PROJECTS.len(),
        ARTICLES.len()
    );

    if !config.assets_dir.is_dir() {
        warn!(
            "Assets directory {} not found; media under /assets will 404",
            config.assets_dir.display()
        );
    }

    let state = AppState {
        config: config.clone(),
    };

    // Public read-only site: any origin may fetch the JSON API.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
