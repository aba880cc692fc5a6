mod catalog;
mod config;
mod errors;
mod layout;
mod routes;
mod state;
mod summary;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so a bad value aborts before anything binds
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Cornice API v{}", env!("CARGO_PKG_VERSION"));

    let margins = config.margins;
    info!(
        side = margins.side,
        top = margins.top,
        bottom = margins.bottom,
        inter_row_gap = margins.inter_row_gap,
        "Layout margin policy"
    );
    for product in config.catalog.products() {
        info!(
            "Product {}: {} cm bars at {:.2}",
            product.tier.label(),
            product.bar_length,
            product.unit_price
        );
    }

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    let state = AppState::new(config);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
