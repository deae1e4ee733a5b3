// Preview Server Binary Entry Point
//
// Purpose: serve the portfolio site locally with the projects fragment and API
// Usage: cargo run --features server --bin preview_server

use portfolio_site::config::SiteConfig;
use portfolio_site::server::{create_router, AppState};
use std::net::SocketAddr;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "portfolio_site=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Configuration from environment variables
    let site_dir = std::env::var("SITE_DIR").unwrap_or_else(|_| ".".to_string());

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let config = match std::env::var("SITE_CONFIG") {
        Ok(path) => SiteConfig::load(Path::new(&path))?,
        Err(_) => SiteConfig::default(),
    };

    tracing::info!("Configuration:");
    tracing::info!("  SITE_DIR: {}", site_dir);
    tracing::info!("  PORT: {}", port);
    tracing::info!("  projects: {}", config.projects_url);

    let app = create_router(AppState::new(site_dir, config));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
