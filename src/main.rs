use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{error, info};

mod client;
mod config;
mod errors;
mod models;
mod pages;
mod render;
mod server;
mod traits;

use client::PokeApiClient;
use config::Settings;
use pages::PageAssembler;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    info!("Starting Pokédex web front-end");

    let settings = Settings::from_env()?;
    let client = PokeApiClient::new(&settings.upstream_base_url, settings.upstream_timeout)?;
    let app = server::router(PageAssembler::new(Arc::new(client)));

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let listener = TcpListener::bind(addr).await?;

    info!(
        "Listening on http://{} (upstream {}, timeout {:?})",
        addr, settings.upstream_base_url, settings.upstream_timeout
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Error listening for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
