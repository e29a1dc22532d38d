//! Person Registry HTTP Server Binary
//!
//! This is the main entry point for the person registry server. It builds
//! the in-memory store and the fake-data source, wires them into the HTTP
//! router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin registry-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use person_registry::config::ServerConfig;
use person_registry::fakedata::Faker;
use person_registry::http::{create_router, AppState};
use person_registry::store::InMemoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting person registry server");

    // Composition root: the store and the fake-data source are constructed
    // here and injected into the handlers through the application state.
    let store = Arc::new(InMemoryStore::new());
    let faker = Arc::new(Faker::new());
    let state = AppState::new(store, faker);

    let app = create_router(state);

    let config = ServerConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    let addr: SocketAddr = config.bind_addr().parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
