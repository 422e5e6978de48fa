//! Chatline server binary.

use std::sync::Arc;

use anyhow::Context;
use chatline_server::config::ServerConfig;
use chatline_server::{AppState, router};
use clap::Parser;
use tracing::info;

/// Chatline reference chat server.
#[derive(Parser, Debug)]
#[command(name = "chatline-server", about = "Chatline reference chat server")]
struct Args {
    /// Port to listen on (overrides `CHATLINE_PORT`).
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging (controlled via RUST_LOG env var).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = ServerConfig::from_env();
    if let Some(port) = args.port {
        config.listen_port = port;
    }

    let app = router(Arc::new(AppState::default()));

    let addr = config.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(address = %addr, "chat server listening");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
