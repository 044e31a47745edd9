use anyhow::Context;
use applepad_backend::{router, AppState, Settings};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let settings = Settings::parse();

    info!("ApplePad backend is initializing...");
    let state = AppState::new(&settings).context("building the HTTP client")?;

    match &settings.hf_endpoint_url {
        Some(url) => info!("Forwarding prompts to {}", url),
        None => warn!(
            "HF_ENDPOINT_URL not set, serving placeholder {:?}",
            settings.placeholder
        ),
    }
    if settings.hf_endpoint_url.is_some() && settings.hf_token.is_none() {
        warn!("HF_TOKEN not set, upstream requests go out unauthenticated");
    }
    info!("Serving static files from: {:?}", settings.data);

    let app = router(Arc::new(state));

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    info!("Backend listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    axum::serve(listener, app).await.context("serving")?;
    Ok(())
}
