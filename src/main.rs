//! crime-proxy server binary

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crime_proxy::api::{create_router, AppState};
use crime_proxy::config::{AppConfig, LogFormat};
use crime_proxy::upstream::http::HttpTransport;
use crime_proxy::upstream::{CrimeClient, UPSTREAM_BASE_URL};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config)?;

    let transport = HttpTransport::new(&config.upstream.user_agent, config.upstream.timeout())
        .context("failed to build upstream HTTP client")?;
    let client = CrimeClient::new(Arc::new(transport)).context("invalid upstream URL")?;
    tracing::info!(
        upstream = UPSTREAM_BASE_URL,
        timeout_secs = ?config.upstream.timeout_secs,
        "Upstream client initialised",
    );

    let router = create_router(AppState::new(client));

    // Start server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    tracing::info!(%addr, "Server is running");

    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.logging.level.clone()))
        .unwrap_or_else(|_| EnvFilter::new("crime_proxy=info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format {
        LogFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Text => {
            registry.with(tracing_subscriber::fmt::layer()).init();
        }
    }

    Ok(())
}
