use std::sync::Arc;

use omdb_search::{
    config::Config,
    routes::{create_router, AppState},
    services::{credentials::StaticCredentials, providers::OmdbProvider},
};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "omdb_search=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    if config.omdb_api_key.is_none() {
        tracing::warn!("OMDB_API_KEY is not set; searches will fail until it is configured");
    }

    let credentials = Arc::new(StaticCredentials::new(config.omdb_api_key.clone()));
    let provider = Arc::new(OmdbProvider::new(credentials, config.omdb_api_url.clone()));
    let app = create_router(AppState::new(provider));

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
