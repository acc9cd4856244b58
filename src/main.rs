use std::sync::Arc;

use fin_news::{
    CacheStore, Config, FinlightClient, MemoryCache, RedisCache,
    config::CacheBackend,
    logging,
    news::NewsService,
    server::{AppState, create_router},
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::load()?;
    logging::init(config.is_production());
    tracing::debug!(?config, "configuration loaded");

    let cache: Arc<dyn CacheStore> = match config.cache_backend {
        CacheBackend::Redis => {
            let redis = RedisCache::connect(&config.redis_url).await.inspect_err(|e| {
                tracing::error!(error = %e, "could not connect to redis");
            })?;
            Arc::new(redis)
        }
        CacheBackend::Memory => {
            tracing::warn!("using the in-memory cache; entries are not shared or persisted");
            Arc::new(MemoryCache::new())
        }
    };

    let mut client = FinlightClient::builder(config.finlight_key.clone());
    if let Some(url) = config.finlight_base_url.clone() {
        client = client.base_url(url);
    }
    let client = client.build()?;

    // Create application state
    let app_state = AppState {
        news: NewsService::builder(Arc::new(client), cache).build(),
    };

    let app = create_router(app_state);
    let listener = TcpListener::bind(config.server_addr).await?;

    tracing::info!(addr = %config.server_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
