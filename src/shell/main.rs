use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use cafes::modules::cafes::core::seed::{default_seed, load_seed};
use cafes::shared::infrastructure::cafe_store::in_memory::InMemoryCafeStore;
use cafes::shell::config::AppConfig;
use cafes::shell::http::router;
use cafes::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    let seed = match &config.seed_path {
        Some(path) => load_seed(path)?,
        None => default_seed()?,
    };
    tracing::info!(cafes = seed.len(), "menu seeded");
    let store = Arc::new(InMemoryCafeStore::with_seed(seed)?);

    let app = router(AppState::new(store));

    let addr = config.listen_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Cafes API: http://{}/cafes", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
