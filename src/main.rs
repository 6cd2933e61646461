use std::sync::Arc;

use anyhow::Context;
use pet_toys_api::{
    config::AppConfig,
    database::{DatabaseManager, PgPetStore},
    AppState,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pet_toys_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    tracing::info!(
        "Starting Pet Toys API in {:?} mode against {}",
        config.environment,
        config.database.redacted_url()
    );

    let pool = DatabaseManager::connect(&config.database).await?;
    let store = PgPetStore::new(pool.clone());
    store.ensure_schema().await?;

    let bind_addr = format!("0.0.0.0:{}", config.api.port);
    let app = pet_toys_api::app(AppState::new(config, Arc::new(store)));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    tracing::info!("Pet Toys API listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    DatabaseManager::close(&pool).await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("shutting down");
}
