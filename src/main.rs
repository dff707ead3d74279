//! Server entry point: loads config, bootstraps tables, serves the configured resources.

use rest_bootstrap::{app_routes, connect, ensure_tables, seed, AppConfig, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("rest_bootstrap=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::load()?;
    let pool = connect(&config).await?;
    ensure_tables(&pool, &config).await?;
    if config.seed {
        seed(&pool, &config).await?;
    }

    let app = app_routes(&config, AppState { pool: pool.clone() });
    let listener = TcpListener::bind(&config.listen_addr).await?;
    tracing::info!(database = %config.database_path.display(), "listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    pool.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
