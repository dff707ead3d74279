//! Pool setup and table bootstrap for the configured resources.

use crate::config::{AppConfig, ResourceKind};
use crate::repository::SqlResource;
use crate::resource::{Thing, User};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Open the database file from config, creating it if missing.
pub async fn connect(config: &AppConfig) -> Result<SqlitePool, sqlx::Error> {
    let opts = SqliteConnectOptions::new()
        .filename(&config.database_path)
        .create_if_missing(true);
    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(opts)
        .await
}

fn ddl_for(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Users => User::DDL,
        ResourceKind::Things => Thing::DDL,
    }
}

/// Create the table of every configured resource kind if it does not exist.
pub async fn ensure_tables(pool: &SqlitePool, config: &AppConfig) -> Result<(), sqlx::Error> {
    let mut done = Vec::new();
    for r in &config.resources {
        if done.contains(&r.kind) {
            continue;
        }
        sqlx::query(ddl_for(r.kind)).execute(pool).await?;
        tracing::debug!(table = r.kind.name(), "table ready");
        done.push(r.kind);
    }
    Ok(())
}

/// Insert the default admin user when users are served. Existing rows are left alone.
pub async fn seed(pool: &SqlitePool, config: &AppConfig) -> Result<(), sqlx::Error> {
    if !config.resources.iter().any(|r| r.kind == ResourceKind::Users) {
        return Ok(());
    }
    let result = sqlx::query("INSERT OR IGNORE INTO users (id, name) VALUES (1, 'admin')")
        .execute(pool)
        .await?;
    if result.rows_affected() > 0 {
        tracing::info!("seeded admin user");
    }
    Ok(())
}
