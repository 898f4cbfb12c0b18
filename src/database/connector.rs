use crate::config::DatabaseSettings;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use std::{io, time::Duration};

/// Type alias for our DB connection (SeaORM pool handle)
pub type DB = DatabaseConnection;

/// Build ConnectOptions from structured database settings.
fn connect_options_from_settings(settings: &DatabaseSettings) -> ConnectOptions {
    let mut opt = ConnectOptions::new(settings.url.clone());
    opt.max_connections(10)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(600))
        .sqlx_logging(false);

    if let Some(v) = settings.max_connections {
        opt.max_connections(v);
    }
    if let Some(v) = settings.min_connections {
        opt.min_connections(v);
    }
    if let Some(v) = settings.connect_timeout_secs {
        opt.connect_timeout(Duration::from_secs(v));
    }
    if let Some(v) = settings.acquire_timeout_secs {
        opt.acquire_timeout(Duration::from_secs(v));
    }
    if let Some(v) = settings.idle_timeout_secs {
        opt.idle_timeout(Duration::from_secs(v));
    }
    if let Some(v) = settings.sql_log {
        opt.sqlx_logging(v);
    }

    opt
}

/// Establish a connection pool using explicit database settings.
///
/// Supported env vars (see [`DatabaseSettings::default_from_url`]):
/// - `DATABASE_MAX_CONNECTIONS` (u32)
/// - `DATABASE_MIN_CONNECTIONS` (u32)
/// - `DATABASE_CONNECT_TIMEOUT_SECS` (u64)
/// - `DATABASE_ACQUIRE_TIMEOUT_SECS` (u64)
/// - `DATABASE_IDLE_TIMEOUT_SECS` (u64)
/// - `DATABASE_SQL_LOG` (bool)
pub async fn connect_with_settings(settings: &DatabaseSettings) -> io::Result<DB> {
    let opt = connect_options_from_settings(settings);
    let db = Database::connect(opt).await.map_err(|e| {
        io::Error::other(format!(
            "Failed to connect to database at {}: {}",
            settings.url, e
        ))
    })?;

    ping(&db).await.map_err(|e| {
        io::Error::other(format!(
            "Failed to ping database at {}: {}",
            settings.url, e
        ))
    })?;

    log::info!(
        "Connected to {:?} database",
        db.get_database_backend()
    );
    Ok(db)
}

/// Lightweight health check to verify the DB connection is alive.
pub async fn ping(db: &DB) -> Result<(), DbErr> {
    db.ping().await
}
