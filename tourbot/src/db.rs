use crate::error::{BotError, Result};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Open the connection pool. `max_connections` is left to the driver when
/// `None`, which keeps in-memory SQLite on a single shared connection.
pub async fn init_database(
    database_url: &str,
    max_connections: Option<u32>,
) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging(false);
    if let Some(max) = max_connections {
        options.max_connections(max);
    }

    Database::connect(options)
        .await
        .map_err(|e| BotError::Config(format!("Failed to connect to database: {e}")))
}
