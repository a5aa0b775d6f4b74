use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::str::FromStr;

/// Opens the store, creating the database file when it does not exist yet.
/// In-memory databases live and die with their connection, so they are
/// pinned to a single one that is never recycled.
///
/// # Errors
///
/// Returns the sqlx error when the URL is malformed or the database cannot
/// be opened.
pub async fn init_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(16)
    };

    pool_options.connect_with(options).await
}
