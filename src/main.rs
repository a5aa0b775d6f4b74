use anyhow::Result;
use newsroom_core::{
    application::{articles::FetchArticlesQuery, services::ApplicationServices},
    config::AppConfig,
    infrastructure::{
        database,
        repositories::{SqliteArticleRepository, SqliteAuthorRepository},
        time::SystemClock,
    },
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

/// Prints one page of articles as JSON. The optional first argument is the
/// cursor returned by the previous page.
async fn bootstrap() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = Arc::new(database::init_pool(config.database_url()).await?);
    let services = ApplicationServices::new(
        Arc::new(SqliteArticleRepository::new(Arc::clone(&pool))),
        Arc::new(SqliteAuthorRepository::new(Arc::clone(&pool))),
        Arc::new(SystemClock),
    );

    let query = FetchArticlesQuery {
        cursor: std::env::args().nth(1),
        limit: 0,
    };
    let page = services
        .articles
        .fetch(&config.query_context(), query)
        .await?;
    tracing::info!(items = page.items.len(), has_more = page.has_more, "fetched article page");

    println!("{}", serde_json::to_string_pretty(&page)?);
    pool.close().await;
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
