// tests/support/db.rs
use chrono::{DateTime, Utc};
use newsroom_core::infrastructure::database::init_pool;
use sqlx::SqlitePool;
use std::sync::Arc;

const SCHEMA: [&str; 2] = [
    "CREATE TABLE author (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )",
    "CREATE TABLE article (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        author_id INTEGER NOT NULL REFERENCES author (id),
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )",
];

/// Fresh in-memory database with both tables created.
pub async fn memory_pool() -> Arc<SqlitePool> {
    let pool = init_pool("sqlite::memory:").await.expect("open in-memory sqlite");
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(&pool)
            .await
            .expect("create schema");
    }
    Arc::new(pool)
}

pub async fn seed_author(pool: &SqlitePool, name: &str, at: DateTime<Utc>) -> i64 {
    sqlx::query("INSERT INTO author (name, created_at, updated_at) VALUES (?, ?, ?)")
        .bind(name)
        .bind(at)
        .bind(at)
        .execute(pool)
        .await
        .expect("insert author")
        .last_insert_rowid()
}

pub async fn seed_article(
    pool: &SqlitePool,
    title: &str,
    author_id: i64,
    created_at: DateTime<Utc>,
) -> i64 {
    sqlx::query(
        "INSERT INTO article (title, content, author_id, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(title)
    .bind(format!("content of {title}"))
    .bind(author_id)
    .bind(created_at)
    .bind(created_at)
    .execute(pool)
    .await
    .expect("insert article")
    .last_insert_rowid()
}

pub async fn count_articles(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM article")
        .fetch_one(pool)
        .await
        .expect("count articles")
}
