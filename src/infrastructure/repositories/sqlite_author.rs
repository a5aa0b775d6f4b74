use super::log_sqlx;
use crate::domain::author::{Author, AuthorId, AuthorRepository};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteAuthorRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteAuthorRepository {
    #[must_use]
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuthorRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<AuthorRow> for Author {
    fn from(row: AuthorRow) -> Self {
        Author {
            id: AuthorId(row.id),
            name: row.name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl AuthorRepository for SqliteAuthorRepository {
    async fn get_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>> {
        let row = sqlx::query_as::<_, AuthorRow>(
            "SELECT id, name, created_at, updated_at FROM author WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(log_sqlx("author.get_by_id"))?;

        Ok(row.map(Author::from))
    }
}
