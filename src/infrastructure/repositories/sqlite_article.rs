// src/infrastructure/repositories/sqlite_article.rs
use super::log_sqlx;
use crate::domain::article::{
    Article, ArticleCursor, ArticleId, ArticleRepository, ArticleUpdate, NewArticle,
};
use crate::domain::author::{Author, AuthorId};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const SELECT_ARTICLES: &str = "SELECT ar.id AS id, ar.title AS title, ar.content AS content, \
     ar.author_id AS author_id, ar.created_at AS created_at, ar.updated_at AS updated_at, \
     a.name AS author_name, a.created_at AS author_created_at, a.updated_at AS author_updated_at \
     FROM article ar JOIN author a ON a.id = ar.author_id";

#[derive(Clone)]
pub struct SqliteArticleRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleRepository {
    #[must_use]
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    async fn find_one(&self, mut builder: QueryBuilder<'_, Sqlite>) -> DomainResult<Option<Article>> {
        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&*self.pool)
            .await
            .map_err(log_sqlx("article.find_one"))?;
        Ok(row.map(Article::from))
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_name: String,
    author_created_at: DateTime<Utc>,
    author_updated_at: DateTime<Utc>,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Article {
            id: ArticleId(row.id),
            title: row.title,
            content: row.content,
            author: Author {
                id: AuthorId(row.author_id),
                name: row.author_name,
                created_at: row.author_created_at,
                updated_at: row.author_updated_at,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn ensure_single_row(affected: u64, operation: &str) -> DomainResult<()> {
    if affected != 1 {
        return Err(DomainError::Integrity(format!(
            "{operation} affected {affected} rows, expected 1"
        )));
    }
    Ok(())
}

#[async_trait]
impl ArticleRepository for SqliteArticleRepository {
    async fn fetch(
        &self,
        cursor: Option<&str>,
        limit: u32,
    ) -> DomainResult<(Vec<Article>, Option<String>)> {
        let boundary = ArticleCursor::parse(cursor)?;

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT_ARTICLES);
        if let Some(boundary) = boundary {
            builder.push(" WHERE ar.created_at > ");
            builder.push_bind(boundary.created_at());
        }
        builder.push(" ORDER BY ar.created_at ASC LIMIT ");
        builder.push_bind(i64::from(limit));

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(log_sqlx("article.fetch"))?;

        let articles: Vec<Article> = rows.into_iter().map(Article::from).collect();
        let next_cursor = ArticleCursor::after_page(&articles, limit).map(|c| c.encode());
        tracing::debug!(count = articles.len(), limit, has_more = next_cursor.is_some(), "fetched articles");

        Ok((articles, next_cursor))
    }

    async fn get_by_id(&self, id: ArticleId) -> DomainResult<Article> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT_ARTICLES);
        builder.push(" WHERE ar.id = ");
        builder.push_bind(i64::from(id));

        self.find_one(builder)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("article {id} not found")))
    }

    async fn get_by_title(&self, title: &str) -> DomainResult<Article> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT_ARTICLES);
        builder.push(" WHERE ar.title = ");
        builder.push_bind(title.to_owned());

        self.find_one(builder)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("article titled {title:?} not found")))
    }

    async fn store(&self, article: NewArticle) -> DomainResult<ArticleId> {
        let NewArticle {
            title,
            content,
            author_id,
            created_at,
            updated_at,
        } = article;

        let result = sqlx::query(
            "INSERT INTO article (title, content, author_id, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(title)
        .bind(content)
        .bind(i64::from(author_id))
        .bind(created_at)
        .bind(updated_at)
        .execute(&*self.pool)
        .await
        .map_err(log_sqlx("article.store"))?;

        Ok(ArticleId(result.last_insert_rowid()))
    }

    async fn update(&self, update: &ArticleUpdate) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE article SET title = ?, content = ?, author_id = ?, updated_at = ? WHERE id = ?",
        )
        .bind(update.title.as_str())
        .bind(update.content.as_str())
        .bind(i64::from(update.author_id))
        .bind(update.updated_at)
        .bind(i64::from(update.id))
        .execute(&*self.pool)
        .await
        .map_err(log_sqlx("article.update"))?;

        ensure_single_row(result.rows_affected(), "update")
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM article WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(log_sqlx("article.delete"))?;

        ensure_single_row(result.rows_affected(), "delete")
    }
}
