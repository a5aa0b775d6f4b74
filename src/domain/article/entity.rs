// src/domain/article/entity.rs
use crate::domain::article::value_objects::ArticleId;
use crate::domain::author::{Author, AuthorId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub content: String,
    /// Snapshot of the author joined at fetch time.
    pub author: Author,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub author_id: AuthorId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewArticle {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: AuthorId,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Full-row replacement of the mutable article columns.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: String,
    pub content: String,
    pub author_id: AuthorId,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    #[must_use]
    pub fn new(
        id: ArticleId,
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: AuthorId,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            author_id,
            updated_at,
        }
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }
}

impl From<&Article> for ArticleUpdate {
    fn from(article: &Article) -> Self {
        Self::new(
            article.id,
            article.title.clone(),
            article.content.clone(),
            article.author.id,
            article.updated_at,
        )
    }
}
