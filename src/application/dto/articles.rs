// src/application/dto/articles.rs
use super::authors::AuthorDto;
use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: AuthorDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title,
            content: article.content,
            author: article.author.into(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
