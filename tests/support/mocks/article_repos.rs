// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

use newsroom_core::domain::article::{
    Article, ArticleCursor, ArticleId, ArticleRepository, ArticleUpdate, NewArticle,
};
use newsroom_core::domain::author::Author;
use newsroom_core::domain::errors::{DomainError, DomainResult};

/* -------------------------------- InMemoryArticleRepo -------------------------------- */

/// Vec-backed article repository following the SQLite contract.
///
/// With `yield_after_lookup` set, `get_by_id` and `get_by_title` hand control
/// back to the scheduler after reading, which lets two concurrent use-case
/// calls interleave between their guard read and their write.
#[derive(Default)]
pub struct InMemoryArticleRepo {
    articles: Mutex<Vec<Article>>,
    pub yield_after_lookup: bool,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interleaving() -> Self {
        Self::interleaving_with(Vec::new())
    }

    pub fn interleaving_with(articles: Vec<Article>) -> Self {
        Self {
            articles: Mutex::new(articles),
            yield_after_lookup: true,
        }
    }

    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            articles: Mutex::new(articles),
            yield_after_lookup: false,
        }
    }

    pub fn titles(&self) -> Vec<String> {
        self.articles
            .lock()
            .expect("mutex poisoned")
            .iter()
            .map(|a| a.title.clone())
            .collect()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepo {
    async fn fetch(
        &self,
        cursor: Option<&str>,
        limit: u32,
    ) -> DomainResult<(Vec<Article>, Option<String>)> {
        let boundary = ArticleCursor::parse(cursor)?;
        let mut page: Vec<Article> = self
            .articles
            .lock()
            .expect("mutex poisoned")
            .iter()
            .filter(|a| boundary.is_none_or(|b| a.created_at > b.created_at()))
            .cloned()
            .collect();
        page.sort_by_key(|a| a.created_at);
        page.truncate(limit as usize);
        let next = ArticleCursor::after_page(&page, limit).map(|c| c.encode());
        Ok((page, next))
    }

    async fn get_by_id(&self, id: ArticleId) -> DomainResult<Article> {
        let found = self
            .articles
            .lock()
            .expect("mutex poisoned")
            .iter()
            .find(|a| a.id == id)
            .cloned();
        if self.yield_after_lookup {
            tokio::task::yield_now().await;
        }
        found.ok_or_else(|| DomainError::NotFound(format!("article {id} not found")))
    }

    async fn get_by_title(&self, title: &str) -> DomainResult<Article> {
        let found = self
            .articles
            .lock()
            .expect("mutex poisoned")
            .iter()
            .find(|a| a.title == title)
            .cloned();
        if self.yield_after_lookup {
            tokio::task::yield_now().await;
        }
        found.ok_or_else(|| DomainError::NotFound(format!("article titled {title:?} not found")))
    }

    async fn store(&self, article: NewArticle) -> DomainResult<ArticleId> {
        let mut articles = self.articles.lock().expect("mutex poisoned");
        let id = ArticleId(articles.iter().map(|a| a.id.0).max().unwrap_or(0) + 1);
        articles.push(Article {
            id,
            title: article.title,
            content: article.content,
            author: Author {
                id: article.author_id,
                name: format!("author {}", article.author_id),
                created_at: article.created_at,
                updated_at: article.created_at,
            },
            created_at: article.created_at,
            updated_at: article.updated_at,
        });
        Ok(id)
    }

    async fn update(&self, update: &ArticleUpdate) -> DomainResult<()> {
        let mut articles = self.articles.lock().expect("mutex poisoned");
        let article = articles
            .iter_mut()
            .find(|a| a.id == update.id)
            .ok_or_else(|| DomainError::Integrity("update affected 0 rows, expected 1".into()))?;
        article.title = update.title.clone();
        article.content = update.content.clone();
        article.author.id = update.author_id;
        article.updated_at = update.updated_at;
        Ok(())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut articles = self.articles.lock().expect("mutex poisoned");
        let before = articles.len();
        articles.retain(|a| a.id != id);
        if articles.len() == before {
            return Err(DomainError::Integrity("delete affected 0 rows, expected 1".into()));
        }
        Ok(())
    }
}

/* -------------------------------- SlowArticleRepo -------------------------------- */

/// Every call sleeps for `delay` before answering, to drive timeouts.
pub struct SlowArticleRepo {
    pub delay: Duration,
}

impl SlowArticleRepo {
    async fn stall(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

#[async_trait]
impl ArticleRepository for SlowArticleRepo {
    async fn fetch(
        &self,
        _cursor: Option<&str>,
        _limit: u32,
    ) -> DomainResult<(Vec<Article>, Option<String>)> {
        self.stall().await;
        Ok((vec![], None))
    }

    async fn get_by_id(&self, id: ArticleId) -> DomainResult<Article> {
        self.stall().await;
        Err(DomainError::NotFound(format!("article {id} not found")))
    }

    async fn get_by_title(&self, title: &str) -> DomainResult<Article> {
        self.stall().await;
        Err(DomainError::NotFound(format!("article titled {title:?} not found")))
    }

    async fn store(&self, _article: NewArticle) -> DomainResult<ArticleId> {
        self.stall().await;
        Ok(ArticleId(1))
    }

    async fn update(&self, _update: &ArticleUpdate) -> DomainResult<()> {
        self.stall().await;
        Ok(())
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        self.stall().await;
        Ok(())
    }
}
