use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Returns the page after `cursor` in creation order and the token for
    /// the next page. `None` and `Some("")` both start from the beginning.
    async fn fetch(
        &self,
        cursor: Option<&str>,
        limit: u32,
    ) -> DomainResult<(Vec<Article>, Option<String>)>;
    async fn get_by_id(&self, id: ArticleId) -> DomainResult<Article>;
    async fn get_by_title(&self, title: &str) -> DomainResult<Article>;
    /// Inserts the article and returns its generated identity.
    async fn store(&self, article: NewArticle) -> DomainResult<ArticleId>;
    async fn update(&self, update: &ArticleUpdate) -> DomainResult<()>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}
