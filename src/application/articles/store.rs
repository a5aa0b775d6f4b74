// src/application/articles/store.rs
use super::ArticleUseCase;
use crate::{
    application::{
        context::RequestContext,
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::NewArticle, author::AuthorId, errors::DomainError},
};

#[derive(Debug, Clone)]
pub struct StoreArticleCommand {
    pub title: String,
    pub content: String,
    pub author_id: i64,
}

impl ArticleUseCase {
    pub async fn store(
        &self,
        ctx: &RequestContext,
        command: StoreArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ctx.run("articles.store", async move {
            match self.articles.get_by_title(&command.title).await {
                Ok(existing) => {
                    tracing::debug!(id = %existing.id, title = %existing.title, "duplicate title rejected");
                    return Err(ApplicationError::conflict(format!(
                        "article titled {:?} already exists",
                        existing.title
                    )));
                }
                Err(DomainError::NotFound(_)) => {}
                Err(other) => return Err(other.into()),
            }

            let new_article = NewArticle::new(
                command.title,
                command.content,
                AuthorId::from(command.author_id),
                self.clock.now(),
            );
            let id = self.articles.store(new_article).await?;
            let stored = self.articles.get_by_id(id).await?;
            Ok(ArticleDto::from(stored))
        })
        .await
    }
}
