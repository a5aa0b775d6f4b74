// src/application/articles/delete.rs
use super::ArticleUseCase;
use crate::{
    application::{
        context::RequestContext,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleId, errors::DomainError},
};

impl ArticleUseCase {
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> ApplicationResult<()> {
        let id = ArticleId::from(id);

        ctx.run("articles.delete", async {
            match self.articles.get_by_id(id).await {
                Ok(_) => {}
                Err(DomainError::NotFound(_)) => {
                    tracing::debug!(%id, "delete of missing article rejected");
                    return Err(ApplicationError::not_found(format!("article {id} not found")));
                }
                Err(other) => return Err(other.into()),
            }

            self.articles.delete(id).await?;
            Ok(())
        })
        .await
    }
}
