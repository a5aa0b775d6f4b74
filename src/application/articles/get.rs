use super::ArticleUseCase;
use crate::{
    application::{
        context::RequestContext,
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

impl ArticleUseCase {
    pub async fn get_by_id(&self, ctx: &RequestContext, id: i64) -> ApplicationResult<ArticleDto> {
        let article = ctx
            .run("articles.get_by_id", async {
                self.articles
                    .get_by_id(ArticleId::from(id))
                    .await
                    .map_err(ApplicationError::from)
            })
            .await?;
        Ok(article.into())
    }

    pub async fn get_by_title(
        &self,
        ctx: &RequestContext,
        title: &str,
    ) -> ApplicationResult<ArticleDto> {
        let article = ctx
            .run("articles.get_by_title", async {
                self.articles
                    .get_by_title(title)
                    .await
                    .map_err(ApplicationError::from)
            })
            .await?;
        Ok(article.into())
    }
}
