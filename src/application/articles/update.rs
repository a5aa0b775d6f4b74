use super::ArticleUseCase;
use crate::{
    application::{
        context::RequestContext,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleId, ArticleUpdate},
        author::AuthorId,
    },
};

#[derive(Debug, Clone)]
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
}

impl ArticleUseCase {
    pub async fn update(
        &self,
        ctx: &RequestContext,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<()> {
        let update = ArticleUpdate::new(
            ArticleId::from(command.id),
            command.title,
            command.content,
            AuthorId::from(command.author_id),
            self.clock.now(),
        );

        ctx.run("articles.update", async {
            self.articles
                .update(&update)
                .await
                .map_err(ApplicationError::from)
        })
        .await
    }
}
