use super::ArticleUseCase;
use crate::application::{
    context::RequestContext,
    dto::{ArticleDto, CursorPage},
    error::{ApplicationError, ApplicationResult},
};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Default)]
pub struct FetchArticlesQuery {
    pub cursor: Option<String>,
    /// Zero selects `DEFAULT_PAGE_SIZE`.
    pub limit: u32,
}

impl ArticleUseCase {
    pub async fn fetch(
        &self,
        ctx: &RequestContext,
        query: FetchArticlesQuery,
    ) -> ApplicationResult<CursorPage<ArticleDto>> {
        let limit = if query.limit == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            query.limit
        };

        let (articles, next_cursor) = ctx
            .run("articles.fetch", async {
                self.articles
                    .fetch(query.cursor.as_deref(), limit)
                    .await
                    .map_err(ApplicationError::from)
            })
            .await?;

        let items = articles.into_iter().map(Into::into).collect();
        Ok(CursorPage::new(items, next_cursor))
    }
}
