use std::sync::Arc;

use crate::{
    application::{
        context::RequestContext,
        dto::AuthorDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::author::{AuthorId, AuthorRepository},
};

pub struct AuthorUseCase {
    authors: Arc<dyn AuthorRepository>,
}

impl AuthorUseCase {
    #[must_use]
    pub fn new(authors: Arc<dyn AuthorRepository>) -> Self {
        Self { authors }
    }

    /// `Ok(None)` when no author has this id.
    pub async fn get_by_id(
        &self,
        ctx: &RequestContext,
        id: i64,
    ) -> ApplicationResult<Option<AuthorDto>> {
        let author = ctx
            .run("authors.get_by_id", async {
                self.authors
                    .get_by_id(AuthorId::from(id))
                    .await
                    .map_err(ApplicationError::from)
            })
            .await?;
        Ok(author.map(Into::into))
    }
}
