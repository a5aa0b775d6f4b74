use crate::domain::author::{entity::Author, value_objects::AuthorId};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// A missing author is `Ok(None)`, not an error.
    async fn get_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>>;
}
