// src/application/articles/service.rs
use std::sync::Arc;

use crate::{application::ports::ClockPort, domain::article::ArticleRepository};

/// Orchestrates article persistence and the invariants that span more than
/// one repository call.
///
/// The duplicate-title check in `store` and the existence check in `delete`
/// are plain reads followed by a write. They are not transactional: two
/// concurrent stores with the same title can both succeed, and a delete can
/// race another delete. Callers needing a hard guarantee must put a unique
/// constraint on `article.title`; the repository reports its violation as a
/// conflict.
pub struct ArticleUseCase {
    pub(super) articles: Arc<dyn ArticleRepository>,
    pub(super) clock: Arc<ClockPort>,
}

impl ArticleUseCase {
    #[must_use]
    pub fn new(articles: Arc<dyn ArticleRepository>, clock: Arc<ClockPort>) -> Self {
        Self { articles, clock }
    }
}
