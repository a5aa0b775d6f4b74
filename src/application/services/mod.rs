// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{articles::ArticleUseCase, authors::AuthorUseCase, ports::ClockPort},
    domain::{article::ArticleRepository, author::AuthorRepository},
};

pub struct ApplicationServices {
    pub articles: Arc<ArticleUseCase>,
    pub authors: Arc<AuthorUseCase>,
}

impl ApplicationServices {
    #[must_use]
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        author_repo: Arc<dyn AuthorRepository>,
        clock: Arc<ClockPort>,
    ) -> Self {
        let articles = Arc::new(ArticleUseCase::new(article_repo, clock));
        let authors = Arc::new(AuthorUseCase::new(author_repo));
        Self { articles, authors }
    }
}
