// src/application/articles/mod.rs
mod delete;
mod fetch;
mod get;
mod service;
mod store;
mod update;

pub use fetch::{DEFAULT_PAGE_SIZE, FetchArticlesQuery};
pub use service::ArticleUseCase;
pub use store::StoreArticleCommand;
pub use update::UpdateArticleCommand;
