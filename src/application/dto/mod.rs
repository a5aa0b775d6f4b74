mod articles;
mod authors;
mod pagination;

pub use articles::ArticleDto;
pub use authors::AuthorDto;
pub use pagination::CursorPage;
