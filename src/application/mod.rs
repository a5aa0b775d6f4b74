pub mod articles;
pub mod authors;
pub mod context;
pub mod dto;
pub mod error;
pub mod ports;
pub mod services;

pub use context::RequestContext;
pub use error::{ApplicationError, ApplicationResult};
