// src/domain/article/cursor.rs
use crate::domain::article::entity::Article;
use crate::domain::errors::{DomainError, DomainResult};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, SecondsFormat, Utc};

/// Exclusive lower bound on `created_at` for the next listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleCursor {
    created_at: DateTime<Utc>,
}

impl ArticleCursor {
    #[must_use]
    pub const fn new(created_at: DateTime<Utc>) -> Self {
        Self { created_at }
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn encode(&self) -> String {
        let raw = self.created_at.to_rfc3339_opts(SecondsFormat::Nanos, true);
        URL_SAFE_NO_PAD.encode(raw.as_bytes())
    }

    pub fn decode(token: &str) -> DomainResult<Self> {
        let bytes = URL_SAFE_NO_PAD.decode(token).map_err(|_| invalid_token())?;
        let raw = String::from_utf8(bytes).map_err(|_| invalid_token())?;
        let created_at = DateTime::parse_from_rfc3339(&raw)
            .map_err(|_| invalid_token())?
            .with_timezone(&Utc);
        Ok(Self::new(created_at))
    }

    /// An absent or empty token means "start from the beginning" and is never
    /// decoded.
    pub fn parse(token: Option<&str>) -> DomainResult<Option<Self>> {
        match token {
            None | Some("") => Ok(None),
            Some(token) => Self::decode(token).map(Some),
        }
    }

    /// Cursor following `page`, present only when the page came back full.
    #[must_use]
    pub fn after_page(page: &[Article], limit: u32) -> Option<Self> {
        if page.len() != limit as usize {
            return None;
        }
        page.last().map(|last| Self::new(last.created_at))
    }
}

fn invalid_token() -> DomainError {
    DomainError::BadInput("invalid cursor token".into())
}
