// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of the timestamps stamped onto new and updated articles.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
