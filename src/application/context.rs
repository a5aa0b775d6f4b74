// src/application/context.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use std::{future::Future, time::Duration};
use tokio_util::sync::CancellationToken;

/// Per-call execution bound: a timeout plus a cancellation signal supplied by
/// the caller. Every use-case operation runs its store calls inside one
/// `RequestContext::run`.
#[derive(Debug, Clone)]
pub struct RequestContext {
    timeout: Duration,
    cancel: CancellationToken,
}

impl RequestContext {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            cancel: CancellationToken::new(),
        }
    }

    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub const fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Drives `operation` until it finishes, the timeout elapses or the token
    /// is cancelled. On expiry the future is dropped, which aborts any query
    /// still in flight.
    pub async fn run<F, T>(&self, name: &'static str, operation: F) -> ApplicationResult<T>
    where
        F: Future<Output = ApplicationResult<T>>,
    {
        tokio::select! {
            biased;
            () = self.cancel.cancelled() => {
                tracing::warn!(operation = name, "request cancelled");
                Err(ApplicationError::Cancelled)
            }
            outcome = tokio::time::timeout(self.timeout, operation) => match outcome {
                Ok(result) => result,
                Err(_) => {
                    tracing::warn!(
                        operation = name,
                        timeout_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
                        "request timed out"
                    );
                    Err(ApplicationError::Timeout(self.timeout))
                }
            },
        }
    }
}
