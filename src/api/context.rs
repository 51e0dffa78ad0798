/*
 * Copyright (c) 2026 The koillection-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::errors::{CancelReason, KoillectionError};
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Carries cancellation and an optional deadline into every operation.
///
/// Cloning shares the same cancellation token; [`Context::child`] derives a
/// context that is cancelled along with its parent but can also be cancelled
/// on its own.
#[derive(Debug, Clone, Default)]
pub struct Context {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl Context {
    /// A context that is never cancelled and has no deadline
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: Some(deadline),
        }
    }

    /// Uses an existing token, e.g. one shared with other parts of the caller
    pub fn from_token(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    /// Derives a context cancelled whenever this one is, with the same deadline
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    /// Same cancellation, tighter deadline
    pub fn timeout(&self, timeout: Duration) -> Self {
        let deadline = Instant::now() + timeout;
        Self {
            token: self.token.child_token(),
            deadline: Some(self.deadline.map_or(deadline, |d| d.min(deadline))),
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Fails fast if the context is already done
    pub(crate) fn check(&self) -> Result<(), KoillectionError> {
        if self.token.is_cancelled() {
            return Err(KoillectionError::Cancelled {
                reason: CancelReason::Cancelled,
            });
        }
        if self.deadline.is_some_and(|d| d <= Instant::now()) {
            return Err(KoillectionError::Cancelled {
                reason: CancelReason::DeadlineExceeded,
            });
        }
        Ok(())
    }

    /// Runs `fut` until it completes or the context is cancelled or expires.
    /// Losing the race drops `fut`, which aborts any in-flight request.
    pub(crate) async fn run<F, T>(&self, fut: F) -> Result<T, KoillectionError>
    where
        F: Future<Output = Result<T, KoillectionError>>,
    {
        self.check()?;
        let deadline = self.deadline;
        let expired = async move {
            match deadline {
                Some(d) => tokio::time::sleep_until(d).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(KoillectionError::Cancelled {
                reason: CancelReason::Cancelled,
            }),
            _ = expired => Err(KoillectionError::Cancelled {
                reason: CancelReason::DeadlineExceeded,
            }),
            res = fut => res,
        }
    }
}
