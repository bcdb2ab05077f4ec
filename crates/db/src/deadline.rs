//! Caller-supplied deadlines for store operations.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use crate::error::RepoError;

/// An absolute point in time by which a store call must complete.
///
/// Every repository operation takes one. When it passes, the in-flight query
/// future is dropped (cancelling it) and [`RepoError::DeadlineExceeded`] is
/// returned.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
    budget: Duration,
}

impl Deadline {
    /// A deadline `budget` from now.
    pub fn after(budget: Duration) -> Self {
        Self {
            at: Instant::now() + budget,
            budget,
        }
    }

    /// Time left before the deadline, zero once it has passed.
    pub fn remaining(&self) -> Duration {
        self.at.saturating_duration_since(Instant::now())
    }

    pub fn is_expired(&self) -> bool {
        self.remaining().is_zero()
    }

    /// Drive a store future to completion or until the deadline passes.
    ///
    /// A deadline that has already passed fails without polling `fut`.
    pub(crate) async fn run<T, F>(self, fut: F) -> Result<T, RepoError>
    where
        F: Future<Output = Result<T, RepoError>>,
    {
        if self.is_expired() {
            return Err(RepoError::DeadlineExceeded(self.budget));
        }
        match tokio::time::timeout_at(self.at, fut).await {
            Ok(result) => result,
            Err(_) => Err(RepoError::DeadlineExceeded(self.budget)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn completes_within_budget() {
        let deadline = Deadline::after(Duration::from_secs(5));
        let value = deadline.run(async { Ok::<_, RepoError>(7) }).await.unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_future_exceeds_deadline() {
        let deadline = Deadline::after(Duration::from_millis(50));
        let result = deadline
            .run(async {
                tokio::time::sleep(Duration::from_secs(10)).await;
                Ok::<_, RepoError>(())
            })
            .await;
        assert_matches!(result, Err(RepoError::DeadlineExceeded(d)) if d == Duration::from_millis(50));
    }

    #[tokio::test]
    async fn expired_deadline_never_polls_the_store() {
        let deadline = Deadline::after(Duration::ZERO);
        let result = deadline
            .run(async {
                if deadline.is_expired() {
                    panic!("store future must not be polled");
                }
                Ok::<(), RepoError>(())
            })
            .await;
        assert_matches!(result, Err(RepoError::DeadlineExceeded(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn remaining_reaches_zero() {
        let deadline = Deadline::after(Duration::from_millis(10));
        assert!(!deadline.is_expired());
        tokio::time::advance(Duration::from_millis(20)).await;
        assert!(deadline.is_expired());
        assert_eq!(deadline.remaining(), Duration::ZERO);
    }
}
