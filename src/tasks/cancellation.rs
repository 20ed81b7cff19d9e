//! Cooperative cancellation for the ticker task

use tokio::sync::watch;

/// Owning side of a cancellation pair, held by the stopwatch while a ticker runs.
///
/// `cancel` consumes the handle, so one ticker can be signaled at most once.
/// Dropping the handle without calling `cancel` cancels as well.
#[derive(Debug)]
pub struct CancellationHandle {
    tx: watch::Sender<bool>,
}

/// Observing side, moved into the ticker task
#[derive(Debug, Clone)]
pub struct CancellationToken {
    rx: watch::Receiver<bool>,
}

impl CancellationHandle {
    pub fn pair() -> (Self, CancellationToken) {
        let (tx, rx) = watch::channel(false);
        (Self { tx }, CancellationToken { rx })
    }

    /// Request the paired task to stop. Never blocks and never fails; the task
    /// may already be gone.
    pub fn cancel(self) {
        self.tx.send_replace(true);
    }
}

impl CancellationToken {
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow() || self.rx.has_changed().is_err()
    }

    /// Resolve once cancellation is requested or the handle is dropped
    pub async fn cancelled(&mut self) {
        // Err means the handle was dropped, which counts as cancelled
        let _ = self.rx.wait_for(|cancelled| *cancelled).await;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn fresh_token_is_not_cancelled() {
        let (_handle, token) = CancellationHandle::pair();
        assert!(!token.is_cancelled());
    }

    #[test]
    fn cancel_is_seen_by_every_clone() {
        let (handle, token) = CancellationHandle::pair();
        let other = token.clone();
        handle.cancel();
        assert!(token.is_cancelled());
        assert!(other.is_cancelled());
    }

    #[test]
    fn dropping_the_handle_cancels() {
        let (handle, token) = CancellationHandle::pair();
        drop(handle);
        assert!(token.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_wakes_a_waiting_task() {
        let (handle, mut token) = CancellationHandle::pair();
        let waiter = tokio::spawn(async move { token.cancelled().await });

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(!waiter.is_finished());

        handle.cancel();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should observe cancellation")
            .unwrap();
    }
}
