//! Timer state structure and management

use std::{fmt, time::Duration};

use crate::tasks::CancellationHandle;

/// Whether the stopwatch is currently counting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerStatus {
    #[default]
    Idle,
    Running,
}

impl TimerStatus {
    pub fn is_running(self) -> bool {
        self == TimerStatus::Running
    }
}

impl fmt::Display for TimerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerStatus::Idle => f.write_str("idle"),
            TimerStatus::Running => f.write_str("running"),
        }
    }
}

/// Point-in-time copy of the stopwatch, safe to hand out of the lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimerSnapshot {
    pub status: TimerStatus,
    pub elapsed: Duration,
}

impl TimerSnapshot {
    pub fn is_active(&self) -> bool {
        self.status.is_running()
    }
}

/// Mutable timer state guarded by the stopwatch mutex
#[derive(Debug, Default)]
pub(crate) struct TimerState {
    pub status: TimerStatus,
    pub elapsed: Duration,
    /// Present exactly while a ticker is running for this timer
    pub cancel: Option<CancellationHandle>,
    /// Bumped on every start so log lines can tell tickers apart
    pub run_id: u64,
}

impl TimerState {
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            status: self.status,
            elapsed: self.elapsed,
        }
    }

    /// Stop counting and hand back the handle of the live ticker, if any
    pub fn deactivate(&mut self) -> Option<CancellationHandle> {
        self.status = TimerStatus::Idle;
        self.cancel.take()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn new_state_is_idle_at_zero() {
        let state = TimerState::default();
        assert_eq!(state.snapshot(), TimerSnapshot::default());
        assert!(!state.snapshot().is_active());
        assert_eq!(state.snapshot().elapsed, Duration::ZERO);
    }

    #[test]
    fn deactivate_takes_the_handle_once() {
        let (handle, token) = CancellationHandle::pair();
        let mut state = TimerState {
            status: TimerStatus::Running,
            cancel: Some(handle),
            ..Default::default()
        };

        let taken = state.deactivate();
        assert!(taken.is_some());
        assert_eq!(state.status, TimerStatus::Idle);
        assert!(state.deactivate().is_none());

        taken.unwrap().cancel();
        assert!(token.is_cancelled());
    }
}
