//! Stopwatch state machine driving the ticker task

use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};
use tracing::{debug, info, warn};

use super::{Listeners, TimerEvent, TimerSnapshot, TimerState, TimerStatus};
use crate::tasks::{ticker_task, CancellationHandle, CancellationToken, TickOutcome, TICK_STEP};

/// State shared between the stopwatch and its ticker
#[derive(Debug)]
pub(crate) struct Shared {
    state: Mutex<TimerState>,
    pub(crate) listeners: Listeners,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, TimerState> {
        self.state.lock().unwrap_or_else(|poisoned| {
            warn!("Timer state lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Apply one tick. Cancellation is checked under the same lock `pause`
    /// signals under, so a stale ticker never counts.
    pub(crate) fn record_tick(&self, token: &CancellationToken) -> TickOutcome {
        let mut state = self.lock();

        if token.is_cancelled() {
            return TickOutcome::Cancelled;
        }
        if !state.status.is_running() {
            return TickOutcome::Skipped;
        }

        state.elapsed += TICK_STEP;
        TickOutcome::Advanced(state.elapsed)
    }
}

/// Elapsed-time counter with start, pause and clear transitions.
///
/// Every transition emits a [`TimerEvent`] to the registered listeners after
/// the state lock is released. `start` and `clear` spawn onto the ambient
/// tokio runtime and panic when called outside one.
#[derive(Debug)]
pub struct Stopwatch {
    shared: Arc<Shared>,
    tick_period: Duration,
}

impl Stopwatch {
    /// Create an idle stopwatch that ticks once per second
    pub fn new() -> Self {
        Self::with_tick_period(TICK_STEP)
    }

    /// Create an idle stopwatch whose ticker wakes every `tick_period`.
    /// Each tick still adds one second of elapsed time.
    pub fn with_tick_period(tick_period: Duration) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(TimerState::default()),
                listeners: Listeners::new(),
            }),
            tick_period,
        }
    }

    /// Register a listener; listeners run synchronously in registration order
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&TimerEvent) + Send + Sync + 'static,
    {
        self.shared.listeners.register(Arc::new(listener));
    }

    /// Begin counting. Redundant starts emit `AlreadyActive` and change nothing.
    pub fn start(&self) -> TimerEvent {
        let mut state = self.shared.lock();

        if state.status.is_running() {
            drop(state);
            debug!("Start ignored, timer already running");
            return self.notify(TimerEvent::AlreadyActive);
        }

        let (handle, token) = CancellationHandle::pair();
        state.status = TimerStatus::Running;
        state.cancel = Some(handle);
        state.run_id += 1;
        let run_id = state.run_id;
        drop(state);

        tokio::spawn(ticker_task(
            Arc::clone(&self.shared),
            token,
            self.tick_period,
            run_id,
        ));

        info!("Timer started (run {})", run_id);
        self.notify(TimerEvent::Started)
    }

    /// Stop counting. Returns without waiting for the ticker to exit.
    pub fn pause(&self) -> TimerEvent {
        let mut state = self.shared.lock();

        if !state.status.is_running() {
            drop(state);
            debug!("Pause ignored, timer not running");
            return self.notify(TimerEvent::NotActive);
        }

        let run_id = state.run_id;
        match state.deactivate() {
            Some(handle) => handle.cancel(),
            None => warn!("Running timer had no ticker handle (run {})", run_id),
        }
        let elapsed = state.elapsed;
        drop(state);

        info!("Timer paused at {:?} (run {})", elapsed, run_id);
        self.notify(TimerEvent::Paused)
    }

    /// Pause, reset elapsed time to zero, then start again
    pub fn clear(&self) -> TimerEvent {
        self.pause();

        self.shared.lock().elapsed = Duration::ZERO;
        info!("Timer cleared");
        self.notify(TimerEvent::Cleared);

        self.start();
        TimerEvent::Cleared
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        self.shared.lock().snapshot()
    }

    pub fn elapsed(&self) -> Duration {
        self.shared.lock().elapsed
    }

    pub fn status(&self) -> TimerStatus {
        self.shared.lock().status
    }

    pub fn tick_period(&self) -> Duration {
        self.tick_period
    }

    fn notify(&self, event: TimerEvent) -> TimerEvent {
        self.shared.listeners.emit(&event);
        event
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Stopwatch {
    fn drop(&mut self) {
        if let Some(handle) = self.shared.lock().deactivate() {
            debug!("Stopwatch dropped, cancelling live ticker");
            handle.cancel();
        }
    }
}
