//! Timer notifications and the listeners that receive them

use std::{
    fmt,
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use crate::utils::format_elapsed;

/// Notification emitted on every state transition and every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Started,
    AlreadyActive,
    Paused,
    NotActive,
    Cleared,
    Tick(Duration),
}

impl fmt::Display for TimerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerEvent::Started => f.write_str("Timer started."),
            TimerEvent::AlreadyActive => f.write_str("Timer is already active."),
            TimerEvent::Paused => f.write_str("Timer paused."),
            TimerEvent::NotActive => f.write_str("Timer is not active."),
            TimerEvent::Cleared => f.write_str("Timer cleared."),
            TimerEvent::Tick(elapsed) => write!(f, "Elapsed Time: {}", format_elapsed(*elapsed)),
        }
    }
}

pub type Listener = Arc<dyn Fn(&TimerEvent) + Send + Sync>;

/// Ordered set of synchronous listeners
#[derive(Default)]
pub struct Listeners {
    inner: Mutex<Vec<Listener>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, listener: Listener) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(listener);
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver `event` to every listener in registration order.
    ///
    /// The list is cloned first, so a listener may register further
    /// listeners without deadlocking; those only see later events.
    pub fn emit(&self, event: &TimerEvent) {
        let listeners = self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        if listeners.is_empty() {
            tracing::trace!("Dropping {:?}, no listeners registered", event);
            return;
        }

        for listener in &listeners {
            listener(event);
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners").field("count", &self.len()).finish()
    }
}
