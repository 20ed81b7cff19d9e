//! State management module
//!
//! This module contains the stopwatch state machine, the data it guards and
//! the notifications it emits.

pub mod events;
pub mod stopwatch;
pub mod timer_state;

// Re-export main types
pub use events::{Listener, Listeners, TimerEvent};
pub use stopwatch::Stopwatch;
pub use timer_state::{TimerSnapshot, TimerStatus};
pub(crate) use timer_state::TimerState;
