//! Console Stopwatch - an elapsed-time counter driven from the terminal
//!
//! This library provides a stopwatch state machine whose running time is
//! counted by a cancellable background ticker, plus the console session
//! that drives it with single-letter commands.

pub mod config;
pub mod console;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use console::{run_session, Command, SessionEnd};
pub use state::{Stopwatch, TimerEvent, TimerSnapshot, TimerStatus};
pub use utils::signals::shutdown_signal;
