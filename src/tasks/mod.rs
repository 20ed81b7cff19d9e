//! Background tasks module
//!
//! This module contains the ticker that runs alongside the command loop and
//! the cancellation pair used to stop it.

pub mod cancellation;
pub mod ticker;

// Re-export main types
pub use cancellation::{CancellationHandle, CancellationToken};
pub use ticker::TICK_STEP;
pub(crate) use ticker::{ticker_task, TickOutcome};
