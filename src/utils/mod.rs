//! Utility functions module
//!
//! This module contains helpers shared by the library and the binary.

pub mod format;
pub mod signals;

// Re-export main functions
pub use format::format_elapsed;
pub use signals::shutdown_signal;
