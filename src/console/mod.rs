//! Console module
//!
//! This module contains command parsing and the interactive session loop.

pub mod command;
pub mod session;

// Re-export main types
pub use command::{Command, InvalidOption};
pub use session::{run_session, SessionEnd};
