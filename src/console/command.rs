//! Console command parsing

use std::{fmt, str::FromStr};

use crate::state::{Stopwatch, TimerEvent};

/// Single-letter command accepted by the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Begin,
    Pause,
    Clear,
    Exit,
}

/// Input that is not one of `B`, `P`, `C` or `E`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidOption(pub String);

impl fmt::Display for InvalidOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Invalid option. Use B, P, C, or E.")
    }
}

impl std::error::Error for InvalidOption {}

impl FromStr for Command {
    type Err = InvalidOption;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_uppercase().as_str() {
            "B" => Ok(Command::Begin),
            "P" => Ok(Command::Pause),
            "C" => Ok(Command::Clear),
            "E" => Ok(Command::Exit),
            _ => Err(InvalidOption(input.to_string())),
        }
    }
}

impl Command {
    /// Drive the stopwatch; `Exit` pauses it before the session ends
    pub fn apply(self, stopwatch: &Stopwatch) -> TimerEvent {
        match self {
            Command::Begin => stopwatch.start(),
            Command::Pause | Command::Exit => stopwatch.pause(),
            Command::Clear => stopwatch.clear(),
        }
    }
}
