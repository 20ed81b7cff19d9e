//! Elapsed time formatting

use std::time::Duration;

/// Format a duration as `HH:MM:SS`; hours keep growing past 99
pub fn format_elapsed(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
