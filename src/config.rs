//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "console-stopwatch")]
#[command(about = "A console stopwatch: B to Begin, P to Pause, C to Clear, E to Exit")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Enable verbose logging (written to stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Real time between ticks in milliseconds; every tick adds one second
    #[arg(long, default_value = "1000", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_millis: u64,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the tick period as a duration
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_tick_once_per_second() {
        let config = Config::try_parse_from(["console-stopwatch"]).unwrap();
        assert_eq!(config.tick_period(), Duration::from_secs(1));
        assert_eq!(config.log_level(), "warn");
    }

    #[test]
    fn verbose_and_tick_overrides() {
        let config =
            Config::try_parse_from(["console-stopwatch", "-v", "--tick-millis", "250"]).unwrap();
        assert_eq!(config.tick_period(), Duration::from_millis(250));
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn rejects_zero_tick() {
        assert!(Config::try_parse_from(["console-stopwatch", "--tick-millis", "0"]).is_err());
    }
}
