//! Console Stopwatch - an elapsed-time counter driven from the terminal
//!
//! This is the main entry point for the console-stopwatch application.

use tokio::io::{self, BufReader};
use tracing::{error, info, warn};

use console_stopwatch::{
    config::Config,
    console::run_session,
    state::Stopwatch,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so stdout carries only the console surface
    tracing_subscriber::fmt()
        .with_env_filter(format!("console_stopwatch={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting console-stopwatch v1.0.0");
    info!("Configuration: tick={}ms", config.tick_millis);

    let stopwatch = Stopwatch::with_tick_period(config.tick_period());

    // Every notification and tick is printed on its own line
    stopwatch.subscribe(|event| println!("{}", event));

    let mut stdout = io::stdout();
    let session = run_session(&stopwatch, BufReader::new(io::stdin()), &mut stdout);
    let signal = async {
        if let Err(e) = shutdown_signal().await {
            warn!("Signal handling unavailable: {}", e);
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        result = session => {
            match result {
                Ok(end) => info!("Session ended: {:?}", end),
                Err(e) => {
                    error!("Console session failed: {:#}", e);
                    stopwatch.pause();
                    return Err(e);
                }
            }
        }
        _ = signal => {
            stopwatch.pause();
            info!("Shutdown signal received");
            // A pending stdin read would otherwise hold the runtime open
            std::process::exit(0);
        }
    }

    info!("Shutdown complete");
    Ok(())
}
