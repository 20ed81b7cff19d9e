//! Ticker background task

use std::{sync::Arc, time::Duration};
use tokio::time::sleep;
use tracing::debug;

use super::CancellationToken;
use crate::state::{stopwatch::Shared, TimerEvent};

/// Elapsed time added by every tick, independent of the tick period
pub const TICK_STEP: Duration = Duration::from_secs(1);

/// Result of one ticker cycle, decided under the state lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickOutcome {
    /// The handle was signaled; the ticker must exit
    Cancelled,
    /// Timer is idle but this ticker was not cancelled yet; count nothing
    Skipped,
    Advanced(Duration),
}

/// Background task that adds one second per period until cancelled
pub(crate) async fn ticker_task(
    shared: Arc<Shared>,
    mut token: CancellationToken,
    period: Duration,
    run_id: u64,
) {
    debug!("Ticker {} started with period {:?}", run_id, period);

    loop {
        tokio::select! {
            _ = sleep(period) => {}
            _ = token.cancelled() => {
                debug!("Ticker {} cancelled while sleeping", run_id);
                break;
            }
        }

        match shared.record_tick(&token) {
            TickOutcome::Cancelled => {
                debug!("Ticker {} observed cancellation after sleeping", run_id);
                break;
            }
            TickOutcome::Skipped => {
                debug!("Ticker {} skipped increment, timer inactive", run_id);
            }
            TickOutcome::Advanced(elapsed) => {
                shared.listeners.emit(&TimerEvent::Tick(elapsed));
            }
        }
    }

    debug!("Ticker {} exited", run_id);
}
