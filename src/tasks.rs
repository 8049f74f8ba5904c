use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::limiters::Limiters;

/// Handle to the running sweep. Dropping it leaves the task running
/// for the life of the runtime; call [`stop`](Self::stop) to cancel
/// (tests and hot-reloads should, so timers don't leak across runs).
pub struct SweepTask {
    handle: JoinHandle<()>,
}

impl SweepTask {
    /// Cancel the sweep task.
    pub fn stop(self) {
        self.handle.abort();
    }
}

/// Spawn the periodic ledger sweep over the shared limiters.
///
/// Sleeps `interval` between passes, then evicts fully-expired keys
/// from every limiter. Keys with live attempts are untouched, so a
/// sweep never changes an admission decision.
pub fn start_sweep(limiters: Arc<Limiters>, interval: Duration) -> SweepTask {
    let handle = tokio::spawn(async move {
        loop {
            tokio::time::sleep(interval).await;
            let evicted = limiters.cleanup_all();
            if evicted > 0 {
                log::info!("[task] Cleaned up {} idle rate-limit keys", evicted);
            }
        }
    });
    SweepTask { handle }
}
