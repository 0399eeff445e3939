//! Expiry Sweep Task
//!
//! Background task that periodically removes expired cache entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedCache;

// == Cleanup Task ==
/// Handle to a running sweep task.
///
/// Nothing is swept in the background until `start` is called, and the task
/// runs until `stop` is called or the handle is dropped.
#[derive(Debug)]
pub struct CleanupTask {
    handle: JoinHandle<()>,
}

impl CleanupTask {
    /// Starts sweeping `cache` every `interval`.
    pub fn start(cache: SharedCache, interval: Duration) -> Self {
        Self {
            handle: spawn_cleanup_task(cache, interval),
        }
    }

    /// Stops the task. A sweep already holding the lock finishes first.
    pub fn stop(self) {
        self.handle.abort();
        info!("Cache sweep task stopped");
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for CleanupTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Spawns a task that sweeps expired entries every `interval`, forever.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_cleanup_task(cache: SharedCache, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting cache sweep task with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.write().await.cleanup();

            if removed > 0 {
                info!("Cache sweep: removed {} expired entries", removed);
            } else {
                debug!("Cache sweep: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{shared, ManualClock, ResponseCache};
    use serde_json::json;
    use std::sync::Arc;

    fn manual_shared() -> (SharedCache, ManualClock) {
        let clock = ManualClock::new(0);
        let cache = ResponseCache::with_clock(100, 60_000, Arc::new(clock.clone()));
        (shared(cache), clock)
    }

    /// Lets the spawned task run after the paused clock moves.
    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_removes_expired_entries() {
        let (cache, clock) = manual_shared();
        cache.write().await.set_with_ttl("expire_soon", json!(1), 1_000);
        cache.write().await.set_with_ttl("long_lived", json!(2), 3_600_000);

        let task = CleanupTask::start(cache.clone(), Duration::from_secs(600));
        settle().await;

        clock.advance(1_001);
        tokio::time::advance(Duration::from_secs(600)).await;
        settle().await;

        {
            let guard = cache.read().await;
            assert!(!guard.contains_key("expire_soon"));
            assert!(guard.contains_key("long_lived"));
        }

        task.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_waits_for_interval() {
        let (cache, clock) = manual_shared();
        cache.write().await.set_with_ttl("k", json!(1), 1_000);

        let task = CleanupTask::start(cache.clone(), Duration::from_secs(600));
        settle().await;

        clock.advance(5_000);
        tokio::time::advance(Duration::from_secs(599)).await;
        settle().await;

        assert!(cache.read().await.contains_key("k"), "no sweep before the interval");

        task.stop();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_stopped() {
        let (cache, _) = manual_shared();

        let handle = spawn_cleanup_task(cache, Duration::from_secs(1));
        handle.abort();

        let result = handle.await;
        assert!(result.unwrap_err().is_cancelled());
    }

    #[tokio::test]
    async fn test_dropping_task_aborts_it() {
        let (cache, _) = manual_shared();
        let weak = Arc::downgrade(&cache);

        let task = CleanupTask::start(cache, Duration::from_secs(1));
        assert!(!task.is_finished());
        drop(task);
        settle().await;

        assert!(weak.upgrade().is_none(), "aborted task released the cache");
    }
}
