//! Periodic playback polling
//!
//! A background task pulls the playback snapshot every interval and the
//! device list every N intervals, forwarding both to the session actor.
//! Failures are logged and forwarded as "nothing" (no snapshot, no
//! devices); they never stop the loop.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use playback_state::{Device, DeviceRegistry, PlaybackSnapshot, SnapshotSource};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, trace, warn};

/// What the poller observed
#[derive(Debug, Clone, PartialEq)]
pub enum PollEvent {
    Snapshot(Option<PlaybackSnapshot>),
    Devices(Vec<Device>),
}

/// Counters shared with the polling task
#[derive(Debug, Default)]
pub struct PollStats {
    polls: AtomicU64,
    snapshot_errors: AtomicU64,
    device_errors: AtomicU64,
}

impl PollStats {
    pub fn polls(&self) -> u64 {
        self.polls.load(Ordering::Relaxed)
    }

    pub fn snapshot_errors(&self) -> u64 {
        self.snapshot_errors.load(Ordering::Relaxed)
    }

    pub fn device_errors(&self) -> u64 {
        self.device_errors.load(Ordering::Relaxed)
    }
}

/// Handle to a running polling task
#[derive(Debug)]
pub struct SnapshotPoller {
    task_handle: JoinHandle<()>,
    shutdown_signal: Arc<AtomicBool>,
    stats: Arc<PollStats>,
}

impl SnapshotPoller {
    /// Start polling immediately; the first tick fetches devices too
    pub fn start<S>(
        source: Arc<S>,
        interval: Duration,
        device_refresh_every: u32,
        events: mpsc::Sender<PollEvent>,
    ) -> Self
    where
        S: SnapshotSource + DeviceRegistry + ?Sized + 'static,
    {
        let shutdown_signal = Arc::new(AtomicBool::new(false));
        let stats = Arc::new(PollStats::default());

        let task_shutdown_signal = Arc::clone(&shutdown_signal);
        let task_stats = Arc::clone(&stats);

        let task_handle = tokio::spawn(async move {
            Self::polling_loop(
                source,
                interval,
                device_refresh_every.max(1),
                events,
                task_shutdown_signal,
                task_stats,
            )
            .await;
        });

        Self {
            task_handle,
            shutdown_signal,
            stats,
        }
    }

    async fn polling_loop<S>(
        source: Arc<S>,
        interval: Duration,
        device_refresh_every: u32,
        events: mpsc::Sender<PollEvent>,
        shutdown_signal: Arc<AtomicBool>,
        stats: Arc<PollStats>,
    ) where
        S: SnapshotSource + DeviceRegistry + ?Sized,
    {
        debug!(?interval, device_refresh_every, "polling started");

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut tick: u64 = 0;

        loop {
            ticker.tick().await;

            if shutdown_signal.load(Ordering::Relaxed) {
                break;
            }

            stats.polls.fetch_add(1, Ordering::Relaxed);

            // devices first so the active device is known before the snapshot is judged
            if tick % u64::from(device_refresh_every) == 0 {
                let devices = match source.list_devices().await {
                    Ok(devices) => devices,
                    Err(e) => {
                        stats.device_errors.fetch_add(1, Ordering::Relaxed);
                        warn!(error = %e, "device poll failed");
                        Vec::new()
                    }
                };
                if events.send(PollEvent::Devices(devices)).await.is_err() {
                    break;
                }
            }

            let snapshot = match source.fetch_snapshot().await {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    stats.snapshot_errors.fetch_add(1, Ordering::Relaxed);
                    warn!(error = %e, "playback poll failed");
                    None
                }
            };
            trace!(tick, playing = ?snapshot.as_ref().map(|s| s.is_playing), "polled playback");

            if events.send(PollEvent::Snapshot(snapshot)).await.is_err() {
                // session gone
                break;
            }

            tick = tick.wrapping_add(1);
        }

        debug!("polling stopped");
    }

    pub fn stats(&self) -> Arc<PollStats> {
        Arc::clone(&self.stats)
    }

    pub fn is_running(&self) -> bool {
        !self.task_handle.is_finished()
    }

    /// Stop after the current poll; in-flight requests are abandoned
    pub fn stop(&self) {
        self.shutdown_signal.store(true, Ordering::Relaxed);
        self.task_handle.abort();
    }
}

impl Drop for SnapshotPoller {
    fn drop(&mut self) {
        self.stop();
    }
}
