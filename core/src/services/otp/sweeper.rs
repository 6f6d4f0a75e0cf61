//! Background eviction of expired codes
//!
//! The sweeper is started explicitly during service start-up and stopped
//! through the returned [`SweeperHandle`]; nothing runs as a side effect of
//! constructing a store.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

use rb_shared::config::OtpConfig;

use super::traits::OtpStore;

/// Shortest interval the loop will run at
pub const MIN_SWEEP_INTERVAL: Duration = Duration::from_secs(1);

/// Periodically calls [`OtpStore::sweep`]
pub struct OtpSweeper<S: OtpStore + ?Sized> {
    store: Arc<S>,
    interval: Duration,
}

impl<S: OtpStore + ?Sized + 'static> OtpSweeper<S> {
    /// Intervals shorter than [`MIN_SWEEP_INTERVAL`], including zero, are raised to it
    pub fn new(store: Arc<S>, interval: Duration) -> Self {
        if interval < MIN_SWEEP_INTERVAL {
            warn!(
                requested_ms = interval.as_millis() as u64,
                "Sweep interval below minimum, using {}s",
                MIN_SWEEP_INTERVAL.as_secs()
            );
        }
        Self {
            store,
            interval: interval.max(MIN_SWEEP_INTERVAL),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Sweeper using the configured interval
    pub fn from_config(store: Arc<S>, config: &OtpConfig) -> Self {
        Self::new(store, Duration::from_secs(config.sweep_interval_seconds))
    }

    /// Run a single sweep, returning the number of entries removed.
    ///
    /// Store failures are logged and reported as zero removals so one bad
    /// cycle never stops the loop.
    pub async fn run_once(&self) -> usize {
        match self.store.sweep().await {
            Ok(removed) => {
                if removed > 0 {
                    info!(removed = removed, event = "otp_sweep", "Evicted expired verification codes");
                } else {
                    debug!(event = "otp_sweep", "No expired verification codes");
                }
                removed
            }
            Err(e) => {
                error!(error = %e, event = "otp_sweep_failed", "Verification code sweep failed");
                0
            }
        }
    }

    /// Spawn the sweep loop on the current tokio runtime.
    ///
    /// The first sweep happens one full interval after start. Dropping the
    /// returned handle also stops the loop.
    pub fn start(self) -> SweeperHandle {
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();
        let interval = self.interval;

        let task = tokio::spawn(async move {
            info!(
                interval_seconds = interval.as_secs(),
                "Verification code sweeper started"
            );

            let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        self.run_once().await;
                    }
                    _ = &mut shutdown_rx => {
                        break;
                    }
                }
            }

            info!("Verification code sweeper stopped");
        });

        SweeperHandle {
            shutdown_tx: Some(shutdown_tx),
            task,
        }
    }
}

/// Owner of a running sweeper
pub struct SweeperHandle {
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl SweeperHandle {
    /// Whether the loop is still running
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Stop the loop and wait for it to exit
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Err(e) = (&mut self.task).await {
            error!(error = %e, "Verification code sweeper task failed");
        }
    }
}
