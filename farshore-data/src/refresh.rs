//! Periodic refresh task for the country database.
//!
//! The refresh task is an explicit value owned by the process rather
//! than a shared global scheduler. The scorer and ranker are stateless,
//! so refresh timing never affects in-flight computations.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};

use crate::refresh_database;

/// Timing for the periodic refresh task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshSchedule {
    /// Delay before the first refresh after spawning.
    pub initial_delay: Duration,
    /// Interval between subsequent refreshes.
    pub interval: Duration,
}

impl Default for RefreshSchedule {
    /// First refresh after one minute, then every six hours.
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(60),
            interval: Duration::from_secs(6 * 60 * 60),
        }
    }
}

/// Handle for the background refresh thread.
///
/// Dropping the handle also stops the task: the worker observes the
/// disconnected shutdown channel at its next wake-up and exits.
#[derive(Debug)]
pub struct RefreshTask {
    handle: JoinHandle<()>,
    shutdown: mpsc::Sender<()>,
}

impl RefreshTask {
    /// Spawn the refresh thread for the database at `path`.
    ///
    /// Errors during a scheduled refresh are logged and the schedule
    /// continues; they never terminate the task.
    pub fn spawn(path: Utf8PathBuf, schedule: RefreshSchedule) -> Self {
        log::info!(
            "refresh task started: first refresh in {:?}, then every {:?}",
            schedule.initial_delay,
            schedule.interval
        );
        let (shutdown, signal) = mpsc::channel();
        let handle = thread::spawn(move || run_schedule(&path, schedule, &signal));
        Self { handle, shutdown }
    }

    /// Stop the task and wait for the worker thread to finish.
    pub fn stop(self) {
        let _ = self.shutdown.send(());
        let _ = self.handle.join();
        log::info!("refresh task stopped");
    }
}

fn run_schedule(path: &Utf8Path, schedule: RefreshSchedule, signal: &Receiver<()>) {
    if should_stop(signal, schedule.initial_delay) {
        return;
    }
    loop {
        run_refresh(path);
        if should_stop(signal, schedule.interval) {
            return;
        }
    }
}

fn should_stop(signal: &Receiver<()>, wait: Duration) -> bool {
    match signal.recv_timeout(wait) {
        Ok(()) | Err(RecvTimeoutError::Disconnected) => true,
        Err(RecvTimeoutError::Timeout) => false,
    }
}

fn run_refresh(path: &Utf8Path) {
    if let Err(error) = refresh_database(path) {
        log::error!("scheduled refresh failed: {error}");
    }
}
