use crate::MountGuard;

use std::future::Future;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use log::debug;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval, sleep};

/// Owns every background task a view starts.
///
/// Dropping the scope (or calling `unmount`) marks its [`MountGuard`]
/// unmounted and aborts all tasks, so no timer outlives its view. Must be
/// created inside a Tokio runtime.
pub struct ViewScope {
    name: &'static str,
    guard: MountGuard,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl ViewScope {
    pub fn new(name: &'static str) -> Self {
        debug!("Mounted view {name}");
        Self {
            name,
            guard: MountGuard::new(),
            tasks: Mutex::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn guard(&self) -> MountGuard {
        self.guard.clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.guard.is_mounted()
    }

    /// Run `task` now and then every `period` until unmount. A slow run
    /// delays the next tick rather than bunching ticks up.
    pub fn spawn_periodic<F, Fut>(&self, period: Duration, mut task: F)
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let guard = self.guard.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if !guard.is_mounted() {
                    break;
                }
                task().await;
            }
        });

        self.track(handle);
    }

    /// Run `task` once after `delay`, unless unmounted first
    pub fn spawn_after<F>(&self, delay: Duration, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let guard = self.guard.clone();
        let handle = tokio::spawn(async move {
            sleep(delay).await;
            if guard.is_mounted() {
                task();
            }
        });

        self.track(handle);
    }

    /// Number of tasks not yet finished
    pub fn active_tasks(&self) -> usize {
        let mut tasks = self.lock_tasks();
        tasks.retain(|handle| !handle.is_finished());
        tasks.len()
    }

    pub fn unmount(self) {
        drop(self);
    }

    fn track(&self, handle: JoinHandle<()>) {
        let mut tasks = self.lock_tasks();
        tasks.retain(|handle| !handle.is_finished());
        tasks.push(handle);
    }

    fn lock_tasks(&self) -> MutexGuard<'_, Vec<JoinHandle<()>>> {
        self.tasks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.guard.unmount();

        let tasks = std::mem::take(&mut *self.lock_tasks());
        for handle in &tasks {
            handle.abort();
        }

        debug!("Unmounted view {} ({} tasks aborted)", self.name, tasks.len());
    }
}
