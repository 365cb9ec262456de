//! Cancellable repeating task, driven by elapsed time instead of a timer thread.

use std::time::Duration;

/// Identifies one scheduled task. A handle whose task was cancelled or
/// replaced never fires again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug, Clone)]
struct Task {
    handle: TaskHandle,
    elapsed: Duration,
}

/// Runs at most one repeating task at a time. Scheduling a new task cancels
/// the previous one.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    seq: u64,
    active: Option<Task>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self { interval, seq: 0, active: None }
    }

    pub fn schedule(&mut self) -> TaskHandle {
        if let Some(prev) = self.active.take() {
            log::trace!("ticker: task {:?} replaced", prev.handle);
        }
        self.seq += 1;
        let handle = TaskHandle(self.seq);
        self.active = Some(Task { handle, elapsed: Duration::ZERO });
        handle
    }

    /// Stops `handle`. Returns false if it was not the running task.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        match &self.active {
            Some(task) if task.handle == handle => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_running(&self, handle: TaskHandle) -> bool {
        self.active.as_ref().is_some_and(|t| t.handle == handle)
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }

    /// Lets `dt` pass and returns the running task with the number of ticks
    /// that fell due. A zero interval makes every pending tick due at once.
    pub fn advance(&mut self, dt: Duration) -> Option<(TaskHandle, u64)> {
        let interval = self.interval;
        let task = self.active.as_mut()?;
        if interval.is_zero() {
            return Some((task.handle, u64::MAX));
        }
        task.elapsed += dt;
        let period = interval.as_nanos();
        let due = u64::try_from(task.elapsed.as_nanos() / period).unwrap_or(u64::MAX);
        task.elapsed = Duration::from_nanos((task.elapsed.as_nanos() % period) as u64);
        Some((task.handle, due))
    }
}
