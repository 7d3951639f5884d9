//! Keyed timer tasks that can be cancelled as a group

use std::collections::HashMap;
use std::future::Future;

use tokio::task::JoinHandle;

pub const ROTATION: &str = "rotation";
pub const SCRIPT: &str = "script";
pub const PLAYBACK: &str = "playback";

pub fn download_key(track: crate::model::TrackId) -> String {
    format!("download:{track}")
}

/// One owner's timers. Spawning under a taken key aborts the older task.
/// A closed group aborts everything handed to it.
#[derive(Default)]
pub struct TaskGroup {
    tasks: HashMap<String, JoinHandle<()>>,
    closed: bool,
}

impl TaskGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn<F>(&mut self, key: &str, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(task);
        if self.closed {
            handle.abort();
            return;
        }
        self.tasks.retain(|_, handle| !handle.is_finished());
        if let Some(previous) = self.tasks.insert(key.to_string(), handle) {
            previous.abort();
        }
    }

    pub fn abort(&mut self, key: &str) {
        if let Some(handle) = self.tasks.remove(key) {
            handle.abort();
        }
    }

    pub fn abort_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }

    /// Abort everything and refuse new work
    pub fn close(&mut self) {
        self.closed = true;
        self.abort_all();
    }

    pub fn is_running(&self, key: &str) -> bool {
        self.tasks.get(key).is_some_and(|handle| !handle.is_finished())
    }

    pub fn running(&self) -> usize {
        self.tasks.values().filter(|handle| !handle.is_finished()).count()
    }
}
