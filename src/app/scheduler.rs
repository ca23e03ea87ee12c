//! Tokio-backed [`Scheduler`] for the interactive app.
//!
//! Each armed token becomes a sleeping task that posts
//! [`AppEvent::ReelTimer`] when it wakes.  Cancelling aborts the task, so a
//! cancelled token never reaches the event loop.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::app::event::AppEvent;
use crate::core::schedule::{Scheduler, TimerToken};

pub struct TokioScheduler {
    tx: mpsc::UnboundedSender<AppEvent>,
    next_id: u64,
    tasks: HashMap<TimerToken, JoinHandle<()>>,
}

impl TokioScheduler {
    pub fn new(tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            tx,
            next_id: 0,
            tasks: HashMap::new(),
        }
    }

    /// Number of timers whose task has not finished yet.
    pub fn live_timers(&self) -> usize {
        self.tasks.values().filter(|h| !h.is_finished()).count()
    }

    /// Abort everything still sleeping.
    pub fn shutdown(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

impl Scheduler for TokioScheduler {
    fn arm(&mut self, delay: Duration) -> TimerToken {
        self.tasks.retain(|_, h| !h.is_finished());
        self.next_id += 1;
        let token = TimerToken(self.next_id);
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(AppEvent::ReelTimer(token));
        });
        self.tasks.insert(token, handle);
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        if let Some(handle) = self.tasks.remove(&token) {
            handle.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}
