//! Application event abstraction.
//!
//! Terminal input, reel timer firings, and finished metrics requests all
//! arrive on one channel so the main loop has a single place to wait.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent};
use tokio::sync::mpsc;

use crate::app::metrics::{MetricsError, UserMetrics};
use crate::core::schedule::TimerToken;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// No input within the poll window.
    Tick,
    /// A timer armed through [`crate::app::scheduler::TokioScheduler`] elapsed.
    ReelTimer(TimerToken),
    /// The metrics request finished.
    Metrics(Result<UserMetrics, MetricsError>),
}

/// Spawns a background task that polls the terminal for events and sends them
/// through `tx`.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<AppEvent>, tick_rate: Duration) {
    // crossterm's poll blocks, so keep it off the async workers.
    tokio::task::spawn_blocking(move || loop {
        let has_event = event::poll(tick_rate).unwrap_or(false);
        let app_event = if has_event {
            match event::read() {
                Ok(CtEvent::Key(k)) => AppEvent::Key(k),
                Ok(CtEvent::Resize(w, h)) => AppEvent::Resize(w, h),
                _ => continue,
            }
        } else {
            AppEvent::Tick
        };
        if tx.send(app_event).is_err() {
            break; // receiver dropped
        }
    });
}
