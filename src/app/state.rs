//! Central application state.
//!
//! All mutable state lives here so that rendering is a pure function over
//! `&AppState` and event handling mutates `&mut AppState`.

use std::path::PathBuf;
use std::time::Duration;

use rand::rngs::SmallRng;

use crate::config::AppConfig;
use crate::core::reel::{ReelOptions, TextReel};
use crate::core::schedule::{Scheduler, TimerToken};
use crate::ui::entrance::Entrance;

use super::metrics::{MetricsAction, MetricsClient, MetricsState};

/// Which view / overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Reel,
    SettingsMenu,
    Metrics,
}

/// Top-level application state.
pub struct AppState {
    /// The animated reel.
    pub reel: TextReel,
    /// Fade/slide-in for the current spin.
    pub entrance: Entrance,
    /// Host timers for the reel.
    pub scheduler: Box<dyn Scheduler + Send>,
    /// Source of shuffles for respins.
    pub rng: SmallRng,
    /// User configuration (defaults for the reel, bindings, backend).
    pub config: AppConfig,
    /// Where `config` is written back to; `None` keeps changes in memory.
    pub config_path: Option<PathBuf>,
    /// Which view / overlay is currently shown.
    pub active_view: ActiveView,
    /// Currently highlighted item in the settings menu.
    pub settings_selected: usize,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// Last metrics response and request status.
    pub metrics: MetricsState,
    /// Backend client; `None` disables the metrics popup's fetch.
    pub metrics_client: Option<MetricsClient>,
    /// Set by the handler; the event loop spawns the request.
    pub needs_metrics_fetch: bool,
    /// Monotonic counter advanced on idle ticks (drives the loading spinner).
    pub idle_ticks: u64,
}

impl AppState {
    pub fn new(
        reel: TextReel,
        scheduler: Box<dyn Scheduler + Send>,
        rng: SmallRng,
        config: AppConfig,
    ) -> Self {
        let entrance = Entrance::new(reel.options().fast_display);
        Self {
            reel,
            entrance,
            scheduler,
            rng,
            config,
            config_path: None,
            active_view: ActiveView::default(),
            settings_selected: 0,
            status_message: None,
            should_quit: false,
            metrics: MetricsState::default(),
            metrics_client: None,
            needs_metrics_fetch: false,
            idle_ticks: 0,
        }
    }

    // ── reel lifecycle ──────────────────────────────────────────

    pub fn mount_reel(&mut self) {
        self.reel.mount(self.scheduler.as_mut());
        self.entrance = Entrance::new(self.reel.options().fast_display);
    }

    pub fn unmount_reel(&mut self) {
        self.reel.unmount(self.scheduler.as_mut());
    }

    pub fn respin(&mut self) {
        self.reel.respin(&mut self.rng, self.scheduler.as_mut());
        self.entrance = Entrance::new(self.reel.options().fast_display);
    }

    /// Route a timer firing to the reel.
    pub fn on_timer(&mut self, token: TimerToken) {
        if !self.reel.on_timer(token, self.scheduler.as_mut()) {
            tracing::trace!(?token, "dropping stale reel timer");
        }
    }

    /// Advance frame-driven animation by `dt`.
    pub fn on_frame(&mut self, dt: Duration) {
        self.reel.advance_frame(dt);
        self.entrance.tick(dt);
    }

    /// True while something on screen is still moving.
    pub fn needs_frames(&self) -> bool {
        self.reel.is_animating() || self.entrance.is_animating()
    }

    // ── option changes ──────────────────────────────────────────

    pub fn update_options(&mut self, f: impl FnOnce(&mut ReelOptions)) {
        let mut options = self.reel.options().clone();
        f(&mut options);
        self.reel.set_options(options, self.scheduler.as_mut());
    }

    pub fn cycle_size(&mut self) {
        let next = self.reel.options().size.next();
        self.update_options(|o| o.size = next);
        self.config.size_variant = next;
        self.persist_config();
        self.status_message = Some(format!("Size: {next}"));
    }

    pub fn flip_direction(&mut self) {
        let next = self.reel.options().direction.flipped();
        self.update_options(|o| o.direction = next);
        self.config.direction = next;
        self.persist_config();
        self.status_message = Some(format!("Direction: {next}"));
    }

    pub fn set_fast_display(&mut self, fast: bool) {
        self.update_options(|o| o.fast_display = fast);
        self.config.fast_display = fast;
        self.persist_config();
    }

    /// Write the config back if a path is set.  Failures only reach the log
    /// and the status bar.
    pub fn persist_config(&mut self) {
        let Some(path) = self.config_path.as_deref() else {
            return;
        };
        if let Err(e) = self.config.save_to(path) {
            tracing::warn!(error = %e, path = %path.display(), "could not save config");
            self.status_message = Some(format!("Could not save settings: {e}"));
        }
    }

    // ── metrics ─────────────────────────────────────────────────

    /// Open the metrics popup and ask for a fresh fetch.
    pub fn request_metrics(&mut self) {
        self.active_view = ActiveView::Metrics;
        if self.metrics.is_loading() {
            return;
        }
        if self.metrics_client.is_none() {
            self.metrics
                .apply(MetricsAction::Rejected("metrics backend not configured".into()));
            return;
        }
        self.metrics.apply(MetricsAction::Pending);
        self.needs_metrics_fetch = true;
    }
}
