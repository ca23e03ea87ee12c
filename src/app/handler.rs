//! Input handling: maps key events to state mutations.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::Action;

use super::settings::SETTINGS_ITEMS;
use super::state::{ActiveView, AppState};

/// Process a key event, dispatching based on the active view.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match state.active_view {
        ActiveView::Reel => handle_reel_key(state, key),
        ActiveView::SettingsMenu => handle_settings_key(state, key),
        ActiveView::Metrics => handle_metrics_key(state, key),
    }
}

// ── Reel view (configurable bindings) ───────────────────────────

fn handle_reel_key(state: &mut AppState, key: KeyEvent) {
    let Some(action) = state.config.match_key(key) else {
        return;
    };
    state.status_message = None;

    match action {
        Action::Quit => state.should_quit = true,
        Action::Respin => state.respin(),
        Action::ToggleDirection => state.flip_direction(),
        Action::CycleSize => state.cycle_size(),
        Action::ToggleFast => {
            let fast = !state.reel.options().fast_display;
            state.set_fast_display(fast);
            state.status_message =
                Some(format!("Fast display: {}", if fast { "on" } else { "off" }));
        }
        Action::ShowMetrics => state.request_metrics(),
        Action::OpenSettings => {
            state.active_view = ActiveView::SettingsMenu;
            state.settings_selected = 0;
        }
    }
}

// ── Settings menu (fixed keys) ──────────────────────────────────

fn handle_settings_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            state.active_view = ActiveView::Reel;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.settings_selected = state.settings_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.settings_selected + 1 < SETTINGS_ITEMS.len() {
                state.settings_selected += 1;
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Right | KeyCode::Char('l') => {
            if let Some(item) = SETTINGS_ITEMS.get(state.settings_selected) {
                item.activate(state);
            }
        }
        _ => {}
    }
}

// ── Metrics popup ───────────────────────────────────────────────

fn handle_metrics_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => state.active_view = ActiveView::Reel,
        KeyCode::Char('r') => state.request_metrics(),
        _ => {
            if state.config.match_key(key) == Some(Action::ShowMetrics) {
                state.active_view = ActiveView::Reel;
            }
        }
    }
}
