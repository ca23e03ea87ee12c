//! Settings menu model (data only).
//!
//! Keeping these definitions outside the input handler lets both the handler
//! and the popup renderer consume the same source of truth.

use super::state::AppState;
use crate::core::layout::Justify;

/// A single item in the settings menu.
pub enum SettingsItem {
    /// Boolean toggle: reads/writes via accessors on `AppState`.
    Toggle {
        label: &'static str,
        get: fn(&AppState) -> bool,
        set: fn(&mut AppState, bool),
    },
    /// Cycles through a finite set of values.
    Cycle {
        label: &'static str,
        value: fn(&AppState) -> String,
        cycle: fn(&mut AppState),
    },
}

impl SettingsItem {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Toggle { label, .. } | Self::Cycle { label, .. } => label,
        }
    }

    /// Current value as shown in the menu.
    pub fn display_value(&self, state: &AppState) -> String {
        match self {
            Self::Toggle { get, .. } => {
                if get(state) { "ON".into() } else { "OFF".into() }
            }
            Self::Cycle { value, .. } => value(state),
        }
    }

    /// Flip or advance this item.
    pub fn activate(&self, state: &mut AppState) {
        match self {
            Self::Toggle { get, set, .. } => {
                let current = get(state);
                set(state, !current);
            }
            Self::Cycle { cycle, .. } => cycle(state),
        }
    }
}

const SPIN_COUNTS: &[u32] = &[5, 10, 15, 20, 30];

/// All items shown in the settings popup, in display order.
pub static SETTINGS_ITEMS: &[SettingsItem] = &[
    SettingsItem::Cycle {
        label: "Size",
        value: |s| s.reel.options().size.to_string(),
        cycle: |s| s.cycle_size(),
    },
    SettingsItem::Cycle {
        label: "Direction",
        value: |s| s.reel.options().direction.to_string(),
        cycle: |s| s.flip_direction(),
    },
    SettingsItem::Cycle {
        label: "Justify",
        value: |s| format!("{:?}", s.reel.options().justify).to_lowercase(),
        cycle: |s| {
            let next = match s.reel.options().justify {
                Justify::Left => Justify::Center,
                Justify::Center => Justify::Right,
                Justify::Right => Justify::Left,
            };
            s.update_options(|o| o.justify = next);
            s.config.justify = next;
            s.persist_config();
        },
    },
    SettingsItem::Toggle {
        label: "Fast Display",
        get: |s| s.reel.options().fast_display,
        set: |s, v| s.set_fast_display(v),
    },
    SettingsItem::Cycle {
        label: "Spins",
        value: |s| s.reel.options().reel_spins.to_string(),
        cycle: |s| {
            let current = s.reel.options().reel_spins;
            let idx = SPIN_COUNTS.iter().position(|&n| n == current).unwrap_or(0);
            let next = SPIN_COUNTS[(idx + 1) % SPIN_COUNTS.len()];
            s.update_options(|o| o.reel_spins = next);
            s.config.reel_spins = next;
            s.persist_config();
            // New target, new shuffle.
            s.respin();
            s.status_message = Some(format!("Spins: {next}"));
        },
    },
];
