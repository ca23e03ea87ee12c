//! UI / rendering layer: everything that touches Ratatui widgets.
//!
//! This layer takes the *core* reel and app state and turns them into cells
//! on the terminal.  No timers or network calls happen here.

pub mod entrance;
pub mod layout;
pub mod popup;
pub mod reel_widget;
pub mod spinner;
pub mod theme;
