//! Core reel engine – language filtering, geometry, timing, and the reel
//! state machine.
//!
//! Nothing in this module depends on any TUI, async runtime, or HTTP crate.
//! Timers reach the reel only through [`schedule::Scheduler`].

pub mod easing;
pub mod language;
pub mod layout;
pub mod reel;
pub mod schedule;
pub mod spring;

/// Errors from parsing user-facing option strings (CLI flags, config values).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid language tag `{0}` (expected letters only, e.g. `en`)")]
    LanguageTag(String),
    #[error("unknown size variant `{0}`")]
    SizeVariant(String),
    #[error("unknown direction `{0}` (expected `up` or `down`)")]
    Direction(String),
    #[error("unknown justification `{0}` (expected `left`, `center` or `right`)")]
    Justify(String),
}
