//! A slot-machine text reel for multilingual vocabulary.
//!
//! [`core`] is the embeddable part: a [`TextReel`](core::reel::TextReel)
//! driven through any [`Scheduler`](core::schedule::Scheduler), with an
//! optional caller-supplied [`SpeedCurve`](core::easing::SpeedCurve).
//! [`app`], [`config`] and [`ui`] wrap it into the terminal front end the
//! `lexireel` binary runs.

pub mod app;
pub mod config;
pub mod core;
pub mod ui;
