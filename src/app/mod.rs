//! Application orchestration: state management, event plumbing, input
//! handling, and the backend metrics call.

pub mod event;
pub mod handler;
pub mod metrics;
pub mod scheduler;
pub mod settings;
pub mod state;
