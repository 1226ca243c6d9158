//! Terminal presentation and runtime for the oblako client.
//!
//! Everything here is presentation plumbing around `oblako-core`: the event
//! poller, the runtime loop that dispatches actions and executes effects as
//! tokio tasks, and ratatui components driven by read-only props.

pub mod app;
pub mod components;
pub mod event;
pub mod runtime;
pub mod testing;

pub use app::AppUi;
pub use event::EventKind;
pub use runtime::{EventOutcome, Runtime};
