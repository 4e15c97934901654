//! TUI (Terminal User Interface) module
//!
//! This module contains all TUI logic separated from the binary for better testability.
//! The binary only owns the terminal and the event loop.

pub mod types;
pub mod app;
pub mod ui;

// Re-export main types for convenience
pub use types::{InputMode, Page, TaskOutcome};
pub use app::{App, OutboxRow};
