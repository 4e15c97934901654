//! Guru Site - client for the Guru Software Solutions website
//!
//! This library provides the client-side functionality of the site:
//! page navigation, the contact and job application forms, client-side
//! validation, transient notifications, and an offline retry queue that
//! keeps submissions in local storage until the backend accepts them.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod careers;
pub mod config;
pub mod forms;
pub mod navigation;
pub mod notify;
pub mod queue;
pub mod storage;
pub mod submission;
pub mod sync;
pub mod transport;
pub mod tui;
pub mod util;
pub mod validation;

#[cfg(test)]
mod tests;

/// Result type alias for Guru Site operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Guru Site operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Key/value storage error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Offline queue error
    #[error("Queue error: {0}")]
    Queue(String),

    /// Configuration error (bad API base URL, unreadable settings)
    #[error("Config error: {0}")]
    Config(String),

    /// Transport layer error
    #[error("Transport error: {0}")]
    Transport(#[from] transport::TransportError),

    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// SQLite database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Initialize the library with logging to stdout
pub fn init() {
    tracing_subscriber::fmt::init();
}

/// Initialize logging into a file (used by the terminal front end,
/// where stdout belongs to the screen)
pub fn init_file_logging<P: AsRef<std::path::Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to install logger: {}", e)))
}
