//! Local storage module
//!
//! This module handles persistent client-side storage including:
//! - The API base URL
//! - The offline submission queues
//! - Client settings
//!
//! The module is organized into submodules:
//! - `store` - The `KeyValueStore` trait (a `localStorage`-shaped interface) and an in-memory store
//! - `json_file` - Store backed by a single JSON object on disk
//! - `sqlite` - Store backed by a SQLite key/value table
//! - `settings` - Client settings and configuration

// Submodules
pub mod json_file;
pub mod settings;
pub mod sqlite;
pub mod store;

// Re-export commonly used types
pub use json_file::JsonFileStore;
pub use settings::{Settings, StorageBackend};
pub use sqlite::SqliteStore;
pub use store::{KeyValueStore, MemoryStore, StoreHandle};

/// Open the store selected by the settings, inside the settings' data directory
pub fn open_store(settings: &Settings) -> crate::Result<StoreHandle> {
    let dir = std::path::Path::new(&settings.data_dir);
    std::fs::create_dir_all(dir)?;

    let handle: StoreHandle = match settings.storage_backend {
        StorageBackend::Sqlite => std::sync::Arc::new(SqliteStore::new_with_path(dir.join("guru_site.db"))?),
        StorageBackend::JsonFile => std::sync::Arc::new(JsonFileStore::new(dir.join("local_storage.json"))),
        StorageBackend::Memory => std::sync::Arc::new(MemoryStore::new()),
    };

    tracing::debug!("Opened {:?} store in {}", settings.storage_backend, dir.display());
    Ok(handle)
}
