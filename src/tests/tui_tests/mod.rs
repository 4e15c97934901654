// TUI Tests Module - Testing the public tui module
// - app_tests: App state and key handling
// - ui_tests: rendering into a test backend

mod app_tests;
mod ui_tests;

use crate::storage::{MemoryStore, Settings, StorageBackend, StoreHandle};
use crate::tui::App;
use std::sync::Arc;

/// Settings with periodic sync disabled so tests control every pass
fn test_settings() -> Settings {
    Settings {
        storage_backend: StorageBackend::Memory,
        sync_interval_secs: 0,
        ..Default::default()
    }
}

fn test_app() -> App {
    test_app_with_store(Arc::new(MemoryStore::new()))
}

fn test_app_with_store(store: StoreHandle) -> App {
    App::with_store(test_settings(), store).expect("app")
}
