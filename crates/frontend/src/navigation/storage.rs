//! `localStorage`-backed implementation of [`PreferencesStore`].
//!
//! Storage being unavailable (private mode, disabled storage) degrades to
//! a no-op store: reads come back empty and writes are dropped, which the
//! navigation surface tolerates as "no recents, no favorites".

use web_sys::window;

use super::preferences::PreferencesStore;

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPreferencesStore;

impl PreferencesStore for LocalPreferencesStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
