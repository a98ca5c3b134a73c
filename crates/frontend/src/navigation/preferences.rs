//! Per-user recents and favorites, persisted through a key-value store.
//!
//! Lists are namespaced by user id (guest fallback) so two users on the
//! same browser never see each other's entries. Every mutation persists
//! synchronously before returning the updated list; a malformed stored
//! value is logged and treated as empty.

use log::warn;

/// Recents keep at most this many entries, most recent first.
pub const RECENTS_CAP: usize = 5;

/// Key-value persistence boundary. The app backs it with `localStorage`
/// ([`super::storage::LocalPreferencesStore`]); tests use an in-memory map.
pub trait PreferencesStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Recents,
    Favorites,
}

impl ListKind {
    fn as_str(self) -> &'static str {
        match self {
            ListKind::Recents => "nav-recents",
            ListKind::Favorites => "nav-favorites",
        }
    }
}

/// Storage key for a list, namespaced by list kind and user identity.
pub fn storage_key(kind: ListKind, user_id: Option<&str>) -> String {
    match user_id {
        Some(id) => format!("{}-user-{}", kind.as_str(), id),
        None => format!("{}-guest", kind.as_str()),
    }
}

/// Recents/favorites operations for one user over an injected store.
pub struct UserPreferences<'a, S: PreferencesStore> {
    store: &'a S,
    user_id: Option<String>,
}

impl<'a, S: PreferencesStore> UserPreferences<'a, S> {
    pub fn new(store: &'a S, user_id: Option<String>) -> Self {
        Self { store, user_id }
    }

    pub fn load(&self, kind: ListKind) -> Vec<String> {
        let key = storage_key(kind, self.user_id.as_deref());
        let Some(raw) = self.store.get(&key) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(list) => list,
            Err(err) => {
                warn!("discarding malformed list under '{key}': {err}");
                Vec::new()
            }
        }
    }

    fn save(&self, kind: ListKind, list: &[String]) {
        let key = storage_key(kind, self.user_id.as_deref());
        if let Ok(raw) = serde_json::to_string(list) {
            self.store.set(&key, &raw);
        }
    }

    /// Move-to-front with cap: the visited key lands at position 0, a
    /// previous occurrence is removed, and the list is truncated to
    /// [`RECENTS_CAP`]. Returns the persisted list.
    pub fn record_visit(&self, item_key: &str) -> Vec<String> {
        let mut list = self.load(ListKind::Recents);
        list.retain(|k| k != item_key);
        list.insert(0, item_key.to_string());
        list.truncate(RECENTS_CAP);
        self.save(ListKind::Recents, &list);
        list
    }

    pub fn remove_recent(&self, item_key: &str) -> Vec<String> {
        let mut list = self.load(ListKind::Recents);
        list.retain(|k| k != item_key);
        self.save(ListKind::Recents, &list);
        list
    }

    pub fn clear_recents(&self) -> Vec<String> {
        let key = storage_key(ListKind::Recents, self.user_id.as_deref());
        self.store.remove(&key);
        Vec::new()
    }

    /// Removes the key if favorited, appends it otherwise. Favorites are
    /// user-curated and carry no size cap. Returns the persisted list,
    /// which the caller publishes through the favorites signal.
    pub fn toggle_favorite(&self, item_key: &str) -> Vec<String> {
        let mut list = self.load(ListKind::Favorites);
        if let Some(pos) = list.iter().position(|k| k == item_key) {
            list.remove(pos);
        } else {
            list.push(item_key.to_string());
        }
        self.save(ListKind::Favorites, &list);
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        entries: RefCell<HashMap<String, String>>,
    }

    impl PreferencesStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.entries.borrow_mut().remove(key);
        }
    }

    fn prefs<'a>(store: &'a MemoryStore, user_id: Option<&str>) -> UserPreferences<'a, MemoryStore> {
        UserPreferences::new(store, user_id.map(|id| id.to_string()))
    }

    #[test]
    fn test_recents_cap_and_eviction() {
        let store = MemoryStore::default();
        let p = prefs(&store, Some("42"));
        for key in ["A", "B", "C", "D", "E", "F"] {
            p.record_visit(key);
        }
        assert_eq!(p.load(ListKind::Recents), vec!["F", "E", "D", "C", "B"]);
    }

    #[test]
    fn test_recents_move_to_front() {
        let store = MemoryStore::default();
        let p = prefs(&store, Some("42"));
        for key in ["A", "B", "C", "D", "E", "F"] {
            p.record_visit(key);
        }
        let updated = p.record_visit("C");
        assert_eq!(updated, vec!["C", "F", "E", "D", "B"]);
    }

    #[test]
    fn test_remove_and_clear_recents() {
        let store = MemoryStore::default();
        let p = prefs(&store, None);
        p.record_visit("A");
        p.record_visit("B");
        assert_eq!(p.remove_recent("A"), vec!["B"]);
        assert_eq!(p.clear_recents(), Vec::<String>::new());
        assert_eq!(p.load(ListKind::Recents), Vec::<String>::new());
    }

    #[test]
    fn test_favorite_toggle_roundtrip() {
        let store = MemoryStore::default();
        let p = prefs(&store, Some("42"));
        assert_eq!(p.toggle_favorite("X"), vec!["X"]);
        assert_eq!(p.toggle_favorite("X"), Vec::<String>::new());
    }

    #[test]
    fn test_favorites_are_unbounded() {
        let store = MemoryStore::default();
        let p = prefs(&store, Some("42"));
        for i in 0..20 {
            p.toggle_favorite(&format!("item-{i}"));
        }
        assert_eq!(p.load(ListKind::Favorites).len(), 20);
    }

    #[test]
    fn test_lists_are_namespaced_per_user() {
        let store = MemoryStore::default();
        prefs(&store, Some("42")).record_visit("A");

        assert_eq!(
            prefs(&store, Some("43")).load(ListKind::Recents),
            Vec::<String>::new()
        );
        assert_eq!(prefs(&store, Some("42")).load(ListKind::Recents), vec!["A"]);
    }

    #[test]
    fn test_guest_fallback_key() {
        let store = MemoryStore::default();
        prefs(&store, None).record_visit("A");
        assert!(store.get("nav-recents-guest").is_some());
        assert_eq!(prefs(&store, None).load(ListKind::Recents), vec!["A"]);
    }

    #[test]
    fn test_malformed_stored_value_recovers_to_empty() {
        let store = MemoryStore::default();
        store.set("nav-recents-user-42", "{not json");
        let p = prefs(&store, Some("42"));
        assert_eq!(p.load(ListKind::Recents), Vec::<String>::new());
        // And the next mutation writes a clean list over it.
        assert_eq!(p.record_visit("A"), vec!["A"]);
        assert_eq!(p.load(ListKind::Recents), vec!["A"]);
    }
}
