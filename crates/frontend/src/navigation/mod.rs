//! Permission-scoped navigation: catalog, filtering, search, recents,
//! favorites and dispatch behind the mega-menu surface.

pub mod catalog;
pub mod dispatch;
pub mod menu;
pub mod permissions;
pub mod preferences;
pub mod search;
pub mod storage;

pub use menu::MegaMenuHost;

use leptos::prelude::*;

/// App-wide navigation state.
///
/// `favorites` doubles as the favorites-changed broadcast: every toggle
/// persists the list, then publishes the updated list here, so any
/// component rendering favorite markers refreshes without re-reading
/// storage.
#[derive(Clone, Copy)]
pub struct NavigationContext {
    pub menu_open: RwSignal<bool>,
    pub query: RwSignal<String>,
    pub recents: RwSignal<Vec<String>>,
    pub favorites: RwSignal<Vec<String>>,
}

impl NavigationContext {
    pub fn new() -> Self {
        Self {
            menu_open: RwSignal::new(false),
            query: RwSignal::new(String::new()),
            recents: RwSignal::new(Vec::new()),
            favorites: RwSignal::new(Vec::new()),
        }
    }

    pub fn open_menu(&self) {
        self.menu_open.set(true);
    }

    /// Closing drops the transient UI state along with the surface.
    pub fn close_menu(&self) {
        self.menu_open.set(false);
        self.query.set(String::new());
    }
}

impl Default for NavigationContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_navigation() -> NavigationContext {
    use_context::<NavigationContext>().expect("NavigationContext not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::catalog::CATALOG;
    use super::permissions::{filter_catalog, GrantSet};
    use super::search::search;

    // Acceptance scenario: a user holding only the coarse ADV wildcard.
    #[test]
    fn test_adv_wildcard_user_end_to_end() {
        let grants = GrantSet::new(vec!["admin.adv.*".to_string()], Vec::new());
        let visible = filter_catalog(&CATALOG, &grants);

        // The ADV module gate "admin.adv" is satisfied by the wildcard,
        // and so is every finer-grained item below it.
        let adv = visible.modules.iter().find(|m| m.id == "adv").unwrap();
        assert!(adv
            .categories
            .iter()
            .flat_map(|c| &c.items)
            .any(|i| i.key == "adv_validation_bc"));

        // "Utilisateurs" sits behind "admin.view"/"admin.users.view" and
        // is gone before search ever runs.
        assert!(visible.find_item("admin_utilisateurs").is_none());
        assert!(visible.modules.iter().all(|m| m.id != "administration"));

        let labels: Vec<&str> = search(&visible, "valid")
            .iter()
            .map(|hit| hit.item_label)
            .collect();
        assert_eq!(labels, vec!["Validation Partenaires", "Validation BC"]);
    }
}
