//! Navigation dispatch: item key → tab key, plus the selection side effects.

use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;

use super::preferences::{PreferencesStore, UserPreferences};
use super::NavigationContext;

/// Fallback destination for unmapped item keys.
pub const DEFAULT_ROUTE: &str = "d100_accueil";

/// Fixed item-key → tab-key table. Single source of truth for where each
/// catalog entry leads; unknown keys fall back to the home dashboard.
pub fn route_for_key(key: &str) -> &'static str {
    match key {
        "accueil" => "d100_accueil",

        // ── ADV ──────────────────────────────────────────────────────────
        "adv_dashboard" => "d200_adv_dashboard",
        "adv_encours" => "a301_encours_credits",
        "adv_partenaires" => "a302_partenaires",
        "adv_validation_partenaires" => "a303_validation_partenaires",
        "adv_validation_bc" => "a304_validation_bc",
        "adv_blocages" => "a305_blocages_clients",

        // ── Logistique ───────────────────────────────────────────────────
        "log_bons_livraison" => "a401_bons_livraison",
        "log_tournees" => "a402_tournees",
        "log_dispatch" => "a403_dispatch",
        // Late deliveries open the delivery note list, filtered there.
        "log_retards" => "a401_bons_livraison",
        "log_historique" => "a404_historique_expeditions",

        // ── Stocks ───────────────────────────────────────────────────────
        "stock_etat" => "a501_etat_stock",
        "stock_mouvements" => "a502_mouvements_stock",
        "stock_inventaires" => "a503_inventaires",
        "stock_ajustements" => "a504_ajustements",

        // ── Paramétrage ──────────────────────────────────────────────────
        "param_champs" => "p601_champs_personnalises",
        "param_modeles_import" => "p602_modeles_import",
        "param_modeles_export" => "p603_modeles_export",
        "param_executions" => "p604_executions",

        // ── Administration ───────────────────────────────────────────────
        "admin_utilisateurs" => "s901_utilisateurs",
        "admin_roles" => "s902_roles",
        "admin_audit" => "s903_audit",

        _ => DEFAULT_ROUTE,
    }
}

/// Selection side effects, in order: record the visit (persist + publish),
/// close the menu (clears query and transient state), then open/activate
/// the target tab. The tab store mirrors the active tab into the URL.
///
/// Repeated identical calls are fine: each one re-records the visit and
/// re-activates the tab.
pub fn navigate_to<S: PreferencesStore>(
    item_key: &str,
    item_label: &str,
    prefs: &UserPreferences<'_, S>,
    nav: &NavigationContext,
    tabs: &AppGlobalContext,
) {
    let recents = prefs.record_visit(item_key);
    nav.recents.set(recents);
    nav.close_menu();
    tabs.open_tab(route_for_key(item_key), item_label);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::catalog::CATALOG;

    #[test]
    fn test_known_keys_map_to_their_tab() {
        assert_eq!(route_for_key("adv_validation_bc"), "a304_validation_bc");
        assert_eq!(route_for_key("admin_utilisateurs"), "s901_utilisateurs");
        // Alias: both entries land on the delivery note list.
        assert_eq!(route_for_key("log_retards"), route_for_key("log_bons_livraison"));
    }

    #[test]
    fn test_unknown_key_falls_back_to_default() {
        assert_eq!(route_for_key("renamed_or_removed"), DEFAULT_ROUTE);
        assert_eq!(route_for_key(""), DEFAULT_ROUTE);
    }

    #[test]
    fn test_navigate_to_records_closes_then_opens() {
        use std::cell::RefCell;
        use std::collections::HashMap;

        #[derive(Default)]
        struct MapStore(RefCell<HashMap<String, String>>);

        impl PreferencesStore for MapStore {
            fn get(&self, key: &str) -> Option<String> {
                self.0.borrow().get(key).cloned()
            }
            fn set(&self, key: &str, value: &str) {
                self.0.borrow_mut().insert(key.to_string(), value.to_string());
            }
            fn remove(&self, key: &str) {
                self.0.borrow_mut().remove(key);
            }
        }

        let store = MapStore::default();
        let prefs = UserPreferences::new(&store, Some("42".to_string()));
        let nav = NavigationContext::new();
        let tabs = AppGlobalContext::new();

        nav.open_menu();
        nav.query.set("valid".to_string());

        navigate_to("adv_validation_bc", "Validation BC", &prefs, &nav, &tabs);

        // Visit recorded: persisted and published.
        assert_eq!(nav.recents.get_untracked(), vec!["adv_validation_bc"]);
        assert!(store.get("nav-recents-user-42").is_some());
        // Surface closed, transient query gone.
        assert!(!nav.menu_open.get_untracked());
        assert!(nav.query.with_untracked(|q| q.is_empty()));
        // Target tab opened and active.
        assert_eq!(
            tabs.active.get_untracked().as_deref(),
            Some("a304_validation_bc")
        );
        assert!(tabs.opened.with_untracked(|opened| {
            opened
                .iter()
                .any(|tab| tab.key == "a304_validation_bc" && tab.title == "Validation BC")
        }));
    }

    #[test]
    fn test_every_catalog_item_has_an_explicit_route() {
        for module in &CATALOG.modules {
            for category in &module.categories {
                for item in &category.items {
                    let route = route_for_key(item.key);
                    assert!(
                        route != DEFAULT_ROUTE || item.key == "accueil",
                        "item '{}' is missing from the route table",
                        item.key
                    );
                }
            }
        }
    }
}
