//! Static navigation catalog: modules → categories → items.
//!
//! The catalog is defined once at load time and never mutated. Each item
//! carries a stable opaque `key` used by the permission engine, the route
//! table and the recents/favorites store; the `label` is display and
//! search text only, so renaming a label never breaks routing.

use once_cell::sync::Lazy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Stable identity, unique across the whole catalog.
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    /// `None` means the item is visible to everyone.
    pub permission: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavCategory {
    pub title: &'static str,
    pub items: Vec<NavItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavModule {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Gate for the whole module; `None` means ungated.
    pub permission: Option<&'static str>,
    pub categories: Vec<NavCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationCatalog {
    pub modules: Vec<NavModule>,
}

impl NavigationCatalog {
    pub fn find_item(&self, key: &str) -> Option<&NavItem> {
        self.modules
            .iter()
            .flat_map(|module| &module.categories)
            .flat_map(|category| &category.items)
            .find(|item| item.key == key)
    }

    pub fn item_count(&self) -> usize {
        self.modules
            .iter()
            .flat_map(|module| &module.categories)
            .map(|category| category.items.len())
            .sum()
    }
}

fn item(
    key: &'static str,
    label: &'static str,
    icon: &'static str,
    permission: Option<&'static str>,
) -> NavItem {
    NavItem {
        key,
        label,
        icon,
        permission,
    }
}

/// Process-wide catalog instance. Functions that operate on the catalog
/// take it as an argument so they stay testable with synthetic catalogs.
pub static CATALOG: Lazy<NavigationCatalog> = Lazy::new(default_catalog);

fn default_catalog() -> NavigationCatalog {
    NavigationCatalog {
        modules: vec![
            NavModule {
                id: "accueil",
                label: "Accueil",
                description: "Page d'accueil et raccourcis",
                icon: "home",
                permission: None,
                categories: vec![NavCategory {
                    title: "Général",
                    items: vec![item("accueil", "Accueil", "home", None)],
                }],
            },
            NavModule {
                id: "adv",
                label: "ADV",
                description: "Administration des ventes : partenaires, encours et validation des commandes",
                icon: "credit-card",
                permission: Some("admin.adv"),
                categories: vec![
                    NavCategory {
                        title: "Pilotage",
                        items: vec![
                            item(
                                "adv_dashboard",
                                "Tableau de bord ADV",
                                "bar-chart",
                                Some("admin.adv.dashboard"),
                            ),
                            item(
                                "adv_encours",
                                "Encours & crédits",
                                "dollar-sign",
                                Some("admin.adv.encours.view"),
                            ),
                        ],
                    },
                    NavCategory {
                        title: "Partenaires",
                        items: vec![
                            item(
                                "adv_partenaires",
                                "Partenaires",
                                "contact",
                                Some("admin.adv.partners.view"),
                            ),
                            item(
                                "adv_validation_partenaires",
                                "Validation Partenaires",
                                "user-check",
                                Some("admin.adv.partners.validate"),
                            ),
                        ],
                    },
                    NavCategory {
                        title: "Commandes",
                        items: vec![
                            item(
                                "adv_validation_bc",
                                "Validation BC",
                                "file-check",
                                Some("admin.adv.bc.validate"),
                            ),
                            item(
                                "adv_blocages",
                                "Blocages clients",
                                "shield",
                                Some("admin.adv.blocking.view"),
                            ),
                        ],
                    },
                ],
            },
            NavModule {
                id: "logistique",
                label: "Logistique",
                description: "Bons de livraison et tournées dispatcheur",
                icon: "truck",
                permission: Some("logistics.view"),
                categories: vec![
                    NavCategory {
                        title: "Expéditions",
                        items: vec![
                            item(
                                "log_bons_livraison",
                                "Bons de livraison",
                                "file-text",
                                Some("logistics.bl.view"),
                            ),
                            item(
                                "log_tournees",
                                "Tournées",
                                "map",
                                Some("logistics.rounds.view"),
                            ),
                            item(
                                "log_dispatch",
                                "Dispatch",
                                "layers",
                                Some("logistics.dispatch.view"),
                            ),
                        ],
                    },
                    NavCategory {
                        title: "Suivi",
                        items: vec![
                            item(
                                "log_retards",
                                "Livraisons en retard",
                                "clock",
                                Some("logistics.bl.late"),
                            ),
                            // Ungated: every user of the module sees the history.
                            item(
                                "log_historique",
                                "Historique expéditions",
                                "history",
                                None,
                            ),
                        ],
                    },
                ],
            },
            NavModule {
                id: "stocks",
                label: "Stocks",
                description: "État des stocks, mouvements et inventaires",
                icon: "package",
                permission: Some("stock.view"),
                categories: vec![
                    NavCategory {
                        title: "Consultation",
                        items: vec![
                            item(
                                "stock_etat",
                                "État du stock",
                                "table",
                                Some("stock.state.view"),
                            ),
                            item(
                                "stock_mouvements",
                                "Mouvements de stock",
                                "list",
                                Some("stock.movements.view"),
                            ),
                        ],
                    },
                    NavCategory {
                        title: "Opérations",
                        items: vec![
                            item(
                                "stock_inventaires",
                                "Inventaires",
                                "clipboard",
                                Some("stock.inventory.manage"),
                            ),
                            item(
                                "stock_ajustements",
                                "Ajustements",
                                "sliders",
                                Some("stock.adjust"),
                            ),
                        ],
                    },
                ],
            },
            NavModule {
                id: "parametrage",
                label: "Paramétrage",
                description: "Champs personnalisés et modèles d'import/export",
                icon: "settings",
                permission: None,
                categories: vec![
                    NavCategory {
                        title: "Champs personnalisés",
                        items: vec![item(
                            "param_champs",
                            "Champs personnalisés",
                            "list",
                            Some("settings.custom_fields.manage"),
                        )],
                    },
                    NavCategory {
                        title: "Échanges de données",
                        items: vec![
                            item(
                                "param_modeles_import",
                                "Modèles d'import",
                                "import",
                                Some("settings.templates.import"),
                            ),
                            item(
                                "param_modeles_export",
                                "Modèles d'export",
                                "export",
                                Some("settings.templates.export"),
                            ),
                            item(
                                "param_executions",
                                "Exécutions de traitements",
                                "clock",
                                None,
                            ),
                        ],
                    },
                ],
            },
            NavModule {
                id: "administration",
                label: "Administration",
                description: "Utilisateurs, rôles et journal d'audit",
                icon: "shield",
                permission: Some("admin.view"),
                categories: vec![
                    NavCategory {
                        title: "Comptes",
                        items: vec![
                            item(
                                "admin_utilisateurs",
                                "Utilisateurs",
                                "users",
                                Some("admin.users.view"),
                            ),
                            item(
                                "admin_roles",
                                "Rôles & permissions",
                                "key",
                                Some("admin.roles.manage"),
                            ),
                        ],
                    },
                    NavCategory {
                        title: "Traçabilité",
                        items: vec![item(
                            "admin_audit",
                            "Journal d'audit",
                            "history",
                            Some("admin.audit.view"),
                        )],
                    },
                ],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_item_keys_are_unique() {
        let mut seen = HashSet::new();
        for module in &CATALOG.modules {
            for category in &module.categories {
                for item in &category.items {
                    assert!(seen.insert(item.key), "duplicate item key: {}", item.key);
                }
            }
        }
        assert_eq!(seen.len(), CATALOG.item_count());
    }

    #[test]
    fn test_find_item() {
        let item = CATALOG.find_item("adv_validation_bc").unwrap();
        assert_eq!(item.label, "Validation BC");
        assert_eq!(item.permission, Some("admin.adv.bc.validate"));

        assert!(CATALOG.find_item("no_such_key").is_none());
    }

    #[test]
    fn test_ungated_items_exist() {
        let ungated = CATALOG
            .modules
            .iter()
            .flat_map(|m| &m.categories)
            .flat_map(|c| &c.items)
            .filter(|i| i.permission.is_none())
            .count();
        assert!(ungated > 0);
    }
}
