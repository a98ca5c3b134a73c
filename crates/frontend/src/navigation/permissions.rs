//! Permission engine: decides what the current user may see.
//!
//! Matching is string based over dot-segmented permission identifiers.
//! A coarse grant ending in `.*` satisfies every finer requirement below
//! it, and holding a finer permission implicitly passes a coarser check.

use std::collections::HashSet;

use contracts::system::auth::UserSession;

use super::catalog::{NavCategory, NavModule, NavigationCatalog};

/// Roles that bypass every permission check.
pub const BYPASS_ROLES: [&str; 2] = ["admin", "super-admin"];

/// Permissions and roles held by the current user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrantSet {
    permissions: HashSet<String>,
    roles: HashSet<String>,
}

impl GrantSet {
    pub fn new<P, R>(permissions: P, roles: R) -> Self
    where
        P: IntoIterator<Item = String>,
        R: IntoIterator<Item = String>,
    {
        Self {
            permissions: permissions.into_iter().collect(),
            roles: roles.into_iter().collect(),
        }
    }

    /// No session means no grants: every gated entry stays hidden.
    pub fn from_session(session: Option<&UserSession>) -> Self {
        match session {
            Some(user) => Self::new(user.permissions.iter().cloned(), user.roles.iter().cloned()),
            None => Self::default(),
        }
    }

    /// Whether the grant set satisfies `required`.
    ///
    /// Evaluation order: no restriction, role bypass, literal membership,
    /// hierarchical wildcard (`admin.adv.*` grants `admin.adv.dashboard`),
    /// then reverse prefix (`admin.adv.dashboard.extra` passes a check for
    /// `admin.adv.dashboard`).
    pub fn allows(&self, required: Option<&str>) -> bool {
        let required = match required {
            None => return true,
            Some(r) if r.is_empty() => return true,
            Some(r) => r,
        };

        if BYPASS_ROLES.iter().any(|role| self.roles.contains(*role)) {
            return true;
        }

        if self.permissions.contains(required) {
            return true;
        }

        let segments: Vec<&str> = required.split('.').collect();
        for len in (1..=segments.len()).rev() {
            let candidate = format!("{}.*", segments[..len].join("."));
            if self.permissions.contains(&candidate) {
                return true;
            }
        }

        let prefix = format!("{required}.");
        self.permissions
            .iter()
            .any(|granted| granted.starts_with(&prefix))
    }
}

/// Reduces the catalog to what `grants` may see.
///
/// A module is kept iff its own permission is allowed; within a kept
/// module, items are filtered by their own permission and categories left
/// empty are dropped. Catalog order is preserved throughout. Pure and
/// idempotent; the static catalog is never mutated.
pub fn filter_catalog(catalog: &NavigationCatalog, grants: &GrantSet) -> NavigationCatalog {
    let modules = catalog
        .modules
        .iter()
        .filter(|module| grants.allows(module.permission))
        .map(|module| {
            let categories = module
                .categories
                .iter()
                .map(|category| NavCategory {
                    title: category.title,
                    items: category
                        .items
                        .iter()
                        .filter(|item| grants.allows(item.permission))
                        .cloned()
                        .collect(),
                })
                .filter(|category| !category.items.is_empty())
                .collect();
            NavModule {
                categories,
                ..module.clone()
            }
        })
        .collect();

    NavigationCatalog { modules }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::catalog::CATALOG;

    fn grants(permissions: &[&str]) -> GrantSet {
        GrantSet::new(permissions.iter().map(|p| p.to_string()), Vec::new())
    }

    #[test]
    fn test_unrestricted_is_always_allowed() {
        let empty = GrantSet::default();
        assert!(empty.allows(None));
        assert!(empty.allows(Some("")));
        assert!(!empty.allows(Some("admin.adv.dashboard")));
    }

    #[test]
    fn test_literal_match() {
        let g = grants(&["admin.adv.dashboard"]);
        assert!(g.allows(Some("admin.adv.dashboard")));
        assert!(!g.allows(Some("admin.adv.encours.view")));
    }

    #[test]
    fn test_hierarchical_wildcard() {
        let g = grants(&["admin.adv.*"]);
        assert!(g.allows(Some("admin.adv.dashboard")));
        assert!(g.allows(Some("admin.adv.bc.validate")));
        assert!(!g.allows(Some("admin.users.view")));

        let top = grants(&["admin.*"]);
        assert!(top.allows(Some("admin.adv.bc.validate")));
    }

    #[test]
    fn test_reverse_prefix() {
        // Holding a finer permission passes the coarser check.
        let g = grants(&["admin.adv.dashboard.extra"]);
        assert!(g.allows(Some("admin.adv.dashboard")));
        assert!(!g.allows(Some("admin.adv.dash")));
    }

    #[test]
    fn test_denied() {
        let g = grants(&["admin.sales.view"]);
        assert!(!g.allows(Some("admin.adv.dashboard")));
    }

    #[test]
    fn test_admin_role_bypasses_everything() {
        for role in ["admin", "super-admin"] {
            let g = GrantSet::new(Vec::new(), vec![role.to_string()]);
            assert!(g.allows(Some("admin.adv.dashboard")));
            assert!(g.allows(Some("anything.at.all")));
        }

        let other = GrantSet::new(Vec::new(), vec!["manager".to_string()]);
        assert!(!other.allows(Some("admin.adv.dashboard")));
    }

    #[test]
    fn test_filter_drops_gated_modules_and_items() {
        let g = grants(&["admin.adv.*"]);
        let filtered = filter_catalog(&CATALOG, &g);

        assert!(filtered.modules.iter().any(|m| m.id == "adv"));
        assert!(filtered.modules.iter().all(|m| m.id != "administration"));
        assert!(filtered.modules.iter().all(|m| m.id != "stocks"));

        // Ungated module survives, but only its ungated items remain.
        let param = filtered
            .modules
            .iter()
            .find(|m| m.id == "parametrage")
            .unwrap();
        let keys: Vec<&str> = param
            .categories
            .iter()
            .flat_map(|c| &c.items)
            .map(|i| i.key)
            .collect();
        assert_eq!(keys, vec!["param_executions"]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let g = GrantSet::new(Vec::new(), vec!["super-admin".to_string()]);
        let filtered = filter_catalog(&CATALOG, &g);
        let original: Vec<&str> = CATALOG.modules.iter().map(|m| m.id).collect();
        let kept: Vec<&str> = filtered.modules.iter().map(|m| m.id).collect();
        assert_eq!(original, kept);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let g = grants(&["admin.adv.*", "stock.view", "stock.state.view"]);
        let once = filter_catalog(&CATALOG, &g);
        let twice = filter_catalog(&once, &g);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_grants_fail_closed() {
        let filtered = filter_catalog(&CATALOG, &GrantSet::default());
        // Only ungated content remains.
        for module in &filtered.modules {
            assert!(module.permission.is_none(), "module {} leaked", module.id);
            for category in &module.categories {
                for item in &category.items {
                    assert!(item.permission.is_none(), "item {} leaked", item.key);
                }
            }
        }
        assert!(filtered.find_item("accueil").is_some());
    }
}
