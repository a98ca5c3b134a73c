use serde::{Deserialize, Serialize};

/// Snapshot of the authenticated user as delivered by the host backend.
///
/// The navigation layer only reads `id`, `permissions` and `roles`; the rest
/// is display data for the top header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    /// Dot-segmented capability identifiers, e.g. `admin.adv.dashboard`.
    /// A grant ending in `.*` covers every finer-grained permission below it.
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Role names. `admin` and `super-admin` bypass all permission checks.
    #[serde(default)]
    pub roles: Vec<String>,
}
