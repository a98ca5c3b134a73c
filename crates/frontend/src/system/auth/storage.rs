//! Session persistence in `localStorage`.

use contracts::system::auth::UserSession;
use web_sys::window;

const SESSION_KEY: &str = "auth_session";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Restore the stored session snapshot, if any. A value that fails to
/// parse is logged and treated as no session.
pub fn load_session() -> Option<UserSession> {
    let raw = get_local_storage()?.get_item(SESSION_KEY).ok()??;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(err) => {
            log::warn!("stored session is not valid JSON, ignoring: {err}");
            None
        }
    }
}

/// Clear the stored session.
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
