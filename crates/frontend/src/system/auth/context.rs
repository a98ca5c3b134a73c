//! Session context: the permission/role snapshot of the current user.
//!
//! The host backend issues the snapshot at login; this layer only restores
//! it from storage and exposes it to the component tree. No session means
//! guest: empty grants, so every gated entry stays hidden.

use contracts::system::auth::UserSession;
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<UserSession>,
}

impl SessionState {
    /// User id used to namespace persisted preferences; `None` is guest.
    pub fn user_id(&self) -> Option<String> {
        self.user.as_ref().map(|u| u.id.clone())
    }
}

/// Session context provider component.
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let (session, set_session) = signal(SessionState {
        user: storage::load_session(),
    });

    provide_context(session);
    provide_context(set_session);

    children()
}

/// Hook to access the session state.
pub fn use_session() -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
    let session = use_context::<ReadSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");
    let set_session = use_context::<WriteSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");

    (session, set_session)
}

/// Drop the stored session and fall back to guest.
pub fn do_logout(set_session: WriteSignal<SessionState>) {
    storage::clear_session();
    set_session.set(SessionState::default());
}
