//! TopHeader component: application top bar.
//!
//! Hosts the brand, the mega-menu trigger and the user block.

use crate::navigation::use_navigation;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_session};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let nav = use_navigation();
    let (session, set_session) = use_session();

    let open_menu = move |_| nav.open_menu();

    let logout = move |_| {
        do_logout(set_session);
    };

    let has_session = move || session.with(|s| s.user.is_some());

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Optima ERP"</span>
            </div>

            <button class="top-header__menu-btn" on:click=open_menu title="Tous les modules (Ctrl+K)">
                {icon("search")}
                <span>"Modules"</span>
                <kbd class="top-header__kbd">"Ctrl+K"</kbd>
            </button>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || {
                            session.with(|s| {
                                s.user
                                    .as_ref()
                                    .map(|u| u.username.clone())
                                    .unwrap_or_else(|| "Invité".to_string())
                            })
                        }}
                    </span>
                </div>

                <Show when=has_session>
                    <button class="top-header__icon-btn" on:click=logout title="Déconnexion">
                        {icon("log-out")}
                    </button>
                </Show>
            </div>
        </div>
    }
}
