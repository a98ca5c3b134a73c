//! TabPage component: wraps one opened tab's content.

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;

/// Renders a tab's content through the registry and toggles visibility
/// with a CSS class depending on whether the tab is active. Content stays
/// mounted while the tab is open so page state survives tab switches.
#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let tab_key_for_active_check = tab_key.clone();

    let is_active = move || {
        tabs_store
            .active
            .with(|active| active.as_deref() == Some(tab_key_for_active_check.as_str()))
    };

    let content = render_tab_content(&tab_key);

    view! {
        <div
            class="tabs__item"
            class=("tabs__item--hidden", move || !is_active())
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}
