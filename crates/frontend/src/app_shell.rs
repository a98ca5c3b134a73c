//! Application shell: top header, mega-menu host and the tab workspace.

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::{TabPage, TabStrip};
use crate::layout::top_header::TopHeader;
use crate::navigation::dispatch::DEFAULT_ROUTE;
use crate::navigation::MegaMenuHost;
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Restore the active tab from the URL; runs once on creation.
    tabs_store.init_router_integration();

    // The home tab is always available as a landing point.
    if tabs_store.opened.with_untracked(|tabs| tabs.is_empty()) {
        tabs_store.open_tab(DEFAULT_ROUTE, "Accueil");
    }

    view! {
        <div class="app-layout">
            <TopHeader />
            <MegaMenuHost />

            <div class="app-main">
                <TabStrip />
                <div class="app-content">
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                </div>
            </div>
        </div>
    }
}
