//! Tab strip: one clickable header per opened tab, with a close button.

use crate::layout::global_context::{AppGlobalContext, Tab};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TabStrip() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tab-strip">
            <For
                each=move || tabs_store.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab: Tab| {
                    let key_for_activate = tab.key.clone();
                    let key_for_close = tab.key.clone();
                    let key_for_active_check = tab.key.clone();
                    let is_active = move || {
                        tabs_store
                            .active
                            .with(|active| {
                                active.as_deref() == Some(key_for_active_check.as_str())
                            })
                    };

                    view! {
                        <div class="tab-strip__tab" class=("tab-strip__tab--active", is_active)>
                            <button
                                class="tab-strip__label"
                                on:click=move |_| tabs_store.activate_tab(&key_for_activate)
                            >
                                {tab.title.clone()}
                            </button>
                            <button
                                class="tab-strip__close"
                                title="Fermer l'onglet"
                                on:click=move |_| tabs_store.close_tab(&key_for_close)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
