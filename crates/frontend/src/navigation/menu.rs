//! The navigation surface: a full-screen mega-menu with a browse view,
//! live search over the permission-filtered catalog, and the recents and
//! favorites rails.

use leptos::html::Input;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

use super::catalog::{NavItem, CATALOG};
use super::dispatch;
use super::permissions::{filter_catalog, GrantSet};
use super::preferences::{ListKind, UserPreferences};
use super::search::{highlight, search};
use super::storage::LocalPreferencesStore;
use super::use_navigation;

/// Hosts the menu overlay and the global keyboard shortcuts:
/// Ctrl+K / Cmd+K toggles the surface, Escape clears the query when one is
/// typed and closes the surface otherwise.
#[component]
pub fn MegaMenuHost() -> impl IntoView {
    let nav = use_navigation();

    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let key = key_event.key();
            if (key_event.ctrl_key() || key_event.meta_key()) && (key == "k" || key == "K") {
                key_event.prevent_default();
                if nav.menu_open.get_untracked() {
                    nav.close_menu();
                } else {
                    nav.open_menu();
                }
            } else if key == "Escape" && nav.menu_open.get_untracked() {
                if nav.query.with_untracked(|q| q.is_empty()) {
                    nav.close_menu();
                } else {
                    nav.query.set(String::new());
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    view! {
        <Show when=move || nav.menu_open.get()>
            <MegaMenu />
        </Show>
    }
}

#[component]
pub fn MegaMenu() -> impl IntoView {
    let nav = use_navigation();
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let (session, _) = use_session();
    let store = LocalPreferencesStore;

    let (selected, set_selected) = signal(0usize);
    let input_ref = NodeRef::<Input>::new();

    // Catalog as the current grant set sees it. Recomputed whenever the
    // session changes; the static catalog itself is never touched.
    let visible_catalog = Memo::new(move |_| {
        let state = session.get();
        filter_catalog(&CATALOG, &GrantSet::from_session(state.user.as_ref()))
    });

    let results = Memo::new(move |_| search(&visible_catalog.get(), &nav.query.get()));

    // Load the stored lists for the current user when the surface opens,
    // and again if the logged-in user changes while it is open.
    Effect::new(move |_| {
        let prefs = UserPreferences::new(&store, session.with(|s| s.user_id()));
        nav.recents.set(prefs.load(ListKind::Recents));
        nav.favorites.set(prefs.load(ListKind::Favorites));
    });

    // Focus the search input as soon as it is mounted.
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    // Keep the selected result visible with nearest-edge scrolling.
    Effect::new(move |_| {
        let index = selected.get();
        if results.with(|r| r.is_empty()) {
            return;
        }
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(element) = document.get_element_by_id(&format!("nav-result-{index}")) {
                let options = ScrollIntoViewOptions::new();
                options.set_block(ScrollLogicalPosition::Nearest);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    });

    let activate = move |key: &'static str, label: &'static str| {
        let prefs = UserPreferences::new(&store, session.with_untracked(|s| s.user_id()));
        dispatch::navigate_to(key, label, &prefs, &nav, &tabs_store);
    };

    let toggle_favorite = move |key: &'static str| {
        let prefs = UserPreferences::new(&store, session.with_untracked(|s| s.user_id()));
        nav.favorites.set(prefs.toggle_favorite(key));
    };

    let remove_recent = move |key: &'static str| {
        let prefs = UserPreferences::new(&store, session.with_untracked(|s| s.user_id()));
        nav.recents.set(prefs.remove_recent(key));
    };

    let clear_recents = move |_| {
        let prefs = UserPreferences::new(&store, session.with_untracked(|s| s.user_id()));
        nav.recents.set(prefs.clear_recents());
    };

    let on_query_input = move |ev| {
        nav.query.set(event_target_value(&ev));
        set_selected.set(0);
    };

    // Arrow keys cycle through the results; Enter opens the selected one.
    // Escape is handled by the window-level listener in MegaMenuHost.
    let on_key = move |ev: KeyboardEvent| {
        let count = results.with_untracked(|r| r.len());
        if count == 0 {
            return;
        }
        match ev.key().as_str() {
            "ArrowDown" => {
                ev.prevent_default();
                set_selected.update(|i| *i = (*i + 1) % count);
            }
            "ArrowUp" => {
                ev.prevent_default();
                set_selected.update(|i| *i = (*i + count - 1) % count);
            }
            "Enter" => {
                ev.prevent_default();
                let index = selected.get_untracked();
                if let Some(hit) = results.with_untracked(|r| r.get(index).cloned()) {
                    activate(hit.item_key, hit.item_label);
                }
            }
            _ => {}
        }
    };

    let search_active = move || nav.query.with(|q| !q.trim().is_empty());

    // Stored keys resolved against the filtered catalog: entries the user
    // can no longer see stay persisted but are not rendered.
    let rail_items = move |keys: Vec<String>| -> Vec<NavItem> {
        let catalog = visible_catalog.get();
        keys.iter()
            .filter_map(|key| catalog.find_item(key).cloned())
            .collect()
    };

    let browse_view = move || {
        view! {
            <div class="mega-menu-browse">
                <aside class="mega-menu-rails">
                    <section class="mega-menu-rail">
                        <header class="mega-menu-rail-header">
                            <h4>{icon("clock")} <span>"Récents"</span></h4>
                            <Show when=move || nav.recents.with(|r| !r.is_empty())>
                                <button class="mega-menu-rail-clear" on:click=clear_recents>
                                    "Tout effacer"
                                </button>
                            </Show>
                        </header>
                        {move || {
                            let items = rail_items(nav.recents.get());
                            if items.is_empty() {
                                view! { <p class="mega-menu-rail-empty">"Aucune page visitée"</p> }
                                    .into_any()
                            } else {
                                items
                                    .into_iter()
                                    .map(|item| {
                                        let key = item.key;
                                        let label = item.label;
                                        view! {
                                            <div class="mega-menu-rail-entry">
                                                <button
                                                    class="mega-menu-rail-link"
                                                    on:click=move |_| activate(key, label)
                                                >
                                                    {icon(item.icon)}
                                                    <span>{label}</span>
                                                </button>
                                                <button
                                                    class="mega-menu-rail-remove"
                                                    title="Retirer des récents"
                                                    on:click=move |_| remove_recent(key)
                                                >
                                                    {icon("x")}
                                                </button>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </section>

                    <section class="mega-menu-rail">
                        <header class="mega-menu-rail-header">
                            <h4>{icon("star")} <span>"Favoris"</span></h4>
                        </header>
                        {move || {
                            let items = rail_items(nav.favorites.get());
                            if items.is_empty() {
                                view! { <p class="mega-menu-rail-empty">"Aucun favori épinglé"</p> }
                                    .into_any()
                            } else {
                                items
                                    .into_iter()
                                    .map(|item| {
                                        let key = item.key;
                                        let label = item.label;
                                        view! {
                                            <div class="mega-menu-rail-entry">
                                                <button
                                                    class="mega-menu-rail-link"
                                                    on:click=move |_| activate(key, label)
                                                >
                                                    {icon(item.icon)}
                                                    <span>{label}</span>
                                                </button>
                                                <button
                                                    class="mega-menu-rail-remove"
                                                    title="Retirer des favoris"
                                                    on:click=move |_| toggle_favorite(key)
                                                >
                                                    {icon("x")}
                                                </button>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </section>
                </aside>

                <div class="mega-menu-modules">
                    {move || {
                        visible_catalog
                            .get()
                            .modules
                            .into_iter()
                            .filter(|module| !module.categories.is_empty())
                            .map(|module| {
                                view! {
                                    <section class="mega-menu-module">
                                        <h3 class="mega-menu-module-title">
                                            {icon(module.icon)}
                                            <span>{module.label}</span>
                                        </h3>
                                        <p class="mega-menu-module-desc">{module.description}</p>
                                        {module
                                            .categories
                                            .into_iter()
                                            .map(|category| {
                                                view! {
                                                    <div class="mega-menu-category">
                                                        <h4 class="mega-menu-category-title">
                                                            {category.title}
                                                        </h4>
                                                        {category
                                                            .items
                                                            .into_iter()
                                                            .map(|item| {
                                                                let key = item.key;
                                                                let label = item.label;
                                                                let is_favorite = move || {
                                                                    nav.favorites
                                                                        .with(|f| f.iter().any(|k| k == key))
                                                                };
                                                                view! {
                                                                    <div class="mega-menu-item">
                                                                        <button
                                                                            class="mega-menu-item-link"
                                                                            on:click=move |_| activate(key, label)
                                                                        >
                                                                            {icon(item.icon)}
                                                                            <span>{label}</span>
                                                                        </button>
                                                                        <button
                                                                            class="mega-menu-item-star"
                                                                            class=("mega-menu-item-star--active", is_favorite)
                                                                            title="Épingler aux favoris"
                                                                            on:click=move |_| toggle_favorite(key)
                                                                        >
                                                                            {icon("star")}
                                                                        </button>
                                                                    </div>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </section>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        }
    };

    view! {
        <div class="mega-menu-overlay" on:click=move |_| nav.close_menu()>
            <div class="mega-menu" on:click=|ev| ev.stop_propagation()>
                <div class="mega-menu-search">
                    {icon("search")}
                    <input
                        type="text"
                        class="mega-menu-search-input"
                        placeholder="Rechercher un module, une catégorie, une page..."
                        node_ref=input_ref
                        prop:value=move || nav.query.get()
                        on:input=on_query_input
                        on:keydown=on_key
                    />
                    <button class="mega-menu-close" title="Fermer" on:click=move |_| nav.close_menu()>
                        {icon("x")}
                    </button>
                </div>

                <Show when=search_active fallback=browse_view>
                    {move || {
                        let query = nav.query.get();
                        let hits = results.get();
                        if hits.is_empty() {
                            view! {
                                <div class="mega-menu-empty">
                                    "Aucun résultat pour « " {query.trim().to_string()} " »"
                                </div>
                            }
                            .into_any()
                        } else {
                            view! {
                                <div class="mega-menu-results">
                                    {hits
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, hit)| {
                                            let key = hit.item_key;
                                            let label = hit.item_label;
                                            view! {
                                                <button
                                                    id=format!("nav-result-{index}")
                                                    class="mega-menu-result"
                                                    class=(
                                                        "mega-menu-result--selected",
                                                        move || selected.get() == index,
                                                    )
                                                    on:click=move |_| activate(key, label)
                                                    on:mouseenter=move |_| set_selected.set(index)
                                                >
                                                    <span class="mega-menu-result-label">
                                                        {highlighted(label, &query)}
                                                    </span>
                                                    <span class="mega-menu-result-path">
                                                        {highlighted(hit.module_label, &query)}
                                                        <span class="mega-menu-result-sep">"›"</span>
                                                        {highlighted(hit.category_title, &query)}
                                                    </span>
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                            .into_any()
                        }
                    }}
                </Show>
            </div>
        </div>
    }
}

/// Renders `text` with every case-insensitive occurrence of `query`
/// wrapped in a `<mark>`.
fn highlighted(text: &str, query: &str) -> AnyView {
    highlight(text, query)
        .into_iter()
        .map(|(segment, is_match)| {
            if is_match {
                view! { <mark class="mega-menu-mark">{segment}</mark> }.into_any()
            } else {
                view! { <span>{segment}</span> }.into_any()
            }
        })
        .collect_view()
        .into_any()
}
