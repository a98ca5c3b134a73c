use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::navigation::NavigationContext;
use crate::system::auth::context::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the tab workspace store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Navigation surface state: menu visibility, query, recents, favorites.
    provide_context(NavigationContext::new());

    view! {
        <SessionProvider>
            <AppShell />
        </SessionProvider>
    }
}
