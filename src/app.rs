//! Ecoleta Frontend App
//!
//! Root component: provides navigation context and renders the current page.

use leptos::prelude::*;

use crate::components::{CreatePoint, Home};
use crate::context::{AppContext, Route};

#[component]
pub fn App() -> impl IntoView {
    let (route, set_route) = signal(Route::current());
    let ctx = AppContext::new((route, set_route));
    provide_context(ctx);

    // Back/forward buttons
    let popstate = window_event_listener(leptos::ev::popstate, move |_| ctx.sync_with_location());
    on_cleanup(move || popstate.remove());

    view! {
        <div class="app-layout">
            {move || match ctx.route.get() {
                Route::Home => view! { <Home /> }.into_any(),
                Route::CreatePoint => view! { <CreatePoint /> }.into_any(),
            }}
        </div>
    }
}
