//! Items Grid Component
//!
//! Catalog of collection item categories; clicking a card toggles it.

use leptos::prelude::*;

use crate::components::LoadNotice;
use crate::controller::use_controller;
use crate::models::CatalogItem;
use crate::state::{Command, CreatePointStateStoreFields, DataSource};

#[component]
pub fn ItemsGrid() -> impl IntoView {
    let controller = use_controller();
    let store = controller.store;

    let items = move || store.items().with(|i| i.entries());
    let loading = move || store.items().with(|i| i.is_loading());
    let items_error = Signal::derive(move || store.items().with(|i| i.error().map(str::to_string)));

    view! {
        <fieldset>
            <legend>
                <h2>"Ítens de coleta"</h2>
                <span>"Selecione um ou mais ítens abaixo"</span>
            </legend>

            <LoadNotice message=items_error source=DataSource::Items />
            <Show when=loading>
                <p class="loading">"Carregando ítens..."</p>
            </Show>

            <ul class="items-grid">
                <For
                    each=items
                    key=|item| item.id
                    children=move |item: CatalogItem| {
                        let id = item.id;
                        let selected = move || store.selected_items().with(|s| s.contains(id));
                        view! {
                            <li
                                class=move || if selected() { "selected" } else { "" }
                                on:click=move |_| controller.send(Command::ToggleItem(id))
                            >
                                <img src=item.image_url.clone() alt=item.name.clone() />
                                <span>{item.name.clone()}</span>
                            </li>
                        }
                    }
                />
            </ul>
        </fieldset>
    }
}
