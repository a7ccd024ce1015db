//! Location Selects Component
//!
//! Dependent UF / city dropdowns. Cities are refetched whenever the UF changes.

use leptos::prelude::*;

use crate::components::LoadNotice;
use crate::controller::use_controller;
use crate::models::UNSELECTED;
use crate::state::{Command, CreatePointStateStoreFields, DataSource};

#[component]
pub fn LocationSelects() -> impl IntoView {
    let controller = use_controller();
    let store = controller.store;

    let ufs = move || store.states().with(|s| s.entries());
    let cities = move || store.cities().with(|c| c.entries());
    let cities_loading = move || store.cities().with(|c| c.is_loading());
    let no_uf = move || store.selected_state().with(|uf| uf == UNSELECTED);

    let states_error = Signal::derive(move || store.states().with(|s| s.error().map(str::to_string)));
    let cities_error = Signal::derive(move || store.cities().with(|c| c.error().map(str::to_string)));

    view! {
        <div class="field-group">
            <div class="field">
                <label for="uf">"Estado (UF)"</label>
                <select
                    name="uf"
                    id="uf"
                    on:change=move |ev| controller.send(Command::SelectState(event_target_value(&ev)))
                >
                    <option value=UNSELECTED prop:selected=no_uf>"Selecione uma UF"</option>
                    <For
                        each=ufs
                        key=|uf| uf.clone()
                        children=move |uf| {
                            let code = uf.clone();
                            let is_selected = move || store.selected_state().with(|selected| *selected == code);
                            view! {
                                <option value=uf.clone() prop:selected=is_selected>{uf.clone()}</option>
                            }
                        }
                    />
                </select>
                <LoadNotice message=states_error source=DataSource::States />
            </div>

            <div class="field">
                <label for="city">"Cidade"</label>
                <select
                    name="city"
                    id="city"
                    disabled=move || no_uf() || cities_loading()
                    on:change=move |ev| controller.send(Command::SelectCity(event_target_value(&ev)))
                >
                    <option
                        value=UNSELECTED
                        prop:selected=move || store.selected_city().with(|city| city == UNSELECTED)
                    >
                        {move || if cities_loading() { "Carregando cidades..." } else { "Selecione uma cidade" }}
                    </option>
                    <For
                        each=cities
                        key=|city| city.clone()
                        children=move |city| {
                            let name = city.clone();
                            let is_selected = move || store.selected_city().with(|selected| *selected == name);
                            view! {
                                <option value=city.clone() prop:selected=is_selected>{city.clone()}</option>
                            }
                        }
                    />
                </select>
                <LoadNotice message=cities_error source=DataSource::Cities />
            </div>
        </div>
    }
}
