//! CreatePoint Page
//!
//! Collection point registration form. Owns the page controller and
//! provides it to the field components.

use leptos::prelude::*;
use web_sys::{MouseEvent, SubmitEvent};

use crate::components::{ContactFields, DropZone, ItemsGrid, LoadNotice, LocationSelects, PointMapView};
use crate::context::{use_app_context, Route};
use crate::controller::Controller;
use crate::state::{Command, CreatePointStateStoreFields, DataSource};

#[component]
pub fn CreatePoint() -> impl IntoView {
    let ctx = use_app_context();
    let controller = Controller::new(ctx);
    provide_context(controller);
    let store = controller.store;

    controller.start();
    on_cleanup(move || controller.shutdown());

    let submitting = move || store.phase().with(|p| p.is_submitting());
    let submit_error = move || store.phase().with(|p| p.error().map(str::to_string));
    let position_notice =
        Signal::derive(move || store.initial_position().with(|p| p.error().map(str::to_string)));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        controller.send(Command::Submit);
    };

    view! {
        <div id="page-create-point">
            <header>
                <img src="public/logo.svg" alt="Ecoleta" />
                <a
                    href=Route::Home.path()
                    on:click=move |ev: MouseEvent| {
                        ev.prevent_default();
                        ctx.navigate(Route::Home);
                    }
                >
                    "← Voltar para home"
                </a>
            </header>

            <form on:submit=on_submit>
                <h1>"Cadastro do " <br /> "ponto de coleta."</h1>

                <DropZone />

                <ContactFields />

                <fieldset>
                    <legend>
                        <h2>"Endereço"</h2>
                        <span>"Selecione o endereço no mapa"</span>
                    </legend>

                    <LoadNotice message=position_notice source=DataSource::Position />
                    <PointMapView />
                    <LocationSelects />
                </fieldset>

                <ItemsGrid />

                {move || submit_error().map(|message| view! {
                    <p class="form-error" role="alert">{message}</p>
                })}

                <button type="submit" disabled=submitting>
                    {move || if submitting() { "Cadastrando..." } else { "Cadastrar ponto de coleta" }}
                </button>
            </form>
        </div>
    }
}
