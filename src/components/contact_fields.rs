//! Contact Fields Component
//!
//! Name, email and WhatsApp inputs of the point form.

use leptos::prelude::*;
use web_sys::HtmlInputElement;

use crate::controller::use_controller;
use crate::models::FormField;
use crate::state::{Command, CreatePointStateStoreFields};

#[component]
pub fn ContactFields() -> impl IntoView {
    let controller = use_controller();
    let store = controller.store;

    // Inputs are keyed by their `name` attribute
    let on_input = move |ev: web_sys::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        if let Some(field) = FormField::from_name(&input.name()) {
            controller.send(Command::EditField(field, input.value()));
        }
    };
    let value = move |field: FormField| move || store.contact().with(|c| c.get(field).to_string());

    view! {
        <fieldset>
            <legend>
                <h2>"Dados"</h2>
            </legend>

            <div class="field">
                <label for="name">"Nome da entidade"</label>
                <input
                    type="text"
                    name=FormField::Name.as_str()
                    id="name"
                    prop:value=value(FormField::Name)
                    on:input=on_input
                />
            </div>

            <div class="field-group">
                <div class="field">
                    <label for="email">"E-mail"</label>
                    <input
                        type="email"
                        name=FormField::Email.as_str()
                        id="email"
                        prop:value=value(FormField::Email)
                        on:input=on_input
                    />
                </div>
                <div class="field">
                    <label for="whatsapp">"Whatsapp"</label>
                    <input
                        type="text"
                        name=FormField::Whatsapp.as_str()
                        id="whatsapp"
                        prop:value=value(FormField::Whatsapp)
                        on:input=on_input
                    />
                </div>
            </div>
        </fieldset>
    }
}
