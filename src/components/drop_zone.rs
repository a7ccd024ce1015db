//! Drop Zone Component
//!
//! Image picker accepting a dropped file or a click-to-browse selection,
//! with a preview of the chosen image.

use leptos::html::Input;
use leptos::prelude::*;
use leptos_filedrop::{
    create_file_drop_signals, make_on_dragenter, make_on_dragleave, make_on_dragover, make_on_drop,
    make_on_input_change, ObjectUrl,
};
use web_sys::{File, MouseEvent};

use crate::controller::use_controller;

const IMAGE_ACCEPT: &str = "image/*";

/// Drop zone holding at most one image; a new file replaces the previous one
#[component]
pub fn DropZone() -> impl IntoView {
    let controller = use_controller();
    let fd = create_file_drop_signals();
    let (preview, set_preview) = signal(None::<String>);
    let object_url = StoredValue::new_local(None::<ObjectUrl>);
    let input_ref = NodeRef::<Input>::new();

    let accept_file = move |file: File| {
        if controller.is_submitting() {
            return;
        }
        let url = ObjectUrl::new(&file);
        set_preview.set(url.as_ref().map(|u| u.as_str().to_string()));
        // Replacing the old URL revokes it
        object_url.set_value(url);
        controller.attach_file(Some(file));
    };

    let open_picker = move |_: MouseEvent| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    on_cleanup(move || {
        object_url.try_update_value(|url| url.take());
    });

    view! {
        <div
            class=move || if fd.hovering_read.get() { "dropzone active" } else { "dropzone" }
            on:dragenter=make_on_dragenter(fd)
            on:dragover=make_on_dragover()
            on:dragleave=make_on_dragleave(fd)
            on:drop=make_on_drop(fd, IMAGE_ACCEPT, accept_file)
            on:click=open_picker
        >
            <input
                node_ref=input_ref
                type="file"
                accept=IMAGE_ACCEPT
                class="dropzone-input"
                on:change=make_on_input_change(IMAGE_ACCEPT, accept_file)
                on:click=|ev: MouseEvent| ev.stop_propagation()
            />
            {move || match preview.get() {
                Some(url) => view! { <img src=url alt="Imagem do estabelecimento" /> }.into_any(),
                None => view! {
                    <p>"Arraste a imagem do estabelecimento para cá, ou clique para selecionar."</p>
                }.into_any(),
            }}
        </div>
    }
}
