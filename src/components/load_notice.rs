//! Load Notice Component
//!
//! Inline, non-fatal notice for a data source that failed, with a retry action.

use leptos::prelude::*;

use crate::controller::use_controller;
use crate::state::{Command, DataSource};

/// Shows `message` when present; retry reloads `source`
#[component]
pub fn LoadNotice(
    #[prop(into)] message: Signal<Option<String>>,
    source: DataSource,
) -> impl IntoView {
    let controller = use_controller();

    view! {
        <Show when=move || message.with(|m| m.is_some())>
            <div class="load-notice" role="status">
                <span>{move || message.get().unwrap_or_default()}</span>
                <button
                    type="button"
                    class="retry-btn"
                    on:click=move |_| controller.send(Command::Reload(source))
                >
                    "Tentar novamente"
                </button>
            </div>
        </Show>
    }
}
