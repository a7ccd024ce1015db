//! Home Page

use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::components::Header;
use crate::context::{use_app_context, Route};

#[component]
pub fn Home() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div id="page-home">
            <div class="content">
                <img src="public/logo.svg" alt="Ecoleta" class="logo" />

                <main>
                    <Header title="Seu marketplace de coleta de resíduos." />
                    <p>"Ajudamos pessoas a encontrarem pontos de coleta de forma eficiente."</p>

                    <a
                        href=Route::CreatePoint.path()
                        on:click=move |ev: MouseEvent| {
                            ev.prevent_default();
                            ctx.navigate(Route::CreatePoint);
                        }
                    >
                        <span>"→"</span>
                        <strong>"Cadastre um ponto de coleta"</strong>
                    </a>
                </main>
            </div>
        </div>
    }
}
