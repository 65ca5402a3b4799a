use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::HOME_PATH;

/// Logo header, optionally with a link back to the landing page
#[component]
pub fn PageHeader(#[prop(optional)] back_link: bool) -> impl IntoView {
    view! {
        <header>
            <img src="public/logo.svg" alt="Coleta Seletiva" />
            <Show when=move || back_link>
                <A href=HOME_PATH>
                    <span class="back-arrow">"←"</span>
                    "Volta para home"
                </A>
            </Show>
        </header>
    }
}
