//! Landing Page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::CREATE_LOCATION_PATH;
use crate::components::PageHeader;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div id="page-home">
            <div class="content">
                <PageHeader />

                <main>
                    <h1>"Coleta Seletiva e reciclagem em geral."</h1>
                    <p>
                        "Reciclagem de materiais diversos, tais como, papel, plástico, metal, pilhas e baterias, etc."
                    </p>

                    <A href=CREATE_LOCATION_PATH>
                        <span class="cta-icon">"➜"</span>
                        <strong>"Cadastrar novo local de coleta"</strong>
                    </A>
                </main>
            </div>
        </div>
    }
}
