//! Create Location Page
//!
//! Contact form, map picker, item selection and image upload, submitted as
//! one multipart request.

use leaflet_map::{LatLng, LeafletMap};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use reactive_stores::Store;
use web_sys::{Event, File, HtmlInputElement, SubmitEvent};

use crate::api;
use crate::app::AFTER_SUBMIT_PATH;
use crate::components::{Dropzone, ItemsGrid, PageHeader};
use crate::config::MapConfig;
use crate::form::{FormEvent, SubmitStatus};
use crate::state::{store_apply, store_begin_submit, CreateLocationState, CreateLocationStateStoreFields};

const SUCCESS_MESSAGE: &str = "Estabelecimento cadastrado com sucesso";

#[component]
pub fn CreateLocation() -> impl IntoView {
    let store = Store::new(CreateLocationState::default());
    let (selected_file, set_selected_file) = signal_local(None::<File>);
    let navigate = use_navigate();
    let map_config = MapConfig::default();

    // Load the catalog once on mount; a failed fetch leaves the grid empty
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_items().await {
                Ok(items) => {
                    log::info!("[CATALOG] Loaded {} items", items.len());
                    store.items().try_set(items);
                }
                Err(e) => log::warn!("[CATALOG] Failed to load items: {}", e),
            }
        });
    });

    let on_input = move |ev: Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        store_apply(&store, FormEvent::FieldChange { name: input.name(), value: input.value() });
    };

    let on_map_click = Callback::new(move |latlng: LatLng| {
        store_apply(&store, FormEvent::MapClick(latlng.into()));
    });
    let marker = Signal::derive(move || LatLng::from(store.form().read().position));

    let on_file_uploaded = Callback::new(move |file: File| {
        log::debug!("[UPLOAD] Selected {} ({} bytes)", file.name(), file.size());
        set_selected_file.set(Some(file));
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !store_begin_submit(&store) {
            log::debug!("[SUBMIT] Submit already in flight, ignoring");
            return;
        }

        let payload = store.form().read_untracked().payload(selected_file.get_untracked());
        log::info!(
            "[SUBMIT] Sending {:?} with items [{}], image: {}",
            payload.field("name").unwrap_or_default(),
            payload.field("items").unwrap_or_default(),
            payload.image.is_some()
        );
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::create_location(&payload).await {
                Ok(()) => {
                    log::info!("[SUBMIT] Location created");
                    if let Some(window) = web_sys::window() {
                        if let Err(e) = window.alert_with_message(SUCCESS_MESSAGE) {
                            log::warn!("[SUBMIT] Confirmation alert failed: {:?}", e);
                        }
                    }
                    navigate(AFTER_SUBMIT_PATH, Default::default());
                }
                Err(e) => {
                    log::error!("[SUBMIT] Failed to create location: {}", e);
                    store.status().try_set(SubmitStatus::Failed(e.to_string()));
                }
            }
        });
    };

    view! {
        <div id="page-create-location">
            <div class="content">
                <PageHeader back_link=true />

                <form on:submit=on_submit>
                    <h1>"Cadastro do " <br /> "local de coleta"</h1>

                    <fieldset>
                        <legend>
                            <h2>"Dados"</h2>
                        </legend>

                        <Dropzone on_file_uploaded=on_file_uploaded />

                        <div class="field">
                            <label for="name">"Nome da entidade"</label>
                            <input type="text" name="name" id="name" on:input=on_input />
                        </div>
                        <div class="field-group">
                            <div class="field">
                                <label for="email">"E-mail"</label>
                                <input type="email" name="email" id="email" on:input=on_input />
                            </div>
                            <div class="field">
                                <label for="whatsapp">"Whatsapp"</label>
                                <input type="text" name="whatsapp" id="whatsapp" on:input=on_input />
                            </div>
                        </div>
                    </fieldset>

                    <fieldset>
                        <legend>
                            <h2>"Endereço"</h2>
                            <span>"Marque o endereço no mapa"</span>
                        </legend>

                        <LeafletMap
                            center=map_config.center
                            zoom=map_config.zoom
                            tiles=map_config.tiles
                            marker=marker
                            on_click=on_map_click
                            class="leaflet-container"
                        />

                        <div class="field-group">
                            <div class="field">
                                <label for="city">"Cidade"</label>
                                <input type="text" name="city" id="city" on:input=on_input />
                            </div>
                            <div class="field">
                                <label for="uf">"Estado"</label>
                                <input type="text" name="uf" id="uf" on:input=on_input />
                            </div>
                        </div>
                    </fieldset>

                    <fieldset>
                        <legend>
                            <h2>"Itens coletados"</h2>
                            <span>"Você pode marcar um ou mais itens"</span>
                        </legend>

                        <ItemsGrid store=store />
                    </fieldset>

                    {move || {
                        let message = store.status().read().error().map(str::to_string);
                        message.map(|msg| view! {
                            <p class="submit-error">"Não foi possível cadastrar o local: " {msg}</p>
                        })
                    }}

                    <button type="submit" disabled=move || store.status().read().is_submitting()>
                        "Cadastrar local de coleta"
                    </button>
                </form>
            </div>
        </div>
    }
}
