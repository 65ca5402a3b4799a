//! Dropzone Component
//!
//! Image upload area: click to browse or drop a file onto it.

use leptos::prelude::*;
use web_sys::{DragEvent, Event, File, HtmlInputElement, Url};

/// Single-image picker with a preview of the chosen file
#[component]
pub fn Dropzone(
    /// Called with the first accepted file
    #[prop(into)]
    on_file_uploaded: Callback<File>,
) -> impl IntoView {
    let (preview_url, set_preview_url) = signal(None::<String>);
    let (is_over, set_is_over) = signal(false);

    let accept_file = move |file: File| {
        if !file.type_().starts_with("image/") {
            log::warn!("[UPLOAD] Ignoring non-image file {} ({})", file.name(), file.type_());
            return;
        }
        match Url::create_object_url_with_blob(&file) {
            Ok(url) => {
                if let Some(old) = preview_url.get_untracked() {
                    let _ = Url::revoke_object_url(&old);
                }
                set_preview_url.set(Some(url));
            }
            Err(e) => log::warn!("[UPLOAD] No preview for {}: {:?}", file.name(), e),
        }
        on_file_uploaded.run(file);
    };

    let on_change = move |ev: Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            accept_file(file);
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_over.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_over.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);

        let dropped = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = dropped {
            accept_file(file);
        }
    };

    on_cleanup(move || {
        if let Some(url) = preview_url.get_untracked() {
            let _ = Url::revoke_object_url(&url);
        }
    });

    view! {
        <div
            class=move || if is_over.get() { "dropzone active" } else { "dropzone" }
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <label>
                <input type="file" accept="image/*" on:change=on_change />
                {move || match preview_url.get() {
                    Some(url) => view! { <img src=url alt="Imagem do estabelecimento" /> }.into_any(),
                    None => view! {
                        <p>
                            <span class="dropzone-icon">"⬆"</span>
                            "Imagem do estabelecimento"
                        </p>
                    }.into_any(),
                }}
            </label>
        </div>
    }
}
