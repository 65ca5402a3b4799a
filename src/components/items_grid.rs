//! Items Grid Component
//!
//! Catalog items as toggleable tiles.

use leptos::prelude::*;

use crate::form::FormEvent;
use crate::models::Item;
use crate::state::{store_apply, store_is_selected, CreateLocationStateStoreFields, CreateLocationStore};

/// One tile per catalog item; selected tiles get the `selected` class
#[component]
pub fn ItemsGrid(store: CreateLocationStore) -> impl IntoView {
    view! {
        <ul class="items-grid">
            <For
                each=move || store.items().get()
                key=|item| item.id
                children=move |item: Item| {
                    let id = item.id;
                    view! {
                        <li
                            class=move || if store_is_selected(&store, id) { "selected" } else { "" }
                            on:click=move |_| store_apply(&store, FormEvent::ToggleItem(id))
                        >
                            <img src=item.image_url alt=item.title.clone() />
                            <span>{item.title}</span>
                        </li>
                    }
                }
            />
        </ul>
    }
}
