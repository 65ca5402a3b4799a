//! Create-location Page Store
//!
//! Uses Leptos reactive_stores so the item grid, the marker and the submit
//! button each track only the field they read.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::form::{FormEvent, LocationForm, SubmitStatus};
use crate::models::Item;

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CreateLocationState {
    /// Catalog as fetched on mount; empty until (and unless) the fetch succeeds
    pub items: Vec<Item>,
    pub form: LocationForm,
    pub status: SubmitStatus,
}

pub type CreateLocationStore = Store<CreateLocationState>;

// ========================
// Store Helper Functions
// ========================

/// Apply one form event; unknown input names are logged and dropped
pub fn store_apply(store: &CreateLocationStore, event: FormEvent) {
    if let Err(e) = store.form().write().apply(event) {
        log::warn!("[FORM] {}", e);
    }
}

pub fn store_is_selected(store: &CreateLocationStore, item_id: u32) -> bool {
    store.form().read().is_selected(item_id)
}

/// Mark a submit as started; false when one is already in flight
pub fn store_begin_submit(store: &CreateLocationStore) -> bool {
    if store.status().read_untracked().is_submitting() {
        return false;
    }
    store.status().set(SubmitStatus::Submitting);
    true
}
