//! Coleta Frontend App
//!
//! Router with the landing page and the create-location flow.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

use crate::pages::{CreateLocation, Home};

pub const HOME_PATH: &str = "/";
pub const CREATE_LOCATION_PATH: &str = "/create-location";
/// Where a successful submit always lands
pub const AFTER_SUBMIT_PATH: &str = HOME_PATH;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=Home />
                <Route path=path!("/create-location") view=CreateLocation />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <A href=HOME_PATH>"Volta para home"</A>
        </div>
    }
}
