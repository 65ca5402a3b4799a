//! Leptos Leaflet Map
//!
//! Thin bindings to the global Leaflet `L` object plus a component that renders
//! a tile layer and a single marker. Clicking the map reports the coordinate;
//! the marker follows whatever position signal the caller passes in.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

#[wasm_bindgen]
extern "C" {
    type JsMap;
    type JsTileLayer;
    type JsMarker;
    type JsMouseEvent;
    type JsLatLng;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    fn leaflet_map(element: &HtmlElement) -> JsMap;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &JsMap, center: &JsValue, zoom: f64);

    #[wasm_bindgen(method)]
    fn on(this: &JsMap, event: &str, handler: &Closure<dyn FnMut(JsMouseEvent)>);

    #[wasm_bindgen(method)]
    fn remove(this: &JsMap);

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &JsValue) -> JsTileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &JsTileLayer, map: &JsMap);

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(position: &JsValue) -> JsMarker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_marker_to(this: &JsMarker, map: &JsMap);

    #[wasm_bindgen(method, js_name = setLatLng)]
    fn set_lat_lng(this: &JsMarker, position: &JsValue);

    #[wasm_bindgen(method, getter)]
    fn latlng(this: &JsMouseEvent) -> JsLatLng;

    #[wasm_bindgen(method, getter)]
    fn lat(this: &JsLatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    fn lng(this: &JsLatLng) -> f64;
}

/// Geographic coordinate as Leaflet reports it
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Leaflet accepts `[lat, lng]` arrays anywhere it takes a LatLng
    fn to_js(self) -> JsValue {
        js_sys::Array::of2(&self.lat.into(), &self.lng.into()).into()
    }
}

/// Tile server template and its attribution line
#[derive(Debug, Clone, PartialEq)]
pub struct TileSource {
    pub url_template: String,
    pub attribution: String,
}

impl TileSource {
    pub fn openstreetmap() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: r#"&copy; <a href="http://osm.org/copyright">OpenStreetMap</a> contributors"#
                .to_string(),
        }
    }
}

#[derive(Serialize)]
struct TileLayerOptions<'a> {
    attribution: &'a str,
}

/// Live Leaflet objects for one mounted map
struct MountedMap {
    map: JsMap,
    marker: JsMarker,
    // Leaflet keeps calling this until the map is removed
    _on_click: Closure<dyn FnMut(JsMouseEvent)>,
}

impl MountedMap {
    fn mount(
        element: &HtmlElement,
        center: LatLng,
        zoom: f64,
        tiles: &TileSource,
        position: LatLng,
        on_click: Callback<LatLng>,
    ) -> Self {
        let map = leaflet_map(element);
        map.set_view(&center.to_js(), zoom);

        match serde_wasm_bindgen::to_value(&TileLayerOptions { attribution: &tiles.attribution }) {
            Ok(options) => tile_layer(&tiles.url_template, &options).add_to(&map),
            Err(e) => log::warn!("[MAP] Tile layer options rejected: {}", e),
        }

        let marker = marker(&position.to_js());
        marker.add_marker_to(&map);

        let on_click = Closure::<dyn FnMut(JsMouseEvent)>::new(move |ev: JsMouseEvent| {
            let latlng = ev.latlng();
            on_click.run(LatLng::new(latlng.lat(), latlng.lng()));
        });
        map.on("click", &on_click);

        Self { map, marker, _on_click: on_click }
    }

    fn move_marker(&self, position: LatLng) {
        self.marker.set_lat_lng(&position.to_js());
    }
}

/// Leaflet map with one marker
///
/// The map is created once the container div is attached and removed again
/// when the component is cleaned up.
#[component]
pub fn LeafletMap(
    /// Initial view center
    center: LatLng,
    /// Initial zoom level
    zoom: f64,
    /// Where the marker sits
    #[prop(into)]
    marker: Signal<LatLng>,
    /// Called with the clicked coordinate
    #[prop(into)]
    on_click: Callback<LatLng>,
    #[prop(optional)] tiles: Option<TileSource>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();
    let mounted = StoredValue::new_local(None::<MountedMap>);
    let tiles = tiles.unwrap_or_else(TileSource::openstreetmap);

    Effect::new(move |_| {
        let position = marker.get();
        let Some(element) = container.get() else { return };

        if mounted.with_value(Option::is_none) {
            log::debug!("[MAP] Mounting Leaflet map at {:?}", center);
            let map = MountedMap::mount(&element, center, zoom, &tiles, position, on_click);
            mounted.set_value(Some(map));
        } else {
            mounted.with_value(|m| {
                if let Some(m) = m {
                    m.move_marker(position);
                }
            });
        }
    });

    on_cleanup(move || {
        if let Some(Some(m)) = mounted.try_update_value(Option::take) {
            m.map.remove();
        }
    });

    view! { <div node_ref=container class=class /> }
}
