//! Leaflet Bindings
//!
//! Minimal FFI to the global `L` object loaded by `index.html`, plus a
//! [`PointMap`] wrapper owning one map, its marker and the click handler.

use serde::{Deserialize, Serialize};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::models::Coordinates;

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn new_map(container: &HtmlElement) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method, js_name = getZoom)]
    fn get_zoom(this: &LeafletMap) -> f64;

    #[wasm_bindgen(method)]
    fn on(this: &LeafletMap, event: &str, handler: &js_sys::Function) -> LeafletMap;

    #[wasm_bindgen(method)]
    fn remove(this: &LeafletMap) -> LeafletMap;

    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn new_marker(position: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Marker, map: &LeafletMap) -> Marker;

    #[wasm_bindgen(method, js_name = setLatLng)]
    fn set_lat_lng(this: &Marker, position: &JsValue) -> Marker;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileOptions<'a> {
    attribution: &'a str,
    max_zoom: u8,
}

/// `LatLng` as carried by Leaflet mouse events
#[derive(Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

fn lat_lng(position: Coordinates) -> JsValue {
    js_sys::Array::of2(&position.latitude.into(), &position.longitude.into()).into()
}

/// Read `event.latlng` of a Leaflet click event
fn clicked_position(event: &JsValue) -> Option<Coordinates> {
    let latlng = js_sys::Reflect::get(event, &JsValue::from_str("latlng")).ok()?;
    let LatLng { lat, lng } = serde_wasm_bindgen::from_value(latlng).ok()?;
    Some(Coordinates::new(lat, lng))
}

/// An OpenStreetMap-backed map with a single position marker
pub struct PointMap {
    map: LeafletMap,
    marker: Option<Marker>,
    _on_click: Closure<dyn FnMut(JsValue)>,
}

impl PointMap {
    /// Mount a map into `container`, calling `on_pick` for every click
    pub fn mount(
        container: &HtmlElement,
        center: Coordinates,
        zoom: f64,
        tile_url: &str,
        attribution: &str,
        on_pick: impl Fn(Coordinates) + 'static,
    ) -> Result<Self, String> {
        let map = new_map(container).map_err(|e| format!("Leaflet unavailable: {:?}", e))?;
        map.set_view(&lat_lng(center), zoom);

        let options = serde_wasm_bindgen::to_value(&TileOptions { attribution, max_zoom: 19 })
            .map_err(|e| e.to_string())?;
        tile_layer(tile_url, &options).add_to(&map);

        let on_click = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            if let Some(position) = clicked_position(&event) {
                on_pick(position);
            }
        });
        map.on("click", on_click.as_ref().unchecked_ref());

        Ok(Self { map, marker: None, _on_click: on_click })
    }

    /// Re-center without changing the zoom level
    pub fn recenter(&self, center: Coordinates) {
        let zoom = self.map.get_zoom();
        self.map.set_view(&lat_lng(center), zoom);
    }

    /// Place the marker, creating it on first use
    pub fn set_marker(&mut self, position: Coordinates) {
        match &self.marker {
            Some(marker) => {
                marker.set_lat_lng(&lat_lng(position));
            }
            None => {
                let marker = new_marker(&lat_lng(position));
                marker.add_to(&self.map);
                self.marker = Some(marker);
            }
        }
    }
}

impl Drop for PointMap {
    fn drop(&mut self) {
        self.map.remove();
    }
}
