//! Point Map Component
//!
//! Leaflet map where the user clicks the collection point location.

use leptos::html::Div;
use leptos::prelude::*;

use crate::config::config;
use crate::controller::use_controller;
use crate::leaflet::PointMap;
use crate::state::{Command, CreatePointStateStoreFields};

#[component]
pub fn PointMapView() -> impl IntoView {
    let controller = use_controller();
    let store = controller.store;
    let map_config = &config().map;

    let container = NodeRef::<Div>::new();
    let point_map = StoredValue::new_local(None::<PointMap>);

    // Mount once the container is in the DOM
    Effect::new(move |_| {
        let Some(element) = container.get() else { return };
        if point_map.with_value(|m| m.is_some()) {
            return;
        }
        let center = store.with_untracked(|s| s.map_center(map_config.fallback_center));

        match PointMap::mount(
            &element,
            center,
            map_config.zoom,
            &map_config.tile_url,
            &map_config.attribution,
            move |position| controller.send(Command::PickPosition(position)),
        ) {
            Ok(map) => point_map.set_value(Some(map)),
            Err(e) => log::error!("Map could not be mounted: {}", e),
        }
    });

    // Re-center when the device position arrives
    Effect::new(move |_| {
        if let Some(center) = store.initial_position().with(|p| p.loaded().copied()) {
            point_map.update_value(|map| {
                if let Some(map) = map {
                    map.recenter(center);
                }
            });
        }
    });

    // Marker follows the selected position
    Effect::new(move |_| {
        if let Some(position) = store.selected_position().get() {
            point_map.update_value(|map| {
                if let Some(map) = map {
                    map.set_marker(position);
                }
            });
        }
    });

    on_cleanup(move || {
        // Dropping the map removes it from the DOM
        point_map.try_update_value(|map| map.take());
    });

    view! {
        <div class="point-map" node_ref=container></div>
        <p class="map-hint">
            {move || match store.selected_position().get() {
                Some(p) => format!("Posição escolhida: {:.5}, {:.5}", p.latitude, p.longitude),
                None => "Clique no mapa para marcar o ponto de coleta.".to_string(),
            }}
        </p>
    }
}
