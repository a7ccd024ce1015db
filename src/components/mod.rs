//! UI Components
//!
//! Leptos components and pages.

mod header;
mod home;
mod create_point;
mod contact_fields;
mod location_selects;
mod items_grid;
mod point_map;
mod drop_zone;
mod load_notice;

pub use header::Header;
pub use home::Home;
pub use create_point::CreatePoint;
pub use contact_fields::ContactFields;
pub use location_selects::LocationSelects;
pub use items_grid::ItemsGrid;
pub use point_map::PointMapView;
pub use drop_zone::DropZone;
pub use load_notice::LoadNotice;
