//! Catalog Items
//!
//! Collection item categories served by the Ecoleta backend.

use crate::config::config;
use crate::models::CatalogItem;
use super::{endpoint, get_json, ApiError};

/// `GET /items`, in backend order
pub async fn list_items() -> Result<Vec<CatalogItem>, ApiError> {
    let url = endpoint(&config().api_url, "items");
    let items: Vec<CatalogItem> = get_json(&url, None).await?;
    log::info!("Loaded {} catalog items", items.len());
    Ok(items)
}
