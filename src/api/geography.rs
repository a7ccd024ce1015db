//! IBGE Geography
//!
//! Federative units and their municipalities from the public IBGE
//! localities service.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use web_sys::AbortController;

use crate::config::config;
use crate::models::{FederativeUnit, Municipality};
use super::{endpoint, get_json, ApiError};

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub fn states_url(base: &str) -> String {
    endpoint(base, "estados")
}

pub fn cities_url(base: &str, uf: &str) -> String {
    endpoint(base, &format!("estados/{}/municipios", utf8_percent_encode(uf, SEGMENT)))
}

/// UF codes, in service order
pub async fn list_states() -> Result<Vec<String>, ApiError> {
    let units: Vec<FederativeUnit> = get_json(&states_url(&config().geography_url), None).await?;
    Ok(units.into_iter().map(|unit| unit.sigla).collect())
}

/// City names of one UF. The request is cancelled when `abort` fires.
pub async fn list_cities(uf: &str, abort: Option<&AbortController>) -> Result<Vec<String>, ApiError> {
    let url = cities_url(&config().geography_url, uf);
    let cities: Vec<Municipality> = get_json(&url, abort).await?;
    log::info!("Loaded {} cities for {}", cities.len(), uf);
    Ok(cities.into_iter().map(|city| city.nome).collect())
}
