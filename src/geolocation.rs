//! Device Geolocation
//!
//! One-shot position lookup through `navigator.geolocation`, exposed as a future.

use gloo_timers::future::TimeoutFuture;
use js_sys::{Function, Promise};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Position, PositionError, PositionOptions};

use crate::deadline::race_deadline;
use crate::models::Coordinates;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeolocationError {
    #[error("geolocation is not supported")]
    Unsupported,
    #[error("permission denied")]
    PermissionDenied,
    #[error("position unavailable: {0}")]
    Unavailable(String),
    #[error("geolocation timed out")]
    Timeout,
    #[error("geolocation failed: {0}")]
    Other(String),
}

impl GeolocationError {
    /// Classify a `PositionError` code
    pub fn from_code(code: u16, message: String) -> Self {
        match code {
            PositionError::PERMISSION_DENIED => GeolocationError::PermissionDenied,
            PositionError::POSITION_UNAVAILABLE => GeolocationError::Unavailable(message),
            PositionError::TIMEOUT => GeolocationError::Timeout,
            _ => GeolocationError::Other(message),
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            GeolocationError::Unsupported => "Seu navegador não informa a localização; o mapa abriu numa posição padrão.",
            GeolocationError::PermissionDenied => "Localização não autorizada; o mapa abriu numa posição padrão.",
            GeolocationError::Timeout => "A localização demorou demais; o mapa abriu numa posição padrão.",
            GeolocationError::Unavailable(_) | GeolocationError::Other(_) => {
                "Não foi possível obter sua localização; o mapa abriu numa posição padrão."
            }
        }
    }
}

fn classify(err: JsValue) -> GeolocationError {
    match err.dyn_into::<PositionError>() {
        Ok(position_err) => GeolocationError::from_code(position_err.code(), position_err.message()),
        Err(other) => GeolocationError::Other(format!("{:?}", other)),
    }
}

/// Ask the browser for the current position, giving up after `timeout_ms`
/// even when the permission prompt is never answered
pub async fn current_position(timeout_ms: u32) -> Result<Coordinates, GeolocationError> {
    let geolocation = web_sys::window()
        .ok_or(GeolocationError::Unsupported)?
        .navigator()
        .geolocation()
        .map_err(|_| GeolocationError::Unsupported)?;

    let options = PositionOptions::new();
    options.set_timeout(timeout_ms);
    options.set_maximum_age(60_000);

    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        if let Err(err) =
            geolocation.get_current_position_with_error_callback_and_options(&resolve, Some(&reject), &options)
        {
            let _ = reject.call1(&JsValue::NULL, &err);
        }
    });

    // `PositionOptions.timeout` only starts once permission is granted
    let lookup = async { JsFuture::from(promise).await.map_err(classify) };
    let value = race_deadline(lookup, TimeoutFuture::new(timeout_ms), || GeolocationError::Timeout).await?;
    let position: Position = value
        .dyn_into()
        .map_err(|v| GeolocationError::Other(format!("unexpected position value {:?}", v)))?;
    let coords = position.coords();
    Ok(Coordinates::new(coords.latitude(), coords.longitude()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(GeolocationError::from_code(1, String::new()), GeolocationError::PermissionDenied);
        assert_eq!(
            GeolocationError::from_code(2, "no fix".to_string()),
            GeolocationError::Unavailable("no fix".to_string())
        );
        assert_eq!(GeolocationError::from_code(3, String::new()), GeolocationError::Timeout);
        assert_eq!(
            GeolocationError::from_code(9, "weird".to_string()),
            GeolocationError::Other("weird".to_string())
        );
    }
}
