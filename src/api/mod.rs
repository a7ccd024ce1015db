//! HTTP Bindings
//!
//! Thin wrappers over `gloo-net`, organized by remote resource.
//! Every call is raced against the configured request timeout.

mod geography;
mod items;
mod points;

use std::future::Future;

use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::AbortController;

use crate::config::config;
use crate::deadline::race_deadline;

pub use geography::*;
pub use items::*;
pub use points::*;

/// Errors from outbound HTTP calls
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    #[error("request aborted")]
    Aborted,
    #[error("could not build request: {0}")]
    Request(String),
}

impl ApiError {
    /// Short Portuguese message for the page
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Sem conexão com o servidor.".to_string(),
            ApiError::Status { status, message } if message.is_empty() => {
                format!("O servidor recusou a requisição (HTTP {}).", status)
            }
            ApiError::Status { status, message } => {
                format!("O servidor recusou a requisição (HTTP {}): {}", status, message)
            }
            ApiError::Decode(_) => "Resposta inesperada do servidor.".to_string(),
            ApiError::Timeout(_) => "O servidor demorou demais para responder.".to_string(),
            ApiError::Aborted => "Requisição cancelada.".to_string(),
            ApiError::Request(_) => "Não foi possível montar a requisição.".to_string(),
        }
    }
}

impl ApiError {
    /// Classify a JavaScript error raised by `fetch`
    fn from_js(name: &str, message: String) -> Self {
        match name {
            "AbortError" => ApiError::Aborted,
            _ => ApiError::Network(message),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::JsError(js) => ApiError::from_js(&js.name, js.message),
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Join a base URL and a path without doubling slashes
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Abort handle for one request: the caller's, or a fresh one
fn abort_handle(abort: Option<&AbortController>) -> Result<AbortController, ApiError> {
    match abort {
        Some(abort) => Ok(abort.clone()),
        None => AbortController::new().map_err(|e: JsValue| ApiError::Request(format!("{:?}", e))),
    }
}

/// Race a request against the configured timeout; on timeout the browser
/// request is aborted too, so it cannot complete behind the caller's back
async fn with_timeout<T, F>(abort: &AbortController, request: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    let ms = config().request_timeout_ms;
    race_deadline(request, TimeoutFuture::new(ms), || {
        log::warn!("Request timed out after {} ms, aborting", ms);
        abort.abort();
        ApiError::Timeout(ms)
    })
    .await
}

/// Turn a non-2xx response into `ApiError::Status`, using the body as message
async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status,
        message: error_message(&body).unwrap_or_else(|| response.status_text()),
    })
}

/// Extract `message` or `error` from a JSON error body
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

/// GET a JSON document; `abort` cancels it from outside
async fn get_json<T: DeserializeOwned>(url: &str, abort: Option<&AbortController>) -> Result<T, ApiError> {
    let abort = abort_handle(abort)?;
    let signal = abort.signal();
    with_timeout(&abort, async {
        let response = Request::get(url).abort_signal(Some(&signal)).send().await?;
        let response = ensure_ok(response).await?;
        response.json::<T>().await.map_err(ApiError::from)
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_join() {
        assert_eq!(endpoint("http://localhost:3333", "items"), "http://localhost:3333/items");
        assert_eq!(endpoint("http://localhost:3333/", "/points"), "http://localhost:3333/points");
    }

    #[test]
    fn test_error_message_from_body() {
        assert_eq!(error_message(r#"{"message":"Validation failed"}"#), Some("Validation failed".to_string()));
        assert_eq!(error_message(r#"{"error":"Bad Request"}"#), Some("Bad Request".to_string()));
        assert_eq!(error_message("<html>oops</html>"), None);
        assert_eq!(error_message(r#"{"statusCode":400}"#), None);
    }

    #[test]
    fn test_user_message_includes_status() {
        let err = ApiError::Status { status: 400, message: "Validation failed".to_string() };
        assert!(err.user_message().contains("400"));
        assert!(err.user_message().contains("Validation failed"));

        let bare = ApiError::Status { status: 503, message: String::new() };
        assert_eq!(bare.user_message(), "O servidor recusou a requisição (HTTP 503).");
    }

    #[test]
    fn test_abort_error_is_aborted() {
        assert_eq!(
            ApiError::from_js("AbortError", "The user aborted a request.".to_string()),
            ApiError::Aborted
        );
    }

    #[test]
    fn test_other_js_errors_are_network() {
        assert_eq!(
            ApiError::from_js("TypeError", "Failed to fetch".to_string()),
            ApiError::Network("Failed to fetch".to_string())
        );
    }

    #[test]
    fn test_gloo_errors_classified() {
        let serde_err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        assert!(matches!(ApiError::from(gloo_net::Error::SerdeError(serde_err)), ApiError::Decode(_)));

        let gloo_err = gloo_net::Error::GlooError("body already used".to_string());
        assert_eq!(ApiError::from(gloo_err), ApiError::Network("body already used".to_string()));
    }
}
