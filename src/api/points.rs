//! Collection Points
//!
//! Multipart submission of a new collection point.

use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::config::config;
use crate::submission::PointSubmission;
use super::{abort_handle, endpoint, ensure_ok, with_timeout, ApiError};

fn request_error(err: JsValue) -> ApiError {
    ApiError::Request(format!("{:?}", err))
}

/// Build the multipart body; the browser fills in the boundary header
fn build_form(submission: &PointSubmission, image: Option<&File>) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(request_error)?;
    for (name, value) in submission.text_fields() {
        form.append_with_str(name, &value).map_err(request_error)?;
    }
    if let Some(file) = image {
        form.append_with_blob_and_filename("image", file, &file.name())
            .map_err(request_error)?;
    }
    Ok(form)
}

/// `POST /points`
pub async fn create_point(submission: &PointSubmission, image: Option<&File>) -> Result<(), ApiError> {
    let form = build_form(submission, image)?;
    let url = endpoint(&config().api_url, "points");

    log::info!(
        "Submitting point '{}' ({} items, image: {})",
        submission.contact.name,
        submission.items.len(),
        image.is_some()
    );

    let abort = abort_handle(None)?;
    let signal = abort.signal();
    with_timeout(&abort, async {
        let response = Request::post(&url).abort_signal(Some(&signal)).body(form)?.send().await?;
        ensure_ok(response).await?;
        Ok(())
    })
    .await
}
