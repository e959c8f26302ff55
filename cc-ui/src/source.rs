//! Listing fetch through the browser's `fetch`.

use crate::state::AppState;
use cc_core::catastrophe::parse_listing;
use cc_core::{Action, CatastropheRecord, SourceError};
use log::info;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, Response};

/// Relative path of the listing endpoint.
pub const CATASTROPHES_URL: &str = "/api/catastrophes/";

fn describe(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn request_error(url: &str, reason: impl Into<String>) -> SourceError {
    SourceError::Request {
        url: url.to_string(),
        reason: reason.into(),
    }
}

/// GET `url` and parse the body as a listing, envelope or bare list.
pub async fn fetch_all(url: &str) -> Result<Vec<CatastropheRecord>, SourceError> {
    let window = web_sys::window().ok_or_else(|| request_error(url, "no window"))?;
    let request = Request::new_with_str(url).map_err(|e| request_error(url, describe(&e)))?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| request_error(url, describe(&e)))?
        .dyn_into()
        .map_err(|e| request_error(url, describe(&e)))?;

    if !response.ok() {
        return Err(SourceError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let text_promise = response
        .text()
        .map_err(|e| request_error(url, describe(&e)))?;
    let body = JsFuture::from(text_promise)
        .await
        .map_err(|e| request_error(url, describe(&e)))?
        .as_string()
        .ok_or_else(|| request_error(url, "response body is not text"))?;

    Ok(parse_listing(&body)?)
}

/// Fetch the listing once and hand the outcome to the model.
pub async fn load(mut state: AppState, url: &str) {
    match fetch_all(url).await {
        Ok(records) => {
            info!("Loaded {} catastrophes", records.len());
            state.dispatch(Action::FetchSucceeded(records));
        }
        Err(e) => state.dispatch(Action::FetchFailed(e.to_string())),
    }
}
