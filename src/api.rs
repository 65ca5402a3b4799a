//! Collection-point API Client
//!
//! HTTP bindings to the two backend endpoints the frontend talks to.

use std::fmt;

use gloo_net::http::{Request, Response};
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::config::api_url;
use crate::form::LocationPayload;
use crate::models::Item;

/// Common result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// API-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Network(String),
    Status { code: u16, text: String },
    Parse(String),
    Body(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status { code, text } => write!(f, "HTTP {}: {}", code, text),
            ApiError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ApiError::Body(msg) => write!(f, "Request body error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

fn check_status(response: &Response) -> ApiResult<()> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status {
            code: response.status(),
            text: response.status_text(),
        })
    }
}

fn js_error(e: JsValue) -> ApiError {
    ApiError::Body(format!("{:?}", e))
}

// ========================
// Endpoints
// ========================

/// `GET items`: the recyclable item catalog, in server order
pub async fn list_items() -> ApiResult<Vec<Item>> {
    let response = Request::get(&api_url("items")).send().await?;
    check_status(&response)?;
    response
        .json::<Vec<Item>>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// `POST locations` with a multipart body; only the status is inspected
pub async fn create_location(payload: &LocationPayload<File>) -> ApiResult<()> {
    let body = multipart_body(payload)?;
    let response = Request::post(&api_url("locations"))
        .body(body)
        .map_err(|e| ApiError::Body(e.to_string()))?
        .send()
        .await?;
    check_status(&response)
}

/// The browser fills in the multipart boundary, so no content-type is set here
fn multipart_body(payload: &LocationPayload<File>) -> ApiResult<FormData> {
    let data = FormData::new().map_err(js_error)?;
    for (name, value) in &payload.fields {
        data.append_with_str(name, value).map_err(js_error)?;
    }
    if let Some(image) = &payload.image {
        data.append_with_blob_and_filename("image", image, &image.name())
            .map_err(js_error)?;
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let status = ApiError::Status { code: 500, text: "Internal Server Error".to_string() };
        assert_eq!(status.to_string(), "HTTP 500: Internal Server Error");
        assert_eq!(
            ApiError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
    }
}
