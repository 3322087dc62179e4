use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport or body decoding failure
    #[error("Network {0}")]
    Network(#[from] gloo_net::Error),
    #[error("Server responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Browser error {0}")]
    Browser(String),
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        let message = match value.dyn_ref::<js_sys::Error>() {
            Some(err) => String::from(err.message()),
            None => format!("{value:?}"),
        };
        Self::Browser(message)
    }
}

/// Rejected before anything is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    #[error("name is required")]
    MissingName,
    #[error("category is required")]
    MissingCategory,
    #[error("image is required")]
    MissingImage,
}
