//! Backend API Client
//!
//! HTTP bindings to the item service, organized by domain.

mod item;

use gloo_net::http::Response;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

pub use item::*;

/// Decode a JSON body, turning non-2xx responses into `ApiError::Status`
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, body });
    }
    Ok(response.json::<T>().await?)
}
