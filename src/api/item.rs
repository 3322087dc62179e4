//! Item Endpoints

use gloo_net::http::Request;
use web_sys::{File, FormData};

use super::read_json;
use crate::config::Config;
use crate::error::ApiError;
use crate::models::{AddItemResponse, Item, ItemsResponse};

/// `GET /items`
pub async fn fetch_items(config: &Config) -> Result<Vec<Item>, ApiError> {
    let response = Request::get(&config.items_url())
        .header("Accept", "application/json")
        .send()
        .await?;
    let body: ItemsResponse = read_json(response).await?;
    Ok(body.items)
}

/// `POST /items` as multipart form data
pub async fn add_item(
    config: &Config,
    name: &str,
    category: &str,
    image: &File,
) -> Result<AddItemResponse, ApiError> {
    let form = FormData::new()?;
    form.append_with_str("name", name)?;
    form.append_with_str("category", category)?;
    form.append_with_blob_and_filename("image", image, &image.name())?;

    let response = Request::post(&config.items_url()).body(form)?.send().await?;
    read_json(response).await
}
