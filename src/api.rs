//! Product API Client
//!
//! Frontend bindings to the storefront HTTP API.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::models::Product;

/// Fetch the product catalog from `GET /api/products`.
/// One shot: no retry, no timeout.
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;

    let response = JsFuture::from(window.fetch_with_str("/api/products"))
        .await
        .map_err(|e| format!("{:?}", e))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| "fetch did not return a Response".to_string())?;

    if !response.ok() {
        return Err(format!("GET /api/products returned {}", response.status()));
    }

    let body: js_sys::Promise = response.json().map_err(|e| format!("{:?}", e))?;
    let json = JsFuture::from(body).await.map_err(|e| format!("{:?}", e))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}
