use contracts::domain::product::{ProductDataResponse, ProductDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Список товаров каталога
pub async fn get_products() -> Result<Vec<ProductDto>, String> {
    let url = api_url("/api/products");

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Всё для страницы товара: история цен, продажи, цены конкурентов,
/// рекомендации
pub async fn get_product_data(product_id: i64) -> Result<ProductDataResponse, String> {
    let url = api_url(&format!("/api/product_data/{}", product_id));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
