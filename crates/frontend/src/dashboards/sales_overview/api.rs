use contracts::dashboards::sales_overview::DashboardDataResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Данные дашборда за последние `days` дней
pub async fn get_dashboard_data(days: u32) -> Result<DashboardDataResponse, String> {
    let url = api_url(&format!("/api/dashboard_data?days={}", days));

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
