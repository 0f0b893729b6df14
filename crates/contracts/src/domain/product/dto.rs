use serde::{Deserialize, Serialize};

use crate::domain::recommendation::RecommendationDto;

/// Товар в каталоге продавца
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub cost_price: f64,
    pub current_price: f64,
    #[serde(default)]
    pub minimum_price: Option<f64>,
    #[serde(default)]
    pub maximum_price: Option<f64>,
    #[serde(default)]
    pub stock_level: i64,
}

impl ProductDto {
    /// Margin at the current price, as a fraction of the sale price.
    /// Zero-priced products report zero margin.
    pub fn margin(&self) -> f64 {
        if self.current_price == 0.0 {
            return 0.0;
        }
        (self.current_price - self.cost_price) / self.current_price
    }
}

/// One sale, already flattened for charting.
///
/// `date` is a calendar date formatted `YYYY-MM-DD`. Aggregation code sorts
/// and groups these by plain string comparison, which is only correct for
/// that format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRecord {
    pub date: String,
    pub quantity: u32,
    pub revenue: f64,
}

/// Price of one product at one point in its own history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: String,
    pub price: f64,
}

/// One competitor price observation. Same `YYYY-MM-DD` date convention as
/// [`SaleRecord`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorPriceObservation {
    pub competitor_name: String,
    pub date: String,
    pub price: f64,
}

/// Ответ `GET /api/product_data/{id}` — всё, что нужно странице товара
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDataResponse {
    pub product: ProductDto,
    #[serde(default)]
    pub price_history: Vec<PricePoint>,
    #[serde(default)]
    pub sales: Vec<SaleRecord>,
    #[serde(default)]
    pub competitor_prices: Vec<CompetitorPriceObservation>,
    #[serde(default)]
    pub recommendations: Vec<RecommendationDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin() {
        let product = ProductDto {
            id: 1,
            name: "Widget".to_string(),
            category: None,
            cost_price: 60.0,
            current_price: 100.0,
            minimum_price: None,
            maximum_price: None,
            stock_level: 0,
        };
        assert_eq!(product.margin(), 0.4);
    }

    #[test]
    fn test_margin_zero_price() {
        let product = ProductDto {
            id: 1,
            name: "Widget".to_string(),
            category: None,
            cost_price: 60.0,
            current_price: 0.0,
            minimum_price: None,
            maximum_price: None,
            stock_level: 0,
        };
        assert_eq!(product.margin(), 0.0);
    }
}
