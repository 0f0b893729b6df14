use serde::{Deserialize, Serialize};

/// Ценовая рекомендация для товара
///
/// Prices are carried as typed numbers end to end; the UI tally consumes
/// these objects directly instead of re-parsing values out of rendered
/// markup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationDto {
    pub id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub current_price: f64,
    pub recommended_price: f64,
    #[serde(default)]
    pub reason: Option<String>,
    pub created_at: String,
}

impl RecommendationDto {
    /// Recommended change relative to the current price, signed.
    pub fn delta(&self) -> f64 {
        self.recommended_price - self.current_price
    }
}
