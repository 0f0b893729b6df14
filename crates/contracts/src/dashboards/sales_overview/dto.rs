use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::product::SaleRecord;
use crate::domain::recommendation::RecommendationDto;

/// Summary numbers shown in the dashboard stat cards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub product_count: u32,
    pub total_revenue: f64,
    pub average_price: f64,
    pub pending_recommendations: u32,
}

/// Ответ `GET /api/dashboard_data?days=N`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardDataResponse {
    #[serde(default)]
    pub daily_sales: Vec<SaleRecord>,
    #[serde(default)]
    pub recent_recommendations: Vec<RecommendationDto>,
    pub summary: DashboardSummary,
}

/// Inclusive date range covering the last `days` calendar days.
///
/// Dates are rendered `YYYY-MM-DD`, the same string form the chart grouping
/// keys use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRange {
    pub date_from: String,
    pub date_to: String,
}

impl ReportRange {
    /// Range ending today (UTC) and starting `days - 1` days earlier, so a
    /// 7-day range spans exactly 7 calendar dates.
    pub fn last_days(days: u32) -> Self {
        Self::last_days_from(Utc::now().date_naive(), days)
    }

    fn last_days_from(today: NaiveDate, days: u32) -> Self {
        let span = days.max(1) as i64;
        let start = today - Duration::days(span - 1);
        Self {
            date_from: start.format("%Y-%m-%d").to_string(),
            date_to: today.format("%Y-%m-%d").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_days_span() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let range = ReportRange::last_days_from(today, 7);
        assert_eq!(range.date_from, "2024-03-09");
        assert_eq!(range.date_to, "2024-03-15");
    }

    #[test]
    fn test_last_days_crosses_month() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let range = ReportRange::last_days_from(today, 30);
        assert_eq!(range.date_from, "2024-02-05");
        assert_eq!(range.date_to, "2024-03-05");
    }

    #[test]
    fn test_zero_days_clamped_to_single_day() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let range = ReportRange::last_days_from(today, 0);
        assert_eq!(range.date_from, range.date_to);
    }
}
