//! Data shaping for the dashboard and product charts
//!
//! Three pure, single-pass routines over the fetched payloads: daily sales
//! aggregation, competitor price grouping and the recommendation tally.
//! Dates are grouped and ordered by plain string comparison, which relies on
//! the `YYYY-MM-DD` convention of the API payloads.

use std::collections::{BTreeMap, HashMap};

use contracts::domain::product::{CompetitorPriceObservation, PricePoint, SaleRecord};
use contracts::domain::recommendation::RecommendationDto;

/// Per-date sales totals, ready to feed a chart as parallel columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySalesSeries {
    /// Distinct sale dates, ascending
    pub dates: Vec<String>,
    /// Units sold per date, parallel to `dates`
    pub quantities: Vec<u32>,
    /// Revenue per date, parallel to `dates`
    pub revenues: Vec<f64>,
}

/// Groups sales by exact date string and sums quantity and revenue per
/// group. Output dates are distinct and ascending; empty input yields three
/// empty columns.
pub fn aggregate_sales_by_date(sales: &[SaleRecord]) -> DailySalesSeries {
    let mut by_date: BTreeMap<&str, (u32, f64)> = BTreeMap::new();
    for sale in sales {
        let entry = by_date.entry(sale.date.as_str()).or_insert((0, 0.0));
        entry.0 += sale.quantity;
        entry.1 += sale.revenue;
    }

    let mut series = DailySalesSeries::default();
    for (date, (quantity, revenue)) in by_date {
        series.dates.push(date.to_string());
        series.quantities.push(quantity);
        series.revenues.push(revenue);
    }
    series
}

/// Price observations of one competitor, in input encounter order.
#[derive(Debug, Clone, PartialEq)]
pub struct CompetitorSeries {
    pub competitor_name: String,
    pub points: Vec<PricePoint>,
}

/// Partitions observations by competitor name. The first occurrence of a
/// name opens its group; later occurrences append. Groups come back in
/// first-encounter order so chart colors stay stable across refreshes.
/// Points are not re-sorted and dates are not de-duplicated.
pub fn group_competitor_prices(
    observations: &[CompetitorPriceObservation],
) -> Vec<CompetitorSeries> {
    let mut groups: Vec<CompetitorSeries> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for obs in observations {
        let slot = match index.get(obs.competitor_name.as_str()) {
            Some(&slot) => slot,
            None => {
                index.insert(obs.competitor_name.as_str(), groups.len());
                groups.push(CompetitorSeries {
                    competitor_name: obs.competitor_name.clone(),
                    points: Vec::new(),
                });
                groups.len() - 1
            }
        };
        groups[slot].points.push(PricePoint {
            date: obs.date.clone(),
            price: obs.price,
        });
    }
    groups
}

/// Direction of a single price recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceDirection {
    Increase,
    Decrease,
    Unchanged,
}

/// Strict numeric comparison of recommended against current price.
pub fn price_direction(current: f64, recommended: f64) -> PriceDirection {
    if recommended > current {
        PriceDirection::Increase
    } else if recommended < current {
        PriceDirection::Decrease
    } else {
        PriceDirection::Unchanged
    }
}

/// Recommendation counts by direction. The three counts always cover every
/// input item exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecommendationTally {
    pub increases: usize,
    pub decreases: usize,
    pub unchanged: usize,
}

impl RecommendationTally {
    pub fn total(&self) -> usize {
        self.increases + self.decreases + self.unchanged
    }
}

/// Classifies every recommendation by [`price_direction`] and counts each
/// bucket.
pub fn tally_recommendations(recommendations: &[RecommendationDto]) -> RecommendationTally {
    let mut tally = RecommendationTally::default();
    for rec in recommendations {
        match price_direction(rec.current_price, rec.recommended_price) {
            PriceDirection::Increase => tally.increases += 1,
            PriceDirection::Decrease => tally.decreases += 1,
            PriceDirection::Unchanged => tally.unchanged += 1,
        }
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(date: &str, quantity: u32, revenue: f64) -> SaleRecord {
        SaleRecord {
            date: date.to_string(),
            quantity,
            revenue,
        }
    }

    fn observation(name: &str, date: &str, price: f64) -> CompetitorPriceObservation {
        CompetitorPriceObservation {
            competitor_name: name.to_string(),
            date: date.to_string(),
            price,
        }
    }

    fn recommendation(current: f64, recommended: f64) -> RecommendationDto {
        RecommendationDto {
            id: 1,
            product_id: 1,
            product_name: "Widget".to_string(),
            current_price: current,
            recommended_price: recommended,
            reason: None,
            created_at: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn test_aggregate_groups_and_sorts() {
        let sales = vec![
            sale("2024-01-02", 3, 30.0),
            sale("2024-01-01", 2, 20.0),
            sale("2024-01-01", 1, 10.0),
        ];
        let series = aggregate_sales_by_date(&sales);
        assert_eq!(series.dates, vec!["2024-01-01", "2024-01-02"]);
        assert_eq!(series.quantities, vec![3, 3]);
        assert_eq!(series.revenues, vec![30.0, 30.0]);
    }

    #[test]
    fn test_aggregate_empty_input() {
        let series = aggregate_sales_by_date(&[]);
        assert!(series.dates.is_empty());
        assert!(series.quantities.is_empty());
        assert!(series.revenues.is_empty());
    }

    #[test]
    fn test_aggregate_preserves_totals() {
        let sales = vec![
            sale("2024-02-10", 5, 55.0),
            sale("2024-02-08", 2, 18.0),
            sale("2024-02-10", 1, 11.0),
            sale("2024-02-09", 4, 40.0),
        ];
        let series = aggregate_sales_by_date(&sales);

        let input_quantity: u32 = sales.iter().map(|s| s.quantity).sum();
        let input_revenue: f64 = sales.iter().map(|s| s.revenue).sum();
        assert_eq!(series.quantities.iter().sum::<u32>(), input_quantity);
        assert_eq!(series.revenues.iter().sum::<f64>(), input_revenue);

        // Strictly ascending, each distinct date exactly once
        assert!(series.dates.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(series.dates.len(), 3);
    }

    #[test]
    fn test_group_competitors_by_encounter_order() {
        let observations = vec![
            observation("A", "2024-01-01", 10.0),
            observation("B", "2024-01-01", 9.0),
            observation("A", "2024-01-02", 11.0),
        ];
        let groups = group_competitor_prices(&observations);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].competitor_name, "A");
        assert_eq!(groups[0].points.len(), 2);
        assert_eq!(groups[0].points[0].date, "2024-01-01");
        assert_eq!(groups[0].points[0].price, 10.0);
        assert_eq!(groups[0].points[1].date, "2024-01-02");
        assert_eq!(groups[0].points[1].price, 11.0);
        assert_eq!(groups[1].competitor_name, "B");
        assert_eq!(groups[1].points.len(), 1);
        assert_eq!(groups[1].points[0].price, 9.0);
    }

    #[test]
    fn test_group_keeps_every_observation() {
        let observations = vec![
            observation("A", "2024-01-03", 10.0),
            observation("B", "2024-01-01", 9.0),
            observation("A", "2024-01-01", 11.0),
            observation("C", "2024-01-02", 8.5),
            observation("A", "2024-01-01", 10.5),
        ];
        let groups = group_competitor_prices(&observations);
        let total_points: usize = groups.iter().map(|g| g.points.len()).sum();
        assert_eq!(total_points, observations.len());

        // No sorting, no de-duplication within a group
        let a = &groups[0];
        assert_eq!(a.points[0].date, "2024-01-03");
        assert_eq!(a.points[1].date, "2024-01-01");
        assert_eq!(a.points[2].date, "2024-01-01");
    }

    #[test]
    fn test_group_empty_input() {
        assert!(group_competitor_prices(&[]).is_empty());
    }

    #[test]
    fn test_tally_classifies_each_item_once() {
        let recommendations = vec![
            recommendation(10.0, 12.0),
            recommendation(10.0, 8.0),
            recommendation(10.0, 10.0),
        ];
        let tally = tally_recommendations(&recommendations);
        assert_eq!(tally.increases, 1);
        assert_eq!(tally.decreases, 1);
        assert_eq!(tally.unchanged, 1);
        assert_eq!(tally.total(), recommendations.len());
    }

    #[test]
    fn test_tally_empty_input() {
        let tally = tally_recommendations(&[]);
        assert_eq!(tally.total(), 0);
    }

    #[test]
    fn test_price_direction_is_strict() {
        assert_eq!(price_direction(10.0, 10.01), PriceDirection::Increase);
        assert_eq!(price_direction(10.0, 9.99), PriceDirection::Decrease);
        assert_eq!(price_direction(10.0, 10.0), PriceDirection::Unchanged);
    }
}
