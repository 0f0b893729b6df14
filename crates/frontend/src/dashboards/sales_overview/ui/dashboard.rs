use contracts::dashboards::sales_overview::{DashboardDataResponse, ReportRange};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use serde_json::json;
use wasm_bindgen::JsValue;

use crate::dashboards::sales_overview::api;
use crate::shared::analytics::{
    aggregate_sales_by_date, price_direction, tally_recommendations, DailySalesSeries,
    PriceDirection, RecommendationTally,
};
use crate::shared::charts::config::{
    doughnut_dataset, install_callback, line_dataset, palette, to_js, with_alpha, ChartConfig,
    ChartData, SeriesData,
};
use crate::shared::charts::{canvas_by_id, ChartRegistry};
use crate::shared::components::date_range_selector::DateRangeSelector;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::number_format::{format_currency, format_number_int};

const REVENUE_CHART: &str = "sales_overview_revenue";
const RECOMMENDATIONS_CHART: &str = "sales_overview_recommendations";

/// Sales overview dashboard: stat cards, daily revenue chart with a quick
/// range selector, recommendation split doughnut and the latest
/// recommendations.
#[component]
pub fn SalesOverviewDashboard() -> impl IntoView {
    let registry = use_context::<ChartRegistry>().expect("ChartRegistry not provided in context");

    let (selected_days, set_selected_days) = signal(30u32);
    let (data, set_data) = signal(None::<DashboardDataResponse>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Refetch whenever the selected range changes (including first render)
    Effect::new(move |_| {
        let days = selected_days.get();
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::get_dashboard_data(days).await {
                Ok(response) => {
                    set_data.set(Some(response));
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("Failed to load dashboard data: {}", e);
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    });

    // Mount charts on the first payload, refresh them in place afterwards
    Effect::new(move |_| {
        let Some(response) = data.get() else {
            return;
        };
        let series = aggregate_sales_by_date(&response.daily_sales);
        let tally = tally_recommendations(&response.recent_recommendations);
        if let Err(err) = render_charts(&registry, &series, tally) {
            log::error!("Failed to render dashboard charts: {:?}", err);
        }
    });

    on_cleanup(move || {
        registry.destroy(REVENUE_CHART);
        registry.destroy(RECOMMENDATIONS_CHART);
    });

    view! {
        <div class="dashboard-page">
            <PageHeader
                title="Sales Overview"
                subtitle="Pricing and sales performance".to_string()
            >
                <span class="date-range-selector__hint">
                    {move || {
                        let range = ReportRange::last_days(selected_days.get());
                        format!(
                            "{} \u{2013} {}",
                            format_date(&range.date_from),
                            format_date(&range.date_to),
                        )
                    }}
                </span>
                <DateRangeSelector
                    selected_days=selected_days
                    on_select=move |days: u32| set_selected_days.set(days)
                />
            </PageHeader>

            {move || {
                if let Some(err) = error.get() {
                    view! {
                        <div class="alert alert--error">
                            <strong>"Failed to load dashboard: "</strong>
                            {err}
                        </div>
                    }
                        .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            <div class="stat-card-row">
                <StatCard
                    label="Products"
                    icon_name="products"
                    value=Signal::derive(move || {
                        data.get().map(|d| format_number_int(d.summary.product_count as f64))
                    })
                />
                <StatCard
                    label="Revenue"
                    icon_name="revenue"
                    accent="success".to_string()
                    value=Signal::derive(move || {
                        data.get().map(|d| format_currency(d.summary.total_revenue))
                    })
                />
                <StatCard
                    label="Average Price"
                    icon_name="price-tag"
                    value=Signal::derive(move || {
                        data.get().map(|d| format_currency(d.summary.average_price))
                    })
                />
                <StatCard
                    label="Pending Recommendations"
                    icon_name="recommendations"
                    accent="warning".to_string()
                    value=Signal::derive(move || {
                        data.get()
                            .map(|d| format_number_int(d.summary.pending_recommendations as f64))
                    })
                />
            </div>

            <div class="chart-grid">
                <div class="chart-panel chart-panel--wide">
                    <h2 class="chart-panel__title">"Daily Revenue"</h2>
                    {move || {
                        if loading.get() {
                            view! { <div class="chart-panel__loading">"Loading data..."</div> }
                                .into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                    <canvas id="salesChart"></canvas>
                </div>
                <div class="chart-panel">
                    <h2 class="chart-panel__title">"Recommendations"</h2>
                    <canvas id="recommendationsChart"></canvas>
                </div>
            </div>

            <div class="recent-recommendations">
                <h2 class="section-title">"Recent Recommendations"</h2>
                {move || {
                    data.get()
                        .map(|d| {
                            if d.recent_recommendations.is_empty() {
                                view! {
                                    <p class="empty-note">"No recommendations for this period."</p>
                                }
                                    .into_any()
                            } else {
                                d.recent_recommendations
                                    .iter()
                                    .map(|rec| {
                                        view! {
                                            <div class="recommendation-row">
                                                <A
                                                    href=format!("/products/{}", rec.product_id)
                                                    attr:class="recommendation-row__product"
                                                >
                                                    {rec.product_name.clone()}
                                                </A>
                                                <span class="recommendation-row__prices">
                                                    {format_currency(rec.current_price)} " \u{2192} "
                                                    {format_currency(rec.recommended_price)}
                                                </span>
                                                {direction_badge(
                                                    rec.current_price,
                                                    rec.recommended_price,
                                                )}
                                                <span class="recommendation-row__date">
                                                    {format_datetime(&rec.created_at)}
                                                </span>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        })
                }}
            </div>
        </div>
    }
}

fn direction_badge(current: f64, recommended: f64) -> AnyView {
    match price_direction(current, recommended) {
        PriceDirection::Increase => {
            view! { <span class="badge badge--success">"\u{2191} increase"</span> }.into_any()
        }
        PriceDirection::Decrease => {
            view! { <span class="badge badge--danger">"\u{2193} decrease"</span> }.into_any()
        }
        PriceDirection::Unchanged => {
            view! { <span class="badge badge--muted">"no change"</span> }.into_any()
        }
    }
}

fn doughnut_labels() -> Vec<String> {
    vec![
        "Price Increase".to_string(),
        "Price Decrease".to_string(),
        "No Change".to_string(),
    ]
}

fn render_charts(
    registry: &ChartRegistry,
    series: &DailySalesSeries,
    tally: RecommendationTally,
) -> Result<(), JsValue> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Ok(());
    };

    // Revenue line chart
    if registry.contains(REVENUE_CHART) {
        registry.update_data(REVENUE_CHART, &series.dates, &[series.revenues.clone()])?;
    } else if let Some(canvas) = canvas_by_id(&document, "salesChart") {
        let config = ChartConfig {
            kind: "line",
            data: ChartData {
                labels: series.dates.clone(),
                datasets: vec![line_dataset(
                    "Daily Revenue",
                    SeriesData::Values(series.revenues.clone()),
                    palette::PRIMARY,
                    true,
                )],
            },
            options: Some(json!({
                "responsive": true,
                "maintainAspectRatio": false,
                "plugins": { "legend": { "display": false } },
                "scales": {
                    "x": {
                        "grid": { "display": false },
                        "ticks": { "maxTicksLimit": 7 }
                    },
                    "y": { "beginAtZero": true }
                }
            })),
        };
        let config_js = to_js(&config)?;
        install_callback(
            &config_js,
            &["options", "scales", "y", "ticks"],
            "callback",
            "value",
            "return '$' + value;",
        )?;
        install_callback(
            &config_js,
            &["options", "plugins", "tooltip", "callbacks"],
            "label",
            "context",
            "return 'Revenue: $' + context.parsed.y.toFixed(2);",
        )?;
        registry.mount_js(REVENUE_CHART, &canvas, config_js);
    }

    // Recommendation split doughnut
    let tally_values = vec![
        tally.increases as f64,
        tally.decreases as f64,
        tally.unchanged as f64,
    ];
    if registry.contains(RECOMMENDATIONS_CHART) {
        registry.update_data(RECOMMENDATIONS_CHART, &doughnut_labels(), &[tally_values])?;
    } else if let Some(canvas) = canvas_by_id(&document, "recommendationsChart") {
        let config = ChartConfig {
            kind: "doughnut",
            data: ChartData {
                labels: doughnut_labels(),
                datasets: vec![doughnut_dataset(
                    tally_values,
                    vec![
                        with_alpha(palette::SUCCESS, "0.8"),
                        with_alpha(palette::DANGER, "0.8"),
                        with_alpha(palette::SECONDARY, "0.8"),
                    ],
                )],
            },
            options: Some(json!({
                "responsive": true,
                "maintainAspectRatio": false,
                "plugins": { "legend": { "position": "bottom" } },
                "cutout": "70%"
            })),
        };
        registry.mount(RECOMMENDATIONS_CHART, &canvas, &config)?;
    }

    Ok(())
}
