pub mod forms;

use std::collections::HashSet;

use contracts::domain::product::ProductDataResponse;
use contracts::domain::recommendation::RecommendationDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use serde_json::json;
use wasm_bindgen::JsValue;

use crate::domain::product::api;
use crate::layout::{Modal, ModalService};
use crate::shared::analytics::{aggregate_sales_by_date, group_competitor_prices};
use crate::shared::charts::config::{
    bar_dataset, dashed_line_dataset, install_callback, line_dataset, palette, to_js, ChartConfig,
    ChartData, DatedPoint, Dataset, SeriesData,
};
use crate::shared::charts::{canvas_by_id, ChartRegistry};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::number_format::{format_currency, format_number_int};
use self::forms::{CompetitorPriceForm, PriceUpdateForm, ProductForm, SaleForm};

const PRICE_HISTORY_CHART: &str = "product_price_history";
const PRODUCT_SALES_CHART: &str = "product_sales";

/// Страница товара: графики цен/продаж, рекомендации и формы ввода
#[component]
pub fn ProductDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let registry = use_context::<ChartRegistry>().expect("ChartRegistry not provided in context");
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");

    let (data, set_data) = signal(None::<ProductDataResponse>);
    let (error, set_error) = signal(None::<String>);
    // Rejected recommendations are presentation state only; reset on navigation
    let (rejected, set_rejected) = signal(HashSet::<i64>::new());
    let (apply_target, set_apply_target) = signal(None::<RecommendationDto>);

    // Reload when the route id changes
    Effect::new(move |_| {
        let Some(id) = params.get().get("id").and_then(|id| id.parse::<i64>().ok()) else {
            return;
        };
        spawn_local(async move {
            match api::get_product_data(id).await {
                Ok(response) => set_data.set(Some(response)),
                Err(e) => {
                    log::error!("Failed to load product data: {}", e);
                    set_error.set(Some(e));
                }
            }
        });
    });

    // Charts are remounted per payload; their dataset count follows the
    // competitor set, so an in-place update is not enough here
    Effect::new(move |_| {
        let Some(response) = data.get() else {
            return;
        };
        if let Err(err) = render_charts(&registry, &response) {
            log::error!("Failed to render product charts: {:?}", err);
        }
    });

    on_cleanup(move || {
        registry.destroy(PRICE_HISTORY_CHART);
        registry.destroy(PRODUCT_SALES_CHART);
    });

    let on_apply = move |rec: RecommendationDto| {
        set_apply_target.set(Some(rec));
        modal.show();
    };
    let on_reject = move |id: i64| {
        set_rejected.update(|set| {
            set.insert(id);
        });
    };

    view! {
        <div class="product-details-page">
            {move || {
                data.get()
                    .map(|d| {
                        view! {
                            <PageHeader
                                title=d.product.name.clone()
                                subtitle=d.product.category.clone().unwrap_or_default()
                            >
                                <div class="product-summary">
                                    <span class="product-summary__item">
                                        "Price: " {format_currency(d.product.current_price)}
                                    </span>
                                    <span class="product-summary__item">
                                        "Cost: " {format_currency(d.product.cost_price)}
                                    </span>
                                    <span class="product-summary__item">
                                        "Stock: "
                                        {format_number_int(d.product.stock_level as f64)}
                                    </span>
                                </div>
                            </PageHeader>
                        }
                    })
            }}

            {move || {
                if let Some(err) = error.get() {
                    view! {
                        <div class="alert alert--error">
                            <strong>"Failed to load product: "</strong>
                            {err}
                        </div>
                    }
                        .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            <div class="chart-grid">
                <div class="chart-panel chart-panel--wide">
                    <h2 class="chart-panel__title">"Price History"</h2>
                    <canvas id="priceHistoryChart"></canvas>
                </div>
                <div class="chart-panel chart-panel--wide">
                    <h2 class="chart-panel__title">"Sales"</h2>
                    <canvas id="salesChart"></canvas>
                </div>
            </div>

            <div class="recommendation-list">
                <h2 class="section-title">"Recommendations"</h2>
                {move || {
                    let rejected_now = rejected.get();
                    data.get()
                        .map(|d| {
                            if d.recommendations.is_empty() {
                                view! {
                                    <p class="empty-note">
                                        "No recommendations for this product."
                                    </p>
                                }
                                    .into_any()
                            } else {
                                d.recommendations
                                    .iter()
                                    .map(|rec| {
                                        let is_rejected = rejected_now.contains(&rec.id);
                                        let rec_for_apply = rec.clone();
                                        let rec_id = rec.id;
                                        let item_class = if is_rejected {
                                            "recommendation-item recommendation-item--rejected"
                                        } else {
                                            "recommendation-item"
                                        };
                                        view! {
                                            <div class=item_class>
                                                <div class="recommendation-item__prices">
                                                    <span>"Current: " {format_currency(rec.current_price)}</span>
                                                    <span>
                                                        "Recommended: " {format_currency(rec.recommended_price)}
                                                    </span>
                                                    <span class="recommendation-item__delta">
                                                        "Change: " {format_currency(rec.delta())}
                                                    </span>
                                                </div>
                                                {rec
                                                    .reason
                                                    .clone()
                                                    .map(|reason| {
                                                        view! {
                                                            <p class="recommendation-item__reason">{reason}</p>
                                                        }
                                                    })}
                                                <div class="recommendation-item__actions">
                                                    <Button
                                                        size="sm".to_string()
                                                        disabled=is_rejected
                                                        on_click=Callback::new(move |_| on_apply(
                                                            rec_for_apply.clone(),
                                                        ))
                                                    >
                                                        "Apply"
                                                    </Button>
                                                    <Button
                                                        variant="secondary".to_string()
                                                        size="sm".to_string()
                                                        disabled=is_rejected
                                                        on_click=Callback::new(move |_| on_reject(rec_id))
                                                    >
                                                        "Reject"
                                                    </Button>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        })
                }}
            </div>

            {move || {
                data.get()
                    .map(|d| {
                        view! {
                            <div class="form-grid">
                                <ProductForm product=d.product.clone() />
                                <SaleForm product_id=d.product.id />
                                <CompetitorPriceForm product_id=d.product.id />
                            </div>
                        }
                    })
            }}

            <Modal>
                <PriceUpdateForm recommendation=apply_target />
            </Modal>
        </div>
    }
}

fn render_charts(registry: &ChartRegistry, data: &ProductDataResponse) -> Result<(), JsValue> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Ok(());
    };

    // Price history: own price plus one dashed line per competitor, colors
    // cycled in first-encounter order
    if let Some(canvas) = canvas_by_id(&document, "priceHistoryChart") {
        let own_points: Vec<DatedPoint> = data
            .price_history
            .iter()
            .map(|point| DatedPoint {
                x: point.date.clone(),
                y: point.price,
            })
            .collect();
        let mut datasets = vec![line_dataset(
            "Your Price",
            SeriesData::Dated(own_points),
            palette::PRIMARY,
            false,
        )];
        for (index, group) in group_competitor_prices(&data.competitor_prices)
            .into_iter()
            .enumerate()
        {
            let color = palette::SERIES[index % palette::SERIES.len()];
            let points = group
                .points
                .into_iter()
                .map(|point| DatedPoint {
                    x: point.date,
                    y: point.price,
                })
                .collect();
            datasets.push(dashed_line_dataset(&group.competitor_name, points, color));
        }

        let config = ChartConfig {
            kind: "line",
            data: ChartData {
                labels: Vec::new(),
                datasets,
            },
            options: Some(json!({
                "responsive": true,
                "maintainAspectRatio": false,
                "scales": {
                    "x": {
                        "type": "time",
                        "time": {
                            "unit": "day",
                            "displayFormats": { "day": "MMM d" }
                        },
                        "title": { "display": true, "text": "Date" }
                    },
                    "y": {
                        "title": { "display": true, "text": "Price ($)" }
                    }
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
            "return context.dataset.label + ': $' + context.parsed.y.toFixed(2);",
        )?;
        registry.mount_js(PRICE_HISTORY_CHART, &canvas, config_js);
    }

    // Sales: units as bars on the left axis, revenue as a line on the
    // right. No sales at all leaves the panel without a chart.
    if !data.sales.is_empty() {
        if let Some(canvas) = canvas_by_id(&document, "salesChart") {
            let series = aggregate_sales_by_date(&data.sales);
            let quantities: Vec<f64> = series.quantities.iter().map(|&q| q as f64).collect();

            let units_bars = Dataset {
                y_axis_id: Some("y"),
                ..bar_dataset("Units Sold", quantities, palette::PRIMARY)
            };
            let revenue_line = Dataset {
                kind: Some("line"),
                y_axis_id: Some("y1"),
                ..line_dataset(
                    "Revenue",
                    SeriesData::Values(series.revenues.clone()),
                    palette::SUCCESS,
                    false,
                )
            };

            let config = ChartConfig {
                kind: "bar",
                data: ChartData {
                    labels: series.dates.clone(),
                    datasets: vec![units_bars, revenue_line],
                },
                options: Some(json!({
                    "responsive": true,
                    "maintainAspectRatio": false,
                    "scales": {
                        "x": { "title": { "display": true, "text": "Date" } },
                        "y": {
                            "position": "left",
                            "title": { "display": true, "text": "Units Sold" }
                        },
                        "y1": {
                            "position": "right",
                            "title": { "display": true, "text": "Revenue ($)" },
                            "grid": { "drawOnChartArea": false }
                        }
                    }
                })),
            };
            let config_js = to_js(&config)?;
            install_callback(
                &config_js,
                &["options", "scales", "y1", "ticks"],
                "callback",
                "value",
                "return '$' + value;",
            )?;
            install_callback(
                &config_js,
                &["options", "plugins", "tooltip", "callbacks"],
                "label",
                "context",
                "if (context.dataset.label === 'Revenue') { return context.dataset.label + ': $' + context.parsed.y.toFixed(2); } return context.dataset.label + ': ' + context.parsed.y;",
            )?;
            registry.mount_js(PRODUCT_SALES_CHART, &canvas, config_js);
        }
    }

    Ok(())
}
