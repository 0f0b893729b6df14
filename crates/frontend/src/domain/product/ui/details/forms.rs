//! Data entry forms for the product page
//!
//! Submission itself is native form behavior; the components only wire up
//! constraint validation through [`validate_on_submit`].

use chrono::Utc;
use contracts::domain::product::ProductDto;
use contracts::domain::recommendation::RecommendationDto;
use leptos::prelude::*;

use crate::layout::ModalService;
use crate::shared::components::ui::Button;
use crate::shared::forms::validate_on_submit;
use crate::shared::number_format::format_currency;

/// Форма редактирования товара
#[component]
pub fn ProductForm(product: ProductDto) -> impl IntoView {
    view! {
        <form
            class="data-form"
            action=format!("/products/{}", product.id)
            method="post"
            novalidate=true
            on:submit=move |ev| {
                validate_on_submit(&ev);
            }
        >
            <h3 class="data-form__title">"Edit Product"</h3>
            <label class="data-form__field">
                "Name" <input type="text" name="name" required=true value=product.name.clone() />
            </label>
            <label class="data-form__field">
                "Category"
                <input
                    type="text"
                    name="category"
                    value=product.category.clone().unwrap_or_default()
                />
            </label>
            <label class="data-form__field">
                "Cost price"
                <input
                    type="number"
                    name="cost_price"
                    required=true
                    min="0"
                    step="0.01"
                    value=format!("{:.2}", product.cost_price)
                />
            </label>
            <label class="data-form__field">
                "Current price"
                <input
                    type="number"
                    name="current_price"
                    required=true
                    min="0"
                    step="0.01"
                    value=format!("{:.2}", product.current_price)
                />
            </label>
            <label class="data-form__field">
                "Stock level"
                <input
                    type="number"
                    name="stock_level"
                    min="0"
                    step="1"
                    value=product.stock_level.to_string()
                />
            </label>
            <Button button_type="submit".to_string()>"Save"</Button>
        </form>
    }
}

/// Форма регистрации продажи
#[component]
pub fn SaleForm(product_id: i64) -> impl IntoView {
    let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();

    view! {
        <form
            class="data-form"
            action=format!("/products/{}/sales", product_id)
            method="post"
            novalidate=true
            on:submit=move |ev| {
                validate_on_submit(&ev);
            }
        >
            <h3 class="data-form__title">"Record Sale"</h3>
            <label class="data-form__field">
                "Date" <input type="date" name="sale_date" required=true value=today.clone() />
            </label>
            <label class="data-form__field">
                "Quantity" <input type="number" name="quantity" required=true min="1" step="1" />
            </label>
            <label class="data-form__field">
                "Unit price"
                <input type="number" name="price" required=true min="0" step="0.01" />
            </label>
            <Button button_type="submit".to_string()>"Record"</Button>
        </form>
    }
}

/// Форма цены конкурента
#[component]
pub fn CompetitorPriceForm(product_id: i64) -> impl IntoView {
    let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();

    view! {
        <form
            class="data-form"
            action=format!("/products/{}/competitor_prices", product_id)
            method="post"
            novalidate=true
            on:submit=move |ev| {
                validate_on_submit(&ev);
            }
        >
            <h3 class="data-form__title">"Competitor Price"</h3>
            <label class="data-form__field">
                "Competitor" <input type="text" name="competitor_name" required=true />
            </label>
            <label class="data-form__field">
                "Date" <input type="date" name="date" required=true value=today.clone() />
            </label>
            <label class="data-form__field">
                "Price" <input type="number" name="price" required=true min="0" step="0.01" />
            </label>
            <Button button_type="submit".to_string()>"Add"</Button>
        </form>
    }
}

/// Форма обновления цены, открывается из рекомендации
///
/// Prefilled with the recommended price of the recommendation being
/// applied; renders nothing while no recommendation is selected.
#[component]
pub fn PriceUpdateForm(
    #[prop(into)] recommendation: Signal<Option<RecommendationDto>>,
) -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");

    view! {
        {move || {
            recommendation
                .get()
                .map(|rec| {
                    view! {
                        <form
                            class="data-form"
                            action=format!("/products/{}/update_price", rec.product_id)
                            method="post"
                            novalidate=true
                            on:submit=move |ev| {
                                validate_on_submit(&ev);
                            }
                        >
                            <h3 class="data-form__title">"Update Price"</h3>
                            <p class="data-form__hint">
                                {rec.product_name.clone()} ": "
                                {format_currency(rec.current_price)} " \u{2192} "
                                {format_currency(rec.recommended_price)}
                            </p>
                            <input
                                type="hidden"
                                name="recommendation_id"
                                value=rec.id.to_string()
                            />
                            <label class="data-form__field">
                                "New price"
                                <input
                                    type="number"
                                    name="new_price"
                                    required=true
                                    min="0"
                                    step="0.01"
                                    value=format!("{:.2}", rec.recommended_price)
                                />
                            </label>
                            <div class="data-form__actions">
                                <Button button_type="submit".to_string()>"Update"</Button>
                                <Button
                                    variant="ghost".to_string()
                                    on_click=Callback::new(move |_| modal.hide())
                                >
                                    "Cancel"
                                </Button>
                            </div>
                        </form>
                    }
                })
        }}
    }
}
