pub mod state;

use std::cmp::Ordering;

use contracts::domain::product::ProductDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::domain::product::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::list_utils::{
    filter_list, sort_indicator, sort_list, SearchInput, Searchable, Sortable,
};
use crate::shared::number_format::format_currency;

impl Searchable for ProductDto {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.name.to_lowercase().contains(&filter)
            || self
                .category
                .as_deref()
                .map(|category| category.to_lowercase().contains(&filter))
                .unwrap_or(false)
    }
}

impl Sortable for ProductDto {
    fn compare_by_column(&self, other: &Self, column: &str) -> Ordering {
        match column {
            "price" => self
                .current_price
                .partial_cmp(&other.current_price)
                .unwrap_or(Ordering::Equal),
            "margin" => self
                .margin()
                .partial_cmp(&other.margin())
                .unwrap_or(Ordering::Equal),
            "stock" => self.stock_level.cmp(&other.stock_level),
            _ => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
        }
    }
}

/// Product catalog with client-side search and column sorting
#[component]
pub fn ProductListPage() -> impl IntoView {
    let state = state::create_state();
    let (error, set_error) = signal(None::<String>);

    spawn_local(async move {
        match api::get_products().await {
            Ok(products) => {
                state.update(|s| {
                    s.products = products;
                    s.is_loaded = true;
                });
            }
            Err(e) => {
                log::error!("Failed to load products: {}", e);
                set_error.set(Some(e));
            }
        }
    });

    let visible = move || {
        let s = state.get();
        let mut items = filter_list(s.products.clone(), &s.filter);
        if let Some(column) = s.sort_column.as_deref() {
            sort_list(&mut items, column, s.sort_ascending);
        }
        items
    };

    let toggle_sort = move |column: &'static str| {
        state.update(|s| {
            if s.sort_column.as_deref() == Some(column) {
                s.sort_ascending = !s.sort_ascending;
            } else {
                s.sort_column = Some(column.to_string());
                s.sort_ascending = true;
            }
        });
    };

    let indicator = move |column: &'static str| {
        let s = state.get();
        sort_indicator(s.sort_column.as_deref(), column, s.sort_ascending)
    };

    view! {
        <div class="product-list-page">
            <PageHeader title="Products">
                <SearchInput
                    value=Signal::derive(move || state.get().filter.clone())
                    on_change=move |filter: String| state.update(|s| s.filter = filter)
                    placeholder="Search products..."
                />
            </PageHeader>

            {move || {
                if let Some(err) = error.get() {
                    view! {
                        <div class="alert alert--error">
                            <strong>"Failed to load products: "</strong>
                            {err}
                        </div>
                    }
                        .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            <table class="data-table">
                <thead>
                    <tr>
                        <th class="sortable" on:click=move |_| toggle_sort("name")>
                            "Name"
                            {move || indicator("name")}
                        </th>
                        <th>"Category"</th>
                        <th class="sortable" on:click=move |_| toggle_sort("price")>
                            "Price"
                            {move || indicator("price")}
                        </th>
                        <th class="sortable" on:click=move |_| toggle_sort("margin")>
                            "Margin"
                            {move || indicator("margin")}
                        </th>
                        <th class="sortable" on:click=move |_| toggle_sort("stock")>
                            "Stock"
                            {move || indicator("stock")}
                        </th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        visible()
                            .into_iter()
                            .map(|product| {
                                view! {
                                    <tr>
                                        <td>
                                            <A href=format!(
                                                "/products/{}",
                                                product.id,
                                            )>{product.name.clone()}</A>
                                        </td>
                                        <td>{product.category.clone().unwrap_or_default()}</td>
                                        <td>{format_currency(product.current_price)}</td>
                                        <td>{format!("{:.1}%", product.margin() * 100.0)}</td>
                                        <td>{product.stock_level}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            {move || {
                let s = state.get();
                if s.is_loaded && s.products.is_empty() {
                    view! { <p class="empty-note">"No products yet."</p> }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}
