/// Универсальные утилиты для списков (поиск, сортировка) и строка поиска
use std::cmp::Ordering;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Types that a list page can filter by substring
pub trait Searchable {
    /// Does the item match the search text
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Types that a list page can sort by a named column
pub trait Sortable {
    fn compare_by_column(&self, other: &Self, column: &str) -> Ordering;
}

/// Минимальная длина запроса — короче фильтр не применяется
const MIN_FILTER_LEN: usize = 3;

pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().len() < MIN_FILTER_LEN {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter.trim()))
        .collect()
}

pub fn sort_list<T: Sortable>(items: &mut [T], column: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let ordering = a.compare_by_column(b, column);
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
}

/// Индикатор сортировки для заголовка колонки
pub fn sort_indicator(current: Option<&str>, column: &str, ascending: bool) -> &'static str {
    if current == Some(column) {
        if ascending {
            " \u{25b2}"
        } else {
            " \u{25bc}"
        }
    } else {
        " \u{21c5}"
    }
}

/// Search box with a 300ms debounce and a clear button.
#[component]
pub fn SearchInput(
    /// Current applied filter value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new filter once the debounce settles
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        format!("Search (min {} characters)...", MIN_FILTER_LEN)
    } else {
        placeholder
    };

    // Local state ahead of the debounce
    let (input_value, set_input_value) = signal(String::new());
    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(timeout_id);
            }
        }

        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            300,
        ) {
            Ok(timeout_id) => debounce_timeout.set_value(Some(timeout_id)),
            Err(_) => log::error!("Failed to schedule search debounce"),
        }
        closure.forget();
    };

    let is_filter_active = move || value.get().trim().len() >= MIN_FILTER_LEN;

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class=move || {
                    if is_filter_active() {
                        "search-input__field search-input__field--active"
                    } else {
                        "search-input__field"
                    }
                }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    handle_input_change(event_target_value(&ev));
                }
            />
            {move || {
                if input_value.get().is_empty() {
                    view! { <></> }.into_any()
                } else {
                    view! {
                        <button
                            type="button"
                            class="search-input__clear"
                            title="Clear"
                            on:click=clear_filter
                        >
                            {crate::shared::icons::icon("x")}
                        </button>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Item(&'static str);

    impl Searchable for Item {
        fn matches_filter(&self, filter: &str) -> bool {
            self.0.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    impl Sortable for Item {
        fn compare_by_column(&self, other: &Self, _column: &str) -> Ordering {
            self.0.cmp(other.0)
        }
    }

    #[test]
    fn test_filter_ignores_short_queries() {
        let items = vec![Item("Alpha"), Item("Beta")];
        assert_eq!(filter_list(items, "al").len(), 2);
    }

    #[test]
    fn test_filter_applies_from_min_length() {
        let items = vec![Item("Alpha"), Item("Beta")];
        let filtered = filter_list(items, "alp");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].0, "Alpha");
    }

    #[test]
    fn test_sort_list_descending() {
        let mut items = vec![Item("Beta"), Item("Alpha")];
        sort_list(&mut items, "name", false);
        assert_eq!(items[0].0, "Beta");
    }
}
