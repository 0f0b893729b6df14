use leptos::prelude::*;

/// Быстрый выбор периода для графиков дашборда
const QUICK_RANGES: [(u32, &str); 3] = [(7, "7 days"), (30, "30 days"), (90, "90 days")];

/// Quick range buttons (7/30/90 days). The selected button carries the
/// `active` class; clicking fires `on_select` with the day count.
#[component]
pub fn DateRangeSelector(
    #[prop(into)] selected_days: Signal<u32>,
    #[prop(into)] on_select: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="date-range-selector" role="group">
            {QUICK_RANGES
                .iter()
                .map(|&(days, label)| {
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if selected_days.get() == days {
                                    "date-range-selector__button active"
                                } else {
                                    "date-range-selector__button"
                                }
                            }
                            on:click=move |_| on_select.run(days)
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
