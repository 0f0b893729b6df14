use crate::shared::icons::icon;
use leptos::prelude::*;

/// Dashboard stat card: icon, label and one preformatted value.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name resolved through the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Preformatted value; None while the payload is loading
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Optional accent: "success", "warning" or "error"
    #[prop(optional, into)]
    accent: MaybeProp<String>,
) -> impl IntoView {
    let card_class = move || match accent.get().as_deref() {
        Some("success") => "stat-card stat-card--success",
        Some("warning") => "stat-card stat-card--warning",
        Some("error") => "stat-card stat-card--error",
        _ => "stat-card",
    };

    let formatted = move || value.get().unwrap_or_else(|| "\u{2014}".to_string());

    view! {
        <div class=card_class>
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}
