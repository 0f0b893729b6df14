use leptos::prelude::*;

use crate::layout::ModalService;
use crate::routes::routes::AppRoutes;
use crate::shared::charts::ChartRegistry;

#[component]
pub fn App() -> impl IntoView {
    // Live chart instances for the whole session, keyed by chart id
    provide_context(ChartRegistry::new());

    // Centralized modal management (price update dialog)
    provide_context(ModalService::new());

    view! { <AppRoutes /> }
}
