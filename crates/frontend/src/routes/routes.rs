use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::SalesOverviewDashboard;
use crate::domain::product::ui::{ProductDetailsPage, ProductListPage};
use crate::layout::AppHeader;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <AppHeader />
            <main class="app-content">
                <Routes fallback=|| view! { <p class="empty-note">"Page not found."</p> }>
                    <Route path=path!("/") view=SalesOverviewDashboard />
                    <Route path=path!("/products") view=ProductListPage />
                    <Route path=path!("/products/:id") view=ProductDetailsPage />
                </Routes>
            </main>
        </Router>
    }
}
