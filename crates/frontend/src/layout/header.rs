use leptos::prelude::*;
use leptos_router::components::A;

/// Top navigation bar, shared by every page
#[component]
pub fn AppHeader() -> impl IntoView {
    view! {
        <header class="app-header">
            <div class="app-header__brand">
                <A href="/">"PricePilot"</A>
            </div>
            <nav class="app-header__nav">
                <A href="/">"Dashboard"</A>
                <A href="/products">"Products"</A>
            </nav>
        </header>
    }
}
