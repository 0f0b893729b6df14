use leptos::prelude::*;

/// Сервис для централизованного управления модальным окном
#[derive(Clone, Copy)]
pub struct ModalService {
    is_visible: RwSignal<bool>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            is_visible: RwSignal::new(false),
        }
    }

    pub fn show(&self) {
        self.is_visible.set(true);
    }

    pub fn hide(&self) {
        self.is_visible.set(false);
    }

    pub fn is_open(&self) -> bool {
        self.is_visible.get()
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

/// Overlay-hosted modal; clicking the backdrop closes it, clicks inside the
/// content do not propagate out.
#[component]
pub fn Modal(children: ChildrenFn) -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");

    view! {
        {move || {
            if modal.is_open() {
                view! {
                    <div class="modal-overlay" on:click=move |_| modal.hide()>
                        <div class="modal-content" on:click=|e| e.stop_propagation()>
                            {children()}
                        </div>
                    </div>
                }
                    .into_any()
            } else {
                view! { <></> }.into_any()
            }
        }}
    }
}
