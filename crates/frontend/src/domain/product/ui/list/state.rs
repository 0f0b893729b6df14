use contracts::domain::product::ProductDto;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ProductListState {
    pub products: Vec<ProductDto>,
    pub filter: String,
    pub sort_column: Option<String>,
    pub sort_ascending: bool,
    pub is_loaded: bool,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            filter: String::new(),
            sort_column: None,
            sort_ascending: true,
            is_loaded: false,
        }
    }
}

// State lives in component scope so it is dropped when the page unmounts
pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}
