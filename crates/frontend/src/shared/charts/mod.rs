pub mod bindings;
pub mod config;
pub mod registry;

pub use registry::ChartRegistry;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement};

/// Canvas lookup for chart init. A missing or non-canvas element means the
/// current page does not carry this chart, so callers skip it silently.
pub fn canvas_by_id(document: &Document, id: &str) -> Option<HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok())
}
