//! Bindings to the page-global Chart.js constructor

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

#[wasm_bindgen]
extern "C" {
    /// Live Chart.js instance bound to one canvas.
    pub type Chart;

    #[wasm_bindgen(constructor)]
    pub fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Chart;

    /// Redraws the chart after its data object was mutated.
    #[wasm_bindgen(method)]
    pub fn update(this: &Chart);

    /// Releases the canvas; the instance must not be used afterwards.
    #[wasm_bindgen(method)]
    pub fn destroy(this: &Chart);

    /// The chart's mutable `data` object (labels + datasets).
    #[wasm_bindgen(method, getter)]
    pub fn data(this: &Chart) -> JsValue;
}
