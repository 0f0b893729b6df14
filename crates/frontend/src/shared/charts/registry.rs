//! Реестр живых графиков, вместо глобальных window-хэндлов
//!
//! Pages mount charts under a stable id and refresh or destroy them through
//! the registry; whichever component needs to touch a chart takes the
//! registry from context instead of reaching for a global.

use std::collections::HashMap;

use js_sys::{Array, Reflect};
use leptos::prelude::{LocalStorage, StoredValue};
use wasm_bindgen::JsValue;
use web_sys::HtmlCanvasElement;

use super::bindings::Chart;
use super::config::{to_js, ChartConfig};

/// Owns every live chart instance, keyed by chart id. Chart handles are JS
/// values and not `Send`, so the map lives in a local-storage arena slot;
/// the registry itself is a copyable key and goes into Leptos context.
#[derive(Clone, Copy)]
pub struct ChartRegistry {
    charts: StoredValue<HashMap<&'static str, Chart>, LocalStorage>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self {
            charts: StoredValue::new_local(HashMap::new()),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.charts.with_value(|charts| charts.contains_key(id))
    }

    /// Builds a chart on `canvas` under `id`. A chart already mounted under
    /// the same id is destroyed and replaced.
    pub fn mount(
        &self,
        id: &'static str,
        canvas: &HtmlCanvasElement,
        config: &ChartConfig,
    ) -> Result<(), JsValue> {
        self.mount_js(id, canvas, to_js(config)?);
        Ok(())
    }

    /// Same as [`Self::mount`] for a config already lowered to JS (used when
    /// formatter callbacks were installed on the serialized tree).
    pub fn mount_js(&self, id: &'static str, canvas: &HtmlCanvasElement, config: JsValue) {
        let chart = Chart::new(canvas, &config);
        self.charts.update_value(|charts| {
            if let Some(previous) = charts.insert(id, chart) {
                previous.destroy();
            }
        });
    }

    /// Rewrites labels and per-dataset values on a live chart and redraws
    /// it. An id with no mounted chart is a silent no-op, same as a missing
    /// chart container during init.
    pub fn update_data(
        &self,
        id: &str,
        labels: &[String],
        series: &[Vec<f64>],
    ) -> Result<(), JsValue> {
        self.charts.with_value(|charts| {
            let Some(chart) = charts.get(id) else {
                return Ok(());
            };
            let data = chart.data();

            let labels_js = Array::new();
            for label in labels {
                labels_js.push(&JsValue::from_str(label));
            }
            Reflect::set(&data, &JsValue::from_str("labels"), &labels_js)?;

            let datasets = Reflect::get(&data, &JsValue::from_str("datasets"))?;
            for (index, values) in series.iter().enumerate() {
                let dataset = Reflect::get_u32(&datasets, index as u32)?;
                if dataset.is_undefined() {
                    continue;
                }
                let values_js = Array::new();
                for value in values {
                    values_js.push(&JsValue::from_f64(*value));
                }
                Reflect::set(&dataset, &JsValue::from_str("data"), &values_js)?;
            }

            chart.update();
            Ok(())
        })
    }

    /// Destroys and forgets the chart under `id`, if any.
    pub fn destroy(&self, id: &str) {
        self.charts.update_value(|charts| {
            if let Some(chart) = charts.remove(id) {
                chart.destroy();
            }
        });
    }
}

impl Default for ChartRegistry {
    fn default() -> Self {
        Self::new()
    }
}
