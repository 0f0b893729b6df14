//! Общий стиль графиков: палитра и сборка датасетов/конфигов Chart.js
//!
//! Configs are plain serde structs lowered to JS with a JSON-compatible
//! serializer; formatter callbacks cannot cross that boundary as data and
//! are installed afterwards with [`install_callback`].

use js_sys::{Function, Object, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::JsValue;

/// Site-wide chart colors
pub mod palette {
    pub const PRIMARY: &str = "rgba(0, 123, 255, 1)";
    pub const SUCCESS: &str = "rgba(40, 167, 69, 1)";
    pub const DANGER: &str = "rgba(220, 53, 69, 1)";
    pub const WARNING: &str = "rgba(255, 193, 7, 1)";
    pub const INFO: &str = "rgba(23, 162, 184, 1)";
    pub const SECONDARY: &str = "rgba(108, 117, 125, 1)";
    pub const PURPLE: &str = "rgba(111, 66, 193, 1)";

    /// Cycled over competitor lines in first-encounter order
    pub const SERIES: [&str; 5] = [DANGER, WARNING, SUCCESS, PURPLE, INFO];
}

/// Alpha variant of an opaque `rgba(..., 1)` palette color. Colors in any
/// other form come back unchanged.
pub fn with_alpha(color: &str, alpha: &str) -> String {
    match color.strip_suffix("1)") {
        Some(prefix) => format!("{}{})", prefix, alpha),
        None => color.to_string(),
    }
}

/// Top-level Chart.js config: chart type, data, option tree.
#[derive(Debug, Clone, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ChartData {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Dataset values: either plain numbers parallel to the labels, or dated
/// `{x, y}` points for time-scale charts.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SeriesData {
    Values(Vec<f64>),
    Dated(Vec<DatedPoint>),
}

impl Default for SeriesData {
    fn default() -> Self {
        SeriesData::Values(Vec::new())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DatedPoint {
    pub x: String,
    pub y: f64,
}

/// Fill/stroke paint: one color for the whole dataset, or one per segment
/// (doughnut).
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Paint {
    Single(String),
    PerPoint(Vec<String>),
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: SeriesData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<[u32; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_background_color: Option<String>,
    /// Overrides the chart-level type for mixed charts (line over bars)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    #[serde(rename = "yAxisID", skip_serializing_if = "Option::is_none")]
    pub y_axis_id: Option<&'static str>,
}

/// Solid line with the usual curve and point sizing; `fill` shades the area
/// under the line with the translucent variant of `color`.
pub fn line_dataset(label: &str, data: SeriesData, color: &str, fill: bool) -> Dataset {
    let background = if fill {
        with_alpha(color, "0.1")
    } else {
        "transparent".to_string()
    };
    Dataset {
        label: Some(label.to_string()),
        data,
        border_color: Some(color.to_string()),
        background_color: Some(Paint::Single(background)),
        fill: Some(fill),
        tension: Some(0.4),
        border_width: Some(2),
        point_radius: Some(3),
        point_hover_radius: Some(5),
        ..Dataset::default()
    }
}

/// Dashed line used for competitor price series.
pub fn dashed_line_dataset(label: &str, points: Vec<DatedPoint>, color: &str) -> Dataset {
    Dataset {
        label: Some(label.to_string()),
        data: SeriesData::Dated(points),
        border_color: Some(color.to_string()),
        background_color: Some(Paint::Single("transparent".to_string())),
        border_width: Some(2),
        border_dash: Some([5, 5]),
        tension: Some(0.4),
        point_radius: Some(3),
        ..Dataset::default()
    }
}

pub fn bar_dataset(label: &str, data: Vec<f64>, color: &str) -> Dataset {
    Dataset {
        label: Some(label.to_string()),
        data: SeriesData::Values(data),
        background_color: Some(Paint::Single(with_alpha(color, "0.7"))),
        border_color: Some(color.to_string()),
        border_width: Some(1),
        border_radius: Some(3),
        hover_background_color: Some(color.to_string()),
        ..Dataset::default()
    }
}

/// Doughnut segments, one color per value; no label (the legend names the
/// segments through the chart labels).
pub fn doughnut_dataset(data: Vec<f64>, colors: Vec<String>) -> Dataset {
    Dataset {
        data: SeriesData::Values(data),
        background_color: Some(Paint::PerPoint(colors)),
        border_width: Some(0),
        ..Dataset::default()
    }
}

/// Lowers a config to a JS value, keeping plain objects/arrays (not Maps) so
/// Chart.js can read them.
pub fn to_js(config: &ChartConfig) -> Result<JsValue, JsValue> {
    config
        .serialize(&Serializer::json_compatible())
        .map_err(JsValue::from)
}

/// Walks `path` inside a JS object, creating intermediate objects as needed,
/// and returns the innermost one.
fn resolve_path(target: &JsValue, path: &[&str]) -> Result<JsValue, JsValue> {
    let mut current = target.clone();
    for key in path {
        let key = JsValue::from_str(key);
        let next = Reflect::get(&current, &key)?;
        current = if next.is_undefined() || next.is_null() {
            let created = Object::new();
            Reflect::set(&current, &key, &created)?;
            created.into()
        } else {
            next
        };
    }
    Ok(current)
}

/// Installs a JS formatter function at `path`/`name` inside a lowered
/// config. Used for tick and tooltip callbacks, which have no JSON
/// representation.
pub fn install_callback(
    target: &JsValue,
    path: &[&str],
    name: &str,
    arg: &str,
    body: &str,
) -> Result<(), JsValue> {
    let slot = resolve_path(target, path)?;
    let function = Function::new_with_args(arg, body);
    Reflect::set(&slot, &JsValue::from_str(name), &function)?;
    Ok(())
}

/// Site-wide `Chart.defaults`, applied once before the first chart mounts:
/// muted axis text, the site font and shared tooltip/legend styling. A page
/// without the Chart.js script is left alone.
pub fn install_global_defaults() -> Result<(), JsValue> {
    let Some(window) = web_sys::window() else {
        return Ok(());
    };
    let chart = Reflect::get(&window, &JsValue::from_str("Chart"))?;
    if chart.is_undefined() {
        return Ok(());
    }

    let defaults = resolve_path(&chart, &["defaults"])?;
    Reflect::set(
        &defaults,
        &JsValue::from_str("color"),
        &JsValue::from_str("#adb5bd"),
    )?;
    let font = resolve_path(&defaults, &["font"])?;
    Reflect::set(
        &font,
        &JsValue::from_str("family"),
        &JsValue::from_str("'Segoe UI', 'Helvetica Neue', Arial, sans-serif"),
    )?;

    let tooltip = resolve_path(&defaults, &["plugins", "tooltip"])?;
    Reflect::set(
        &tooltip,
        &JsValue::from_str("backgroundColor"),
        &JsValue::from_str("rgba(33, 37, 41, 0.9)"),
    )?;
    let title_font = Object::new();
    Reflect::set(
        &title_font,
        &JsValue::from_str("weight"),
        &JsValue::from_str("bold"),
    )?;
    Reflect::set(&tooltip, &JsValue::from_str("titleFont"), &title_font)?;
    Reflect::set(
        &tooltip,
        &JsValue::from_str("padding"),
        &JsValue::from_f64(10.0),
    )?;
    Reflect::set(
        &tooltip,
        &JsValue::from_str("cornerRadius"),
        &JsValue::from_f64(3.0),
    )?;
    Reflect::set(
        &tooltip,
        &JsValue::from_str("caretSize"),
        &JsValue::from_f64(5.0),
    )?;

    let legend_labels = resolve_path(&defaults, &["plugins", "legend", "labels"])?;
    Reflect::set(
        &legend_labels,
        &JsValue::from_str("usePointStyle"),
        &JsValue::from_bool(true),
    )?;
    Reflect::set(
        &legend_labels,
        &JsValue::from_str("padding"),
        &JsValue::from_f64(15.0),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_alpha() {
        assert_eq!(
            with_alpha("rgba(0, 123, 255, 1)", "0.1"),
            "rgba(0, 123, 255, 0.1)"
        );
        assert_eq!(
            with_alpha("rgba(40, 167, 69, 1)", "0.7"),
            "rgba(40, 167, 69, 0.7)"
        );
        // Non-opaque input passes through untouched
        assert_eq!(with_alpha("transparent", "0.1"), "transparent");
    }

    #[test]
    fn test_line_dataset_keys() {
        let value = serde_json::to_value(line_dataset(
            "Revenue",
            SeriesData::Values(vec![1.0]),
            palette::PRIMARY,
            true,
        ))
        .unwrap();
        assert_eq!(value["label"], "Revenue");
        assert_eq!(value["borderColor"], "rgba(0, 123, 255, 1)");
        assert_eq!(value["backgroundColor"], "rgba(0, 123, 255, 0.1)");
        assert_eq!(value["fill"], true);
        assert_eq!(value["tension"], 0.4);
        assert!(value.get("borderDash").is_none());
    }

    #[test]
    fn test_dashed_line_dataset_keys() {
        let points = vec![DatedPoint {
            x: "2024-01-01".to_string(),
            y: 9.5,
        }];
        let value =
            serde_json::to_value(dashed_line_dataset("Competitor", points, palette::DANGER))
                .unwrap();
        assert_eq!(value["borderDash"], serde_json::json!([5, 5]));
        assert_eq!(value["backgroundColor"], "transparent");
        assert_eq!(value["data"][0]["x"], "2024-01-01");
        assert_eq!(value["data"][0]["y"], 9.5);
    }

    #[test]
    fn test_doughnut_dataset_colors_per_segment() {
        let value = serde_json::to_value(doughnut_dataset(
            vec![1.0, 2.0, 3.0],
            vec![
                with_alpha(palette::SUCCESS, "0.8"),
                with_alpha(palette::DANGER, "0.8"),
                with_alpha(palette::SECONDARY, "0.8"),
            ],
        ))
        .unwrap();
        assert!(value.get("label").is_none());
        assert_eq!(value["borderWidth"], 0);
        assert_eq!(value["backgroundColor"].as_array().unwrap().len(), 3);
    }
}
