//! # Report charts — lazy Chart.js bootstrap
//!
//! Every `.report-chart` on the page becomes one Chart.js instance. The container's
//! `data-chart` attribute holds the chart `data` object as JSON and `data-type` the
//! chart type; the options are the same for every chart and live in
//! [`ChartOptions::default`].
//!
//! When Chart.js is not on the page yet the library is injected first (pinned version,
//! SRI hash, anonymous CORS) and the charts are built from its `load` callback.
//! Containers with missing or invalid data, or without a `<canvas>`, are skipped with
//! a warning; the remaining charts still render.

use serde::Serialize;
use serde_json::Value;

use crate::config::ChartsConfig;
use crate::effect::Effect;

/// What the adapter found on one `.report-chart`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartContainer {
    /// Position among the page's `.report-chart` elements.
    pub index: usize,
    /// Raw `data-chart` attribute.
    pub data: Option<String>,
    /// Raw `data-type` attribute.
    pub chart_type: Option<String>,
    pub has_canvas: bool,
}

/// The `<script>` element to inject when Chart.js is missing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartScript {
    pub src: String,
    pub integrity: String,
    pub cross_origin: &'static str,
}

/// One `new Chart(canvas, config)` call.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    /// Which `.report-chart` holds the canvas.
    pub container: usize,
    pub config: ChartConfig,
}

/// The configuration object handed to the Chart constructor.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: String,
    pub data: Value,
    pub options: ChartOptions,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub animation: Animation,
    pub plugins: Plugins,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Animation {
    pub duration: u32,
    pub easing: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub tooltip: Tooltip,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Legend {
    pub position: String,
    pub labels: LegendLabels,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabels {
    pub use_point_style: bool,
    pub box_width: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub background_color: String,
    pub title_font: Font,
    pub body_font: Font,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Font {
    pub size: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            animation: Animation {
                duration: 400,
                easing: "easeOutQuad".to_string(),
            },
            plugins: Plugins {
                legend: Legend {
                    position: "top".to_string(),
                    labels: LegendLabels {
                        use_point_style: true,
                        box_width: 6,
                    },
                },
                tooltip: Tooltip {
                    background_color: "rgba(0, 0, 0, 0.7)".to_string(),
                    title_font: Font { size: 14 },
                    body_font: Font { size: 13 },
                },
            },
        }
    }
}

#[derive(Debug)]
pub struct Charts {
    script: ChartScript,
    default_type: String,
    /// Containers waiting for the library to load.
    pending: Vec<ChartContainer>,
}

impl Charts {
    pub fn new(config: &ChartsConfig) -> Self {
        Self {
            script: ChartScript {
                src: config.script_url.clone(),
                integrity: config.integrity.clone(),
                cross_origin: "anonymous",
            },
            default_type: config.default_type.clone(),
            pending: Vec::new(),
        }
    }

    pub fn found(&mut self, library_loaded: bool, containers: Vec<ChartContainer>) -> Vec<Effect> {
        if containers.is_empty() {
            return vec![];
        }
        if library_loaded {
            return self.build(containers);
        }
        tracing::info!("loading chart library for {} charts", containers.len());
        self.pending = containers;
        vec![Effect::LoadChartLibrary(self.script.clone())]
    }

    pub fn library_loaded(&mut self) -> Vec<Effect> {
        let pending = std::mem::take(&mut self.pending);
        self.build(pending)
    }

    fn build(&self, containers: Vec<ChartContainer>) -> Vec<Effect> {
        containers
            .into_iter()
            .filter_map(|container| self.spec(container))
            .map(Effect::RenderChart)
            .collect()
    }

    fn spec(&self, container: ChartContainer) -> Option<ChartSpec> {
        let Some(raw) = container.data.as_deref() else {
            tracing::warn!("report chart {} has no data-chart", container.index);
            return None;
        };
        let data: Value = match serde_json::from_str(raw) {
            Ok(Value::Null) => {
                tracing::warn!("report chart {} has null data", container.index);
                return None;
            }
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("report chart {} has invalid data: {}", container.index, e);
                return None;
            }
        };
        if !container.has_canvas {
            tracing::warn!("report chart {} has no canvas", container.index);
            return None;
        }
        let chart_type = container
            .chart_type
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| self.default_type.clone());
        Some(ChartSpec {
            container: container.index,
            config: ChartConfig {
                chart_type,
                data,
                options: ChartOptions::default(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn container(index: usize, data: Option<&str>, chart_type: Option<&str>) -> ChartContainer {
        ChartContainer {
            index,
            data: data.map(String::from),
            chart_type: chart_type.map(String::from),
            has_canvas: true,
        }
    }

    fn charts() -> Charts {
        Charts::new(&ChartsConfig::default())
    }

    #[test]
    fn test_no_containers_does_nothing() {
        assert!(charts().found(false, vec![]).is_empty());
    }

    #[test]
    fn test_missing_library_is_injected_then_built() {
        let mut charts = charts();
        let effects = charts.found(false, vec![container(0, Some(r#"{"labels":[]}"#), None)]);
        match &effects[..] {
            [Effect::LoadChartLibrary(script)] => {
                assert!(script.src.contains("chart.js@3.7.1"));
                assert!(script.integrity.starts_with("sha384-"));
                assert_eq!(script.cross_origin, "anonymous");
            }
            other => panic!("unexpected {:?}", other),
        }
        let built = charts.library_loaded();
        assert_eq!(built.len(), 1);
        assert!(charts.library_loaded().is_empty());
    }

    #[test]
    fn test_loaded_library_builds_immediately() {
        let mut charts = charts();
        let effects = charts.found(
            true,
            vec![container(3, Some(r#"{"labels":["a"]}"#), Some("bar"))],
        );
        match &effects[..] {
            [Effect::RenderChart(spec)] => {
                assert_eq!(spec.container, 3);
                assert_eq!(spec.config.chart_type, "bar");
                assert_eq!(spec.config.data, json!({"labels": ["a"]}));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_bad_containers_are_skipped() {
        let mut charts = charts();
        let mut no_canvas = container(3, Some("{}"), None);
        no_canvas.has_canvas = false;
        let effects = charts.found(
            true,
            vec![
                container(0, None, None),
                container(1, Some("{not json"), None),
                container(2, Some("null"), None),
                no_canvas,
                container(4, Some("{}"), Some("")),
            ],
        );
        match &effects[..] {
            [Effect::RenderChart(spec)] => {
                assert_eq!(spec.container, 4);
                assert_eq!(spec.config.chart_type, "line");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_options_serialize_like_chart_js_expects() {
        let value = serde_json::to_value(ChartOptions::default()).unwrap();
        assert_eq!(value["maintainAspectRatio"], json!(false));
        assert_eq!(value["animation"]["easing"], json!("easeOutQuad"));
        assert_eq!(value["plugins"]["legend"]["labels"]["usePointStyle"], json!(true));
        assert_eq!(value["plugins"]["legend"]["labels"]["boxWidth"], json!(6));
        assert_eq!(
            value["plugins"]["tooltip"]["backgroundColor"],
            json!("rgba(0, 0, 0, 0.7)")
        );
        assert_eq!(value["plugins"]["tooltip"]["titleFont"]["size"], json!(14));
        assert_eq!(value["plugins"]["tooltip"]["bodyFont"]["size"], json!(13));
    }

    #[test]
    fn test_config_uses_type_key() {
        let config = ChartConfig {
            chart_type: "pie".to_string(),
            data: json!({}),
            options: ChartOptions::default(),
        };
        let value = serde_json::to_value(config).unwrap();
        assert_eq!(value["type"], json!("pie"));
    }
}
