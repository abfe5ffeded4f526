//! Fixed sample chart configurations.
//!
//! The dashboard ships six demo charts with hardcoded labels, values and a
//! five-step blue color ramp. The structs below mirror the Chart.js config
//! object shape; `serde_json` turns them into the payload handed to
//! [`crate::js_bridge::render_chart`]. This is pure configuration, not
//! modeled data.

use serde::Serialize;

/// Opacity ramp applied to per-point chart colors, strongest first.
pub const COLOR_RAMP: [&str; 5] = [
    "rgba(0, 156, 255, .7)",
    "rgba(0, 156, 255, .6)",
    "rgba(0, 156, 255, .5)",
    "rgba(0, 156, 255, .4)",
    "rgba(0, 156, 255, .3)",
];

#[derive(Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Doughnut,
}

/// One dataset within a chart. Field names serialize to the camelCase keys
/// Chart.js expects.
#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<BackgroundColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

/// Either one color for the whole dataset or one per data point.
#[derive(Serialize, Clone)]
#[serde(untagged)]
pub enum BackgroundColor {
    Single(String),
    PerPoint(Vec<String>),
}

#[derive(Serialize, Clone)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Serialize, Clone, Copy)]
pub struct ChartOptions {
    pub responsive: bool,
}

/// Full Chart.js constructor argument.
#[derive(Serialize, Clone)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

/// A chart paired with the id of the canvas it renders into.
#[derive(Clone)]
pub struct ChartWidget {
    pub canvas_id: &'static str,
    pub title: &'static str,
    pub config: ChartConfig,
}

impl ChartWidget {
    /// Serialize the config for the JS bridge.
    pub fn config_json(&self) -> String {
        serde_json::to_string(&self.config).unwrap_or_default()
    }
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn single(color: &str) -> Option<BackgroundColor> {
    Some(BackgroundColor::Single(color.to_string()))
}

fn ramp() -> Option<BackgroundColor> {
    Some(BackgroundColor::PerPoint(
        COLOR_RAMP.iter().map(|c| c.to_string()).collect(),
    ))
}

fn options() -> ChartOptions {
    ChartOptions { responsive: true }
}

const YEARS: [&str; 7] = ["2016", "2017", "2018", "2019", "2020", "2021", "2022"];
const COUNTRIES: [&str; 5] = ["Italy", "France", "Spain", "USA", "Argentina"];
const COUNTRY_VALUES: [f64; 5] = [55.0, 49.0, 44.0, 24.0, 15.0];

fn worldwide_sales() -> ChartConfig {
    let series: [(&str, [f64; 7], &str); 3] = [
        ("USA", [15.0, 30.0, 55.0, 65.0, 60.0, 80.0, 95.0], COLOR_RAMP[0]),
        ("UK", [8.0, 35.0, 40.0, 60.0, 70.0, 55.0, 75.0], COLOR_RAMP[2]),
        ("AU", [12.0, 25.0, 45.0, 55.0, 65.0, 70.0, 60.0], COLOR_RAMP[4]),
    ];
    ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: labels(&YEARS),
            datasets: series
                .iter()
                .map(|(label, data, color)| Dataset {
                    label: Some(label.to_string()),
                    data: data.to_vec(),
                    background_color: single(color),
                    fill: None,
                })
                .collect(),
        },
        options: options(),
    }
}

fn sales_revenue() -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels: labels(&YEARS),
            datasets: vec![
                Dataset {
                    label: Some("Sales".to_string()),
                    data: vec![15.0, 30.0, 55.0, 45.0, 70.0, 65.0, 85.0],
                    background_color: single(COLOR_RAMP[2]),
                    fill: Some(true),
                },
                Dataset {
                    label: Some("Revenue".to_string()),
                    data: vec![99.0, 135.0, 170.0, 130.0, 190.0, 180.0, 270.0],
                    background_color: single(COLOR_RAMP[4]),
                    fill: Some(true),
                },
            ],
        },
        options: options(),
    }
}

fn single_line() -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels: labels(&[
                "50", "60", "70", "80", "90", "100", "110", "120", "130", "140", "150",
            ]),
            datasets: vec![Dataset {
                label: Some("Sales".to_string()),
                data: vec![7.0, 8.0, 8.0, 9.0, 9.0, 9.0, 10.0, 11.0, 14.0, 14.0, 15.0],
                background_color: single(COLOR_RAMP[4]),
                fill: Some(false),
            }],
        },
        options: options(),
    }
}

fn country_chart(kind: ChartKind) -> ChartConfig {
    ChartConfig {
        kind,
        data: ChartData {
            labels: labels(&COUNTRIES),
            datasets: vec![Dataset {
                label: None,
                data: COUNTRY_VALUES.to_vec(),
                background_color: ramp(),
                fill: None,
            }],
        },
        options: options(),
    }
}

/// The six dashboard demo charts with their canvas element ids.
pub fn sample_charts() -> Vec<ChartWidget> {
    vec![
        ChartWidget {
            canvas_id: "worldwide-sales",
            title: "Worldwide Sales",
            config: worldwide_sales(),
        },
        ChartWidget {
            canvas_id: "sales-revenue",
            title: "Sales & Revenue",
            config: sales_revenue(),
        },
        ChartWidget {
            canvas_id: "line-chart",
            title: "Single Line Chart",
            config: single_line(),
        },
        ChartWidget {
            canvas_id: "bar-chart",
            title: "Single Bar Chart",
            config: country_chart(ChartKind::Bar),
        },
        ChartWidget {
            canvas_id: "pie-chart",
            title: "Pie Chart",
            config: country_chart(ChartKind::Pie),
        },
        ChartWidget {
            canvas_id: "doughnut-chart",
            title: "Doughnut Chart",
            config: country_chart(ChartKind::Doughnut),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_sample_charts_serialize() {
        for widget in sample_charts() {
            let json = widget.config_json();
            assert!(
                !json.is_empty(),
                "chart {} should serialize without error",
                widget.canvas_id
            );
            // Must parse back as a JSON object with the Chart.js shape.
            let value: serde_json::Value = serde_json::from_str(&json).unwrap();
            assert!(value.get("type").is_some());
            assert!(value.get("data").and_then(|d| d.get("datasets")).is_some());
            assert_eq!(
                value.pointer("/options/responsive"),
                Some(&serde_json::Value::Bool(true))
            );
        }
    }

    #[test]
    fn there_are_six_charts_with_unique_canvases() {
        let charts = sample_charts();
        assert_eq!(charts.len(), 6);
        let ids: HashSet<_> = charts.iter().map(|c| c.canvas_id).collect();
        assert_eq!(ids.len(), 6, "canvas ids must not collide");
    }

    #[test]
    fn color_ramp_has_five_steps() {
        assert_eq!(COLOR_RAMP.len(), 5);
        assert!(COLOR_RAMP.iter().all(|c| c.starts_with("rgba(0, 156, 255")));
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ChartKind::Doughnut).unwrap(),
            "\"doughnut\""
        );
    }

    #[test]
    fn per_point_colors_flatten_to_an_array() {
        let json = serde_json::to_string(&ramp()).unwrap();
        assert!(json.starts_with('['), "untagged enum should serialize bare");
    }

    #[test]
    fn dataset_labels_match_chart_series() {
        let charts = sample_charts();
        let worldwide = &charts[0];
        let names: Vec<_> = worldwide
            .config
            .data
            .datasets
            .iter()
            .filter_map(|d| d.label.clone())
            .collect();
        assert_eq!(names, vec!["USA", "UK", "AU"]);
    }
}
