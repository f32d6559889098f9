//! Revenue bar chart model.
//!
//! `ChartConfig` serializes to the object accepted by the Chart.js
//! constructor: `{ type, data: { labels, datasets }, options }`.

use serde::{Deserialize, Serialize};

use super::record::SalesRecord;

/// Parallel label/value arrays, one entry per record in input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

impl ChartData {
    pub fn from_records(records: &[SalesRecord]) -> Self {
        Self {
            labels: records.iter().map(|r| r.date.clone()).collect(),
            values: records.iter().map(|r| r.revenue).collect(),
        }
    }
}

/// Fixed visual styling of the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub dataset_label: String,
    pub bar_color: String,
    pub bar_border_radius: u32,
    pub tick_color: String,
    pub show_legend: bool,
    pub show_tooltips: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            dataset_label: "Revenue".to_string(),
            bar_color: "rgba(6,214,255,0.9)".to_string(),
            bar_border_radius: 6,
            tick_color: "#fff".to_string(),
            show_legend: false,
            show_tooltips: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: ConfigData,
    pub options: ConfigOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigData {
    pub labels: Vec<String>,
    pub datasets: Vec<BarDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarDataset {
    pub label: String,
    pub data: Vec<u64>,
    pub background_color: String,
    pub border_radius: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    pub scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub tooltip: Tooltip,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub ticks: Ticks,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ticks {
    pub color: String,
}

impl ChartConfig {
    pub fn bar(data: ChartData, style: &ChartStyle) -> Self {
        let axis = || Axis {
            ticks: Ticks {
                color: style.tick_color.clone(),
            },
        };
        Self {
            kind: "bar".to_string(),
            data: ConfigData {
                labels: data.labels,
                datasets: vec![BarDataset {
                    label: style.dataset_label.clone(),
                    data: data.values,
                    background_color: style.bar_color.clone(),
                    border_radius: style.bar_border_radius,
                }],
            },
            options: ConfigOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                plugins: Plugins {
                    legend: Legend {
                        display: style.show_legend,
                    },
                    tooltip: Tooltip {
                        enabled: style.show_tooltips,
                    },
                },
                scales: Scales { x: axis(), y: axis() },
            },
        }
    }
}
