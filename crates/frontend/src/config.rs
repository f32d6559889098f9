//! Dashboard configuration.
//!
//! Defaults match the Vietnamese dashboard. A page may override any field by
//! defining `window.DASHBOARD_CONFIG` before the wasm module starts, e.g.
//! `{ "no_data_message": "No data", "chart": { "dataset_label": "Doanh thu" } }`.

use contracts::dashboards::d400_daily_sales::{
    ChartStyle, SelectorPlaceholders, DEFAULT_NO_DATA_MESSAGE,
};
use contracts::shared::number_format::NumberLocale;
use js_sys::Reflect;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

pub const CONFIG_GLOBAL: &str = "DASHBOARD_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub locale: NumberLocale,
    pub no_data_message: String,
    pub placeholders: SelectorPlaceholders,
    pub chart: ChartStyle,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            locale: NumberLocale::vi_vn(),
            no_data_message: DEFAULT_NO_DATA_MESSAGE.to_string(),
            placeholders: SelectorPlaceholders::default(),
            chart: ChartStyle::default(),
        }
    }
}

impl DashboardConfig {
    /// Reads the page override, falling back to defaults
    pub fn from_window() -> Self {
        match Self::read_global() {
            Ok(Some(config)) => {
                log::debug!("Using {} from page", CONFIG_GLOBAL);
                config
            }
            Ok(None) => Self::default(),
            Err(err) => {
                log::warn!("Ignoring invalid {}: {}", CONFIG_GLOBAL, err);
                Self::default()
            }
        }
    }

    fn read_global() -> Result<Option<Self>, String> {
        let Some(window) = web_sys::window() else {
            return Ok(None);
        };
        let value = Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .map_err(|e| format!("{e:?}"))?;
        if value.is_undefined() || value.is_null() {
            return Ok(None);
        }
        serde_wasm_bindgen::from_value(value)
            .map(Some)
            .map_err(|e| e.to_string())
    }
}
