use contracts::dashboards::d400_daily_sales::{ChartConfig, ChartData};
use js_sys::{Array, Function, Object, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;

use super::chart_adapter::{ChartBackend, ChartError};

/// Global constructor exposed by the Chart.js script
const CHART_GLOBAL: &str = "Chart";

impl From<JsValue> for ChartError {
    fn from(value: JsValue) -> Self {
        ChartError::Js(format!("{:?}", value))
    }
}

/// `ChartBackend` over the Chart.js global loaded by the page
pub struct ChartJsBackend {
    canvas: Option<HtmlCanvasElement>,
}

impl ChartJsBackend {
    pub fn new(canvas: Option<HtmlCanvasElement>) -> Self {
        Self { canvas }
    }

    fn constructor() -> Result<Function, ChartError> {
        let window = web_sys::window().ok_or(ChartError::LibraryMissing)?;
        let value = Reflect::get(&window, &JsValue::from_str(CHART_GLOBAL))?;
        if !value.is_function() {
            return Err(ChartError::LibraryMissing);
        }
        Ok(value.unchecked_into())
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, ChartError> {
    // json_compatible keeps u64 revenue as a plain JS number
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|err| ChartError::Serialize(err.to_string()))
}

impl ChartBackend for ChartJsBackend {
    type Handle = Object;

    fn has_surface(&self) -> bool {
        self.canvas.is_some()
    }

    fn create(&mut self, config: &ChartConfig) -> Result<Object, ChartError> {
        let canvas = self.canvas.as_ref().ok_or(ChartError::NoContext)?;
        let context = canvas.get_context("2d")?.ok_or(ChartError::NoContext)?;
        let constructor = Self::constructor()?;

        let args = Array::of2(&context, &to_js(config)?);
        let chart = Reflect::construct(&constructor, &args)?;
        Ok(chart.unchecked_into())
    }

    fn update(&mut self, chart: &Object, data: &ChartData) -> Result<(), ChartError> {
        let chart_data = Reflect::get(chart, &JsValue::from_str("data"))?;
        Reflect::set(&chart_data, &JsValue::from_str("labels"), &to_js(&data.labels)?)?;

        let datasets = Reflect::get(&chart_data, &JsValue::from_str("datasets"))?;
        let dataset = Array::from(&datasets).get(0);
        if dataset.is_undefined() {
            return Err(ChartError::Js("chart has no dataset".to_string()));
        }
        Reflect::set(&dataset, &JsValue::from_str("data"), &to_js(&data.values)?)?;

        let update: Function = Reflect::get(chart, &JsValue::from_str("update"))?.dyn_into()?;
        update.call0(chart)?;
        Ok(())
    }
}
