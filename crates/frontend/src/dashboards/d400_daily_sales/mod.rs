pub mod chart_adapter;
pub mod chart_js;
pub mod controller;
pub mod ui;
