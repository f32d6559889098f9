mod dashboard;
mod sales_table;

pub use dashboard::DailySalesDashboard;
pub use sales_table::SalesTable;
