pub mod d400_daily_sales;

pub use d400_daily_sales::ui::DailySalesDashboard;
