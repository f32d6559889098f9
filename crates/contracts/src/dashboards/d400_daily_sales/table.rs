use serde::{Deserialize, Serialize};

use super::record::SalesRecord;
use crate::shared::number_format::{format_money_with_suffix, NumberLocale};

/// Date, revenue, orders, sold
pub const TABLE_COLUMNS: usize = 4;

pub const DEFAULT_NO_DATA_MESSAGE: &str = "Không có dữ liệu";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableRow {
    /// Informational row spanning the whole table
    Placeholder { colspan: usize, message: String },
    Data { cells: [String; TABLE_COLUMNS] },
}

/// Complete table body. Each render replaces the previous one wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    pub rows: Vec<TableRow>,
}

impl TableView {
    pub fn data_rows(&self) -> impl Iterator<Item = &[String; TABLE_COLUMNS]> {
        self.rows.iter().filter_map(|row| match row {
            TableRow::Data { cells } => Some(cells),
            TableRow::Placeholder { .. } => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRenderer {
    locale: NumberLocale,
    no_data_message: String,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new(NumberLocale::vi_vn(), DEFAULT_NO_DATA_MESSAGE)
    }
}

impl TableRenderer {
    pub fn new(locale: NumberLocale, no_data_message: impl Into<String>) -> Self {
        Self {
            locale,
            no_data_message: no_data_message.into(),
        }
    }

    pub fn render(&self, records: &[SalesRecord]) -> TableView {
        if records.is_empty() {
            return TableView {
                rows: vec![TableRow::Placeholder {
                    colspan: TABLE_COLUMNS,
                    message: self.no_data_message.clone(),
                }],
            };
        }

        TableView {
            rows: records.iter().map(|record| self.row(record)).collect(),
        }
    }

    fn row(&self, record: &SalesRecord) -> TableRow {
        TableRow::Data {
            cells: [
                record.date.clone(),
                format_money_with_suffix(record.revenue, &self.locale),
                record.orders.to_string(),
                record.sold.to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_daily_sales::record::RecordStore;

    #[test]
    fn test_empty_renders_single_placeholder() {
        let view = TableRenderer::default().render(&[]);
        assert_eq!(
            view.rows,
            vec![TableRow::Placeholder {
                colspan: 4,
                message: "Không có dữ liệu".to_string()
            }]
        );
        assert_eq!(view.data_rows().count(), 0);
    }

    #[test]
    fn test_row_cells() {
        let records = vec![SalesRecord::new("01-04-2025", 250_000, 10, 5)];
        let view = TableRenderer::default().render(&records);
        assert!(matches!(view.rows.as_slice(), [TableRow::Data { .. }]));
        let rows: Vec<_> = view.data_rows().collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], "01-04-2025");
        assert_eq!(rows[0][1], "250.000 ₫");
        assert_eq!(rows[0][2], "10");
        assert_eq!(rows[0][3], "5");
    }

    #[test]
    fn test_one_row_per_record_in_order() {
        let store = RecordStore::sample();
        let view = TableRenderer::default().render(store.records());
        let dates: Vec<&str> = view.data_rows().map(|cells| cells[0].as_str()).collect();
        let expected: Vec<&str> = store.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, expected);
    }

    #[test]
    fn test_custom_message() {
        let renderer = TableRenderer::new(NumberLocale::vi_vn(), "No data");
        match &renderer.render(&[]).rows[0] {
            TableRow::Placeholder { message, .. } => assert_eq!(message, "No data"),
            other => panic!("unexpected row {:?}", other),
        }
    }
}
