use serde::{Deserialize, Serialize};

use super::date_key::DateParts;

/// One day of sales
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Day key in "DD-MM-YYYY" format
    pub date: String,
    /// Revenue in VND
    pub revenue: u64,
    /// Number of orders
    pub orders: u32,
    /// Number of items sold
    pub sold: u32,
}

impl SalesRecord {
    pub fn new(date: impl Into<String>, revenue: u64, orders: u32, sold: u32) -> Self {
        Self {
            date: date.into(),
            revenue,
            orders,
            sold,
        }
    }

    pub fn date_parts(&self) -> DateParts<'_> {
        DateParts::parse(&self.date)
    }
}

/// Read-only set of records loaded once for the session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordStore {
    records: Vec<SalesRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    /// The built-in dataset shown by the dashboard
    pub fn sample() -> Self {
        Self::new(vec![
            SalesRecord::new("01-04-2025", 250_000, 10, 5),
            SalesRecord::new("02-04-2025", 230_000, 11, 6),
            SalesRecord::new("03-04-2025", 250_000, 12, 7),
            SalesRecord::new("04-04-2025", 280_000, 15, 8),
            SalesRecord::new("05-04-2025", 300_000, 18, 9),
            SalesRecord::new("15-03-2025", 150_000, 6, 3),
            SalesRecord::new("05-04-2024", 120_000, 5, 4),
        ])
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &SalesRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
