use serde::{Deserialize, Serialize};

use super::date_key::DateParts;
use super::record::SalesRecord;
use super::selector::SelectorKind;

/// Values chosen in the day/month/year selectors.
///
/// An empty field means "any". Day and month are compared against the
/// zero-padded parts of the date key, so callers pass "05", not "5".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl Selection {
    pub fn new(day: impl Into<String>, month: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            month: month.into(),
            year: year.into(),
        }
    }

    pub fn set(&mut self, kind: SelectorKind, value: impl Into<String>) {
        let value = value.into();
        match kind {
            SelectorKind::Day => self.day = value,
            SelectorKind::Month => self.month = value,
            SelectorKind::Year => self.year = value,
        }
    }

    pub fn matches(&self, parts: &DateParts<'_>) -> bool {
        field_matches(&self.day, parts.day)
            && field_matches(&self.month, parts.month)
            && field_matches(&self.year, parts.year)
    }
}

fn field_matches(wanted: &str, actual: Option<&str>) -> bool {
    wanted.is_empty() || actual == Some(wanted)
}

/// Records matching every non-empty field of `selection`, in input order
pub fn filter_records(records: &[SalesRecord], selection: &Selection) -> Vec<SalesRecord> {
    records
        .iter()
        .filter(|record| selection.matches(&record.date_parts()))
        .cloned()
        .collect()
}
