//! Option lists for the day/month/year selectors.
//!
//! Each list starts with a placeholder whose value is empty ("any") and is
//! filled at most once, the first time the user interacts with it. Filling a
//! list never changes the chosen value.

use serde::{Deserialize, Serialize};

use super::date_key::parse_year;
use super::record::RecordStore;
use super::selection::Selection;

/// Upper bound on generated year options
pub const MAX_YEAR_OPTIONS: i64 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectorKind {
    Day,
    Month,
    Year,
}

impl SelectorKind {
    pub const ALL: [SelectorKind; 3] = [SelectorKind::Day, SelectorKind::Month, SelectorKind::Year];

    /// Element id of the selector in the page
    pub fn element_id(&self) -> &'static str {
        match self {
            SelectorKind::Day => "date",
            SelectorKind::Month => "month",
            SelectorKind::Year => "year",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    pub fn placeholder(label: impl Into<String>) -> Self {
        Self::new("", label)
    }

    /// Zero-padded value, unpadded label ("05" / "5")
    fn padded(n: u32) -> Self {
        Self::new(format!("{:02}", n), n.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOptions {
    options: Vec<SelectOption>,
    filled: bool,
}

impl SelectorOptions {
    pub fn new(placeholder_label: impl Into<String>) -> Self {
        Self {
            options: vec![SelectOption::placeholder(placeholder_label)],
            filled: false,
        }
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }

    /// Forces the first option's value to empty so "no selection" is representable
    pub fn normalize_placeholder(&mut self) {
        if let Some(first) = self.options.first_mut() {
            first.value.clear();
        }
    }

    /// Appends generated options once. Returns `true` if this call filled the list.
    fn fill_with<F>(&mut self, generate: F) -> bool
    where
        F: FnOnce() -> Vec<SelectOption>,
    {
        if self.filled {
            return false;
        }
        self.options.extend(generate());
        self.filled = true;
        true
    }
}

/// Placeholder labels shown before any option is chosen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorPlaceholders {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl Default for SelectorPlaceholders {
    fn default() -> Self {
        Self {
            day: "Ngày".to_string(),
            month: "Tháng".to_string(),
            year: "Năm".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorState {
    day: SelectorOptions,
    month: SelectorOptions,
    year: SelectorOptions,
    selection: Selection,
}

impl Default for SelectorState {
    fn default() -> Self {
        Self::new(&SelectorPlaceholders::default())
    }
}

impl SelectorState {
    pub fn new(placeholders: &SelectorPlaceholders) -> Self {
        Self {
            day: SelectorOptions::new(placeholders.day.clone()),
            month: SelectorOptions::new(placeholders.month.clone()),
            year: SelectorOptions::new(placeholders.year.clone()),
            selection: Selection::default(),
        }
    }

    pub fn list(&self, kind: SelectorKind) -> &SelectorOptions {
        match kind {
            SelectorKind::Day => &self.day,
            SelectorKind::Month => &self.month,
            SelectorKind::Year => &self.year,
        }
    }

    fn list_mut(&mut self, kind: SelectorKind) -> &mut SelectorOptions {
        match kind {
            SelectorKind::Day => &mut self.day,
            SelectorKind::Month => &mut self.month,
            SelectorKind::Year => &mut self.year,
        }
    }

    pub fn options(&self, kind: SelectorKind) -> &[SelectOption] {
        self.list(kind).options()
    }

    pub fn normalize_placeholders(&mut self) {
        for kind in SelectorKind::ALL {
            self.list_mut(kind).normalize_placeholder();
        }
    }

    pub fn populate_days(&mut self) -> bool {
        self.day.fill_with(|| (1..=31).map(SelectOption::padded).collect())
    }

    pub fn populate_months(&mut self) -> bool {
        self.month.fill_with(|| (1..=12).map(SelectOption::padded).collect())
    }

    /// One option per year from one before the earliest record to one after
    /// the latest. Keys without a numeric year are skipped. An empty store, a
    /// range at the edge of `i32` or one wider than `MAX_YEAR_OPTIONS`
    /// produces no year options.
    pub fn populate_years(&mut self, store: &RecordStore) -> bool {
        self.year.fill_with(|| {
            let years = store.iter().filter_map(|record| parse_year(&record.date).ok());
            let Some((min, max)) = years.fold(None, |acc, year| match acc {
                None => Some((year, year)),
                Some((min, max)) => Some((i32::min(min, year), i32::max(max, year))),
            }) else {
                return Vec::new();
            };
            let (Some(first), Some(last)) = (min.checked_sub(1), max.checked_add(1)) else {
                return Vec::new();
            };
            if i64::from(last) - i64::from(first) >= MAX_YEAR_OPTIONS {
                return Vec::new();
            }
            (first..=last)
                .map(|year| SelectOption::new(year.to_string(), year.to_string()))
                .collect()
        })
    }

    pub fn populate(&mut self, kind: SelectorKind, store: &RecordStore) -> bool {
        match kind {
            SelectorKind::Day => self.populate_days(),
            SelectorKind::Month => self.populate_months(),
            SelectorKind::Year => self.populate_years(store),
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn select(&mut self, kind: SelectorKind, value: impl Into<String>) {
        self.selection.set(kind, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_daily_sales::record::SalesRecord;

    fn values(state: &SelectorState, kind: SelectorKind) -> Vec<String> {
        state
            .options(kind)
            .iter()
            .skip(1)
            .map(|o| o.value.clone())
            .collect()
    }

    #[test]
    fn test_placeholder_is_empty_value() {
        let state = SelectorState::default();
        for kind in SelectorKind::ALL {
            let options = state.options(kind);
            assert_eq!(options.len(), 1);
            assert_eq!(options[0].value, "");
        }
        assert_eq!(state.options(SelectorKind::Year)[0].label, "Năm");
    }

    #[test]
    fn test_populate_days() {
        let mut state = SelectorState::default();
        assert!(state.populate_days());
        let options = state.options(SelectorKind::Day);
        assert_eq!(options.len(), 32);
        assert_eq!(options[1], SelectOption::new("01", "1"));
        assert_eq!(options[31], SelectOption::new("31", "31"));
    }

    #[test]
    fn test_populate_months() {
        let mut state = SelectorState::default();
        assert!(state.populate_months());
        let options = state.options(SelectorKind::Month);
        assert_eq!(options.len(), 13);
        assert_eq!(options[4], SelectOption::new("04", "4"));
        assert_eq!(options[12], SelectOption::new("12", "12"));
    }

    #[test]
    fn test_population_is_idempotent() {
        let store = RecordStore::sample();
        let mut once = SelectorState::default();
        for kind in SelectorKind::ALL {
            once.populate(kind, &store);
        }

        let mut twice = once.clone();
        for kind in SelectorKind::ALL {
            assert!(!twice.populate(kind, &store));
        }
        assert_eq!(once, twice);
    }

    #[test]
    fn test_year_range_pads_by_one() {
        let store = RecordStore::sample();
        let mut state = SelectorState::default();
        assert!(state.populate_years(&store));
        assert_eq!(
            values(&state, SelectorKind::Year),
            vec!["2023", "2024", "2025", "2026"]
        );
        assert_eq!(state.options(SelectorKind::Year)[1].label, "2023");
    }

    #[test]
    fn test_year_range_of_empty_store() {
        let mut state = SelectorState::default();
        assert!(state.populate_years(&RecordStore::default()));
        assert!(state.list(SelectorKind::Year).is_filled());
        assert_eq!(state.options(SelectorKind::Year).len(), 1);
    }

    #[test]
    fn test_year_range_skips_malformed_keys() {
        let store = RecordStore::new(vec![
            SalesRecord::new("01-01-2020", 1, 1, 1),
            SalesRecord::new("broken", 1, 1, 1),
            SalesRecord::new("01-01-20xx", 1, 1, 1),
        ]);
        let mut state = SelectorState::default();
        state.populate_years(&store);
        assert_eq!(
            values(&state, SelectorKind::Year),
            vec!["2019", "2020", "2021"]
        );
    }

    #[test]
    fn test_year_range_at_integer_limits_is_empty() {
        for key in ["01-01-2147483647", "01-01--2147483648"] {
            let store = RecordStore::new(vec![SalesRecord::new(key, 1, 1, 1)]);
            let mut state = SelectorState::default();
            assert!(state.populate_years(&store));
            assert_eq!(state.options(SelectorKind::Year).len(), 1);
        }
    }

    #[test]
    fn test_year_range_too_wide_is_empty() {
        let store = RecordStore::new(vec![
            SalesRecord::new("01-01-1", 1, 1, 1),
            SalesRecord::new("01-01-2000000000", 1, 1, 1),
        ]);
        let mut state = SelectorState::default();
        state.populate_years(&store);
        assert_eq!(state.options(SelectorKind::Year).len(), 1);

        let store = RecordStore::new(vec![
            SalesRecord::new("01-01-1900", 1, 1, 1),
            SalesRecord::new("01-01-2097", 1, 1, 1),
        ]);
        let mut state = SelectorState::default();
        state.populate_years(&store);
        assert_eq!(state.options(SelectorKind::Year).len(), 1 + 200);
    }

    #[test]
    fn test_population_keeps_selection() {
        let mut state = SelectorState::default();
        state.select(SelectorKind::Day, "05");
        state.populate_days();
        state.populate_months();
        assert_eq!(state.selection().day, "05");
        assert_eq!(state.selection().month, "");
    }

    #[test]
    fn test_normalize_placeholders() {
        let mut state = SelectorState::default();
        state.day.options[0].value = "Ngày".to_string();
        state.normalize_placeholders();
        assert_eq!(state.options(SelectorKind::Day)[0].value, "");
    }
}
