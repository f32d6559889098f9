//! Daily sales dashboard: records, date keys, selectors, filtering and the
//! table/chart view models derived from them.

pub mod chart;
pub mod date_key;
pub mod record;
pub mod selection;
pub mod selector;
pub mod table;

pub use chart::{ChartConfig, ChartData, ChartStyle};
pub use date_key::{DateKeyError, DateParts};
pub use record::{RecordStore, SalesRecord};
pub use selection::{filter_records, Selection};
pub use selector::{
    SelectOption, SelectorKind, SelectorOptions, SelectorPlaceholders, SelectorState,
};
pub use table::{TableRenderer, TableRow, TableView, DEFAULT_NO_DATA_MESSAGE, TABLE_COLUMNS};
