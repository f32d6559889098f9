use contracts::dashboards::d400_daily_sales::{
    filter_records, RecordStore, SalesRecord, SelectorKind, SelectorState, TableRenderer,
    TableView,
};

use super::chart_adapter::{ChartAdapter, ChartBackend};
use crate::config::DashboardConfig;

/// User interactions, dispatched synchronously from the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardCommand {
    /// First render after mount
    Start,
    SelectorFocused(SelectorKind),
    /// Some browsers open a select without focusing it first
    SelectorClicked(SelectorKind),
    SelectorChanged(SelectorKind, String),
    ApplyFilter,
}

/// What the UI has to refresh after a command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardUpdate {
    pub table: Option<TableView>,
    /// Selectors whose option lists were filled by this command
    pub populated: Vec<SelectorKind>,
}

pub struct DashboardController<B: ChartBackend> {
    store: RecordStore,
    selectors: SelectorState,
    table: TableRenderer,
    chart: ChartAdapter<B>,
    started: bool,
}

impl<B: ChartBackend> DashboardController<B> {
    pub fn new(store: RecordStore, config: &DashboardConfig, backend: B) -> Self {
        Self {
            store,
            selectors: SelectorState::new(&config.placeholders),
            table: TableRenderer::new(config.locale.clone(), config.no_data_message.clone()),
            chart: ChartAdapter::new(backend, config.chart.clone()),
            started: false,
        }
    }

    pub fn selectors(&self) -> &SelectorState {
        &self.selectors
    }

    pub fn chart(&self) -> &ChartAdapter<B> {
        &self.chart
    }

    pub fn dispatch(&mut self, command: DashboardCommand) -> DashboardUpdate {
        match command {
            DashboardCommand::Start => self.start(),
            DashboardCommand::SelectorFocused(kind) | DashboardCommand::SelectorClicked(kind) => {
                self.populate(kind)
            }
            DashboardCommand::SelectorChanged(kind, value) => {
                self.selectors.select(kind, value);
                DashboardUpdate::default()
            }
            DashboardCommand::ApplyFilter => self.apply_filter(),
        }
    }

    fn start(&mut self) -> DashboardUpdate {
        if self.started {
            log::debug!("d400: dashboard already started");
            return DashboardUpdate::default();
        }
        self.started = true;

        self.selectors.normalize_placeholders();
        let mut update = self.populate(SelectorKind::Year);
        update.table = Some(self.table.render(self.store.records()));
        Self::draw_chart(&mut self.chart, self.store.records());
        update
    }

    fn populate(&mut self, kind: SelectorKind) -> DashboardUpdate {
        let mut update = DashboardUpdate::default();
        if self.selectors.populate(kind, &self.store) {
            log::debug!(
                "d400: filled {:?} selector with {} options",
                kind,
                self.selectors.options(kind).len() - 1
            );
            update.populated.push(kind);
        }
        update
    }

    fn apply_filter(&mut self) -> DashboardUpdate {
        let selection = self.selectors.selection();
        let filtered = filter_records(self.store.records(), selection);
        log::info!(
            "d400: {:?} matched {} of {} records",
            selection,
            filtered.len(),
            self.store.len()
        );

        let table = self.table.render(&filtered);
        // Keep the chart populated while the table shows the empty state
        let chart_records = if filtered.is_empty() {
            self.store.records()
        } else {
            filtered.as_slice()
        };
        Self::draw_chart(&mut self.chart, chart_records);

        DashboardUpdate {
            table: Some(table),
            populated: Vec::new(),
        }
    }

    fn draw_chart(chart: &mut ChartAdapter<B>, records: &[SalesRecord]) {
        if let Err(err) = chart.draw(records) {
            log::error!("d400: failed to draw revenue chart: {}", err);
        }
    }
}
