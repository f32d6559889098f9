use contracts::dashboards::d400_daily_sales::{ChartConfig, ChartData, ChartStyle, SalesRecord};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Chart.js is not loaded (window.Chart is missing)")]
    LibraryMissing,

    #[error("2d context of the chart canvas is unavailable")]
    NoContext,

    #[error("Chart.js call failed: {0}")]
    Js(String),

    #[error("failed to serialize chart data: {0}")]
    Serialize(String),
}

/// Charting library seen by the dashboard: build once from a full config,
/// then replace labels/values in place and redraw.
pub trait ChartBackend {
    type Handle;

    /// Whether a drawing surface exists in the page
    fn has_surface(&self) -> bool;

    fn create(&mut self, config: &ChartConfig) -> Result<Self::Handle, ChartError>;

    fn update(&mut self, handle: &Self::Handle, data: &ChartData) -> Result<(), ChartError>;
}

/// Owns the single chart instance of the canvas
pub struct ChartAdapter<B: ChartBackend> {
    backend: B,
    style: ChartStyle,
    instance: Option<B::Handle>,
}

impl<B: ChartBackend> ChartAdapter<B> {
    pub fn new(backend: B, style: ChartStyle) -> Self {
        Self {
            backend,
            style,
            instance: None,
        }
    }

    pub fn has_instance(&self) -> bool {
        self.instance.is_some()
    }

    /// Draws revenue per record. Without a surface this does nothing.
    pub fn draw(&mut self, records: &[SalesRecord]) -> Result<(), ChartError> {
        if !self.backend.has_surface() {
            return Ok(());
        }

        let data = ChartData::from_records(records);
        if let Some(handle) = self.instance.as_ref() {
            return self.backend.update(handle, &data);
        }

        let config = ChartConfig::bar(data, &self.style);
        self.instance = Some(self.backend.create(&config)?);
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Create(ChartConfig),
        Update { instance: u32, data: ChartData },
    }

    /// Backend that records every call instead of drawing
    pub struct RecordingBackend {
        pub surface: bool,
        pub fail_create: bool,
        pub calls: Rc<RefCell<Vec<Call>>>,
        created: u32,
    }

    impl RecordingBackend {
        pub fn new(surface: bool) -> (Self, Rc<RefCell<Vec<Call>>>) {
            let calls = Rc::new(RefCell::new(Vec::new()));
            let backend = Self {
                surface,
                fail_create: false,
                calls: Rc::clone(&calls),
                created: 0,
            };
            (backend, calls)
        }
    }

    impl ChartBackend for RecordingBackend {
        type Handle = u32;

        fn has_surface(&self) -> bool {
            self.surface
        }

        fn create(&mut self, config: &ChartConfig) -> Result<u32, ChartError> {
            if self.fail_create {
                return Err(ChartError::LibraryMissing);
            }
            self.created += 1;
            self.calls.borrow_mut().push(Call::Create(config.clone()));
            Ok(self.created)
        }

        fn update(&mut self, handle: &u32, data: &ChartData) -> Result<(), ChartError> {
            self.calls.borrow_mut().push(Call::Update {
                instance: *handle,
                data: data.clone(),
            });
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{Call, RecordingBackend};
    use super::*;
    use contracts::dashboards::d400_daily_sales::RecordStore;

    #[test]
    fn test_first_draw_creates_then_updates_in_place() {
        let (backend, calls) = RecordingBackend::new(true);
        let mut adapter = ChartAdapter::new(backend, ChartStyle::default());
        let store = RecordStore::sample();

        adapter.draw(store.records()).unwrap();
        adapter.draw(&store.records()[4..5]).unwrap();
        adapter.draw(store.records()).unwrap();

        let calls = calls.borrow();
        assert_eq!(calls.len(), 3);
        match &calls[0] {
            Call::Create(config) => {
                assert_eq!(config.kind, "bar");
                assert_eq!(config.data.labels.len(), 7);
                assert_eq!(config.data.datasets.len(), 1);
                assert_eq!(config.data.datasets[0].label, "Revenue");
            }
            other => panic!("expected create, got {:?}", other),
        }
        assert_eq!(
            calls[1],
            Call::Update {
                instance: 1,
                data: ChartData {
                    labels: vec!["05-04-2025".to_string()],
                    values: vec![300_000],
                },
            }
        );
        assert!(matches!(calls[2], Call::Update { instance: 1, .. }));
    }

    #[test]
    fn test_no_surface_is_noop() {
        let (backend, calls) = RecordingBackend::new(false);
        let mut adapter = ChartAdapter::new(backend, ChartStyle::default());

        adapter.draw(RecordStore::sample().records()).unwrap();
        assert!(!adapter.has_instance());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_failed_create_retries_on_next_draw() {
        let (mut backend, calls) = RecordingBackend::new(true);
        backend.fail_create = true;
        let mut adapter = ChartAdapter::new(backend, ChartStyle::default());

        let err = adapter.draw(RecordStore::sample().records()).unwrap_err();
        assert!(matches!(err, ChartError::LibraryMissing));
        assert!(!adapter.has_instance());

        adapter.backend.fail_create = false;
        adapter.draw(RecordStore::sample().records()).unwrap();
        assert!(adapter.has_instance());
        assert_eq!(calls.borrow().len(), 1);
    }
}
