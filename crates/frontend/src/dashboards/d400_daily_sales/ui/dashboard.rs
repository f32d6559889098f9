use contracts::dashboards::d400_daily_sales::{
    RecordStore, SelectOption, SelectorKind, SelectorState, TableView,
};
use leptos::html::Canvas;
use leptos::prelude::*;
use thaw::*;

use super::sales_table::SalesTable;
use crate::config::DashboardConfig;
use crate::dashboards::d400_daily_sales::chart_js::ChartJsBackend;
use crate::dashboards::d400_daily_sales::controller::{
    DashboardCommand, DashboardController, DashboardUpdate,
};
use crate::shared::components::ui::Select;

/// Daily sales dashboard: day/month/year filters, sales table and revenue chart
#[component]
pub fn DailySalesDashboard() -> impl IntoView {
    let config = DashboardConfig::from_window();

    let initial = SelectorState::new(&config.placeholders);
    let day_options = RwSignal::new(initial.options(SelectorKind::Day).to_vec());
    let month_options = RwSignal::new(initial.options(SelectorKind::Month).to_vec());
    let year_options = RwSignal::new(initial.options(SelectorKind::Year).to_vec());

    let day = RwSignal::new(String::new());
    let month = RwSignal::new(String::new());
    let year = RwSignal::new(String::new());

    let table = RwSignal::new(TableView::default());
    let canvas_ref = NodeRef::<Canvas>::new();

    // Controller owns the Chart.js instance (a JsValue), so it is stored locally
    let controller = StoredValue::new_local(None::<DashboardController<ChartJsBackend>>);

    let options_signal = move |kind: SelectorKind| -> RwSignal<Vec<SelectOption>> {
        match kind {
            SelectorKind::Day => day_options,
            SelectorKind::Month => month_options,
            SelectorKind::Year => year_options,
        }
    };
    let value_signal = move |kind: SelectorKind| -> RwSignal<String> {
        match kind {
            SelectorKind::Day => day,
            SelectorKind::Month => month,
            SelectorKind::Year => year,
        }
    };

    let apply_update = move |update: DashboardUpdate| {
        for kind in update.populated {
            let options = controller.with_value(|ctrl| {
                ctrl.as_ref()
                    .map(|ctrl| ctrl.selectors().options(kind).to_vec())
                    .unwrap_or_default()
            });
            options_signal(kind).set(options);
        }
        if let Some(view) = update.table {
            table.set(view);
        }
    };

    let dispatch = move |command: DashboardCommand| {
        let mut update = None;
        controller.update_value(|ctrl| {
            if let Some(ctrl) = ctrl.as_mut() {
                update = Some(ctrl.dispatch(command));
            }
        });
        match update {
            Some(update) => apply_update(update),
            None => log::debug!("d400: event before dashboard start, kept in selector signals"),
        }
    };

    // Build the controller once the canvas is mounted and draw the initial state
    Effect::new(move |_| {
        let canvas = canvas_ref.get();
        if controller.with_value(|ctrl| ctrl.is_some()) {
            return;
        }
        if canvas.is_none() {
            log::warn!("d400: chart canvas is not mounted, chart disabled");
        }

        let mut ctrl =
            DashboardController::new(RecordStore::sample(), &config, ChartJsBackend::new(canvas));
        // Values picked before the controller existed are only in the signals
        for kind in SelectorKind::ALL {
            let value = value_signal(kind).get_untracked();
            if !value.is_empty() {
                ctrl.dispatch(DashboardCommand::SelectorChanged(kind, value));
            }
        }
        let update = ctrl.dispatch(DashboardCommand::Start);
        controller.set_value(Some(ctrl));
        apply_update(update);
    });

    let on_focus = move |kind: SelectorKind| {
        Callback::new(move |_: ()| dispatch(DashboardCommand::SelectorFocused(kind)))
    };
    let on_click = move |kind: SelectorKind| {
        Callback::new(move |_: ()| dispatch(DashboardCommand::SelectorClicked(kind)))
    };
    let on_change = move |kind: SelectorKind| {
        Callback::new(move |value: String| {
            value_signal(kind).set(value.clone());
            dispatch(DashboardCommand::SelectorChanged(kind, value));
        })
    };

    view! {
        <div id="d400_daily_sales--dashboard" class="d400-dashboard">
            <div class="d400-filters" style="display: flex; align-items: flex-end; gap: 8px; margin-bottom: 12px;">
                <Select
                    id=SelectorKind::Day.element_id()
                    value=day
                    options=day_options
                    on_change=on_change(SelectorKind::Day)
                    on_focus=on_focus(SelectorKind::Day)
                    on_click=on_click(SelectorKind::Day)
                />
                <Select
                    id=SelectorKind::Month.element_id()
                    value=month
                    options=month_options
                    on_change=on_change(SelectorKind::Month)
                    on_focus=on_focus(SelectorKind::Month)
                    on_click=on_click(SelectorKind::Month)
                />
                <Select
                    id=SelectorKind::Year.element_id()
                    value=year
                    options=year_options
                    on_change=on_change(SelectorKind::Year)
                    on_focus=on_focus(SelectorKind::Year)
                    on_click=on_click(SelectorKind::Year)
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    attr:id="btnThongKe"
                    on_click=move |_| dispatch(DashboardCommand::ApplyFilter)
                >
                    "Thống kê"
                </Button>
            </div>

            <SalesTable table=table />

            <div class="d400-chart" style="position: relative; height: 320px; margin-top: 16px;">
                <canvas id="statChart" node_ref=canvas_ref></canvas>
            </div>
        </div>
    }
}
