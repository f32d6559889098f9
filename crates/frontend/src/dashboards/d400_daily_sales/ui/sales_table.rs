use contracts::dashboards::d400_daily_sales::{TableRow as RowModel, TableView};
use leptos::prelude::*;
use thaw::*;

/// Sales table body. The whole body is rebuilt whenever `table` changes.
#[component]
pub fn SalesTable(#[prop(into)] table: Signal<TableView>) -> impl IntoView {
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell min_width=120.0>"Ngày"</TableHeaderCell>
                    <TableHeaderCell min_width=140.0>"Doanh thu"</TableHeaderCell>
                    <TableHeaderCell min_width=100.0>"Đơn hàng"</TableHeaderCell>
                    <TableHeaderCell min_width=100.0>"Đã bán"</TableHeaderCell>
                </TableRow>
            </TableHeader>

            <TableBody attr:id="data-body">
                {move || {
                    table
                        .get()
                        .rows
                        .into_iter()
                        .map(|row| match row {
                            RowModel::Placeholder { colspan, message } => view! {
                                <TableRow>
                                    <TableCell attr:colspan=colspan.to_string()>
                                        <TableCellLayout>
                                            <span class="text-muted" style="padding: 12px; color: #ccc;">
                                                {message}
                                            </span>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any(),
                            RowModel::Data { cells: [date, revenue, orders, sold] } => view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{date}</TableCellLayout></TableCell>
                                    <TableCell class="table__cell--right"><TableCellLayout>{revenue}</TableCellLayout></TableCell>
                                    <TableCell class="table__cell--right"><TableCellLayout>{orders}</TableCellLayout></TableCell>
                                    <TableCell class="table__cell--right"><TableCellLayout>{sold}</TableCellLayout></TableCell>
                                </TableRow>
                            }
                            .into_any(),
                        })
                        .collect::<Vec<_>>()
                }}
            </TableBody>
        </Table>
    }
}
