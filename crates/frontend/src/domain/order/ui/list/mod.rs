mod state;

use contracts::domain::order::{parse_count, OrderEdit, OrderRecord, SampleType};
use contracts::projections::order_list::{self, ListScope, OrderListQuery, StatusFilter};
use leptos::prelude::*;
use state::{create_state, persist_state};
use thaw::*;

use crate::layout::global_context::{use_app_context, AppContext};
use crate::shared::components::{FlagToggle, InlineEdit, SearchInput, SortableHeaderCell};

const COLUMN_COUNT: u32 = 12;

/// Order table for one tab. The active and completed tabs are the same
/// component over a different scope; each keeps its own persisted
/// search, filter and sort state.
#[component]
pub fn OrderList(scope: ListScope) -> impl IntoView {
    let ctx = use_app_context();
    let query = create_state(scope);

    let rows = Signal::derive(move || {
        ctx.orders
            .with(|orders| query.with(|q| order_list::view(orders, scope, q)))
    });

    let current_sort_field = Signal::derive(move || query.with(|q| q.sort_field.clone()));
    let sort_ascending = Signal::derive(move || query.with(|q| q.sort_ascending));
    let search_text = Signal::derive(move || query.with(|q| q.q.clone()));

    let handle_sort = Callback::new(move |field: String| {
        query.update(|q| q.toggle_sort(&field));
        query.with_untracked(|q| persist_state(scope, q));
    });

    let handle_search = Callback::new(move |text: String| {
        query.update(|q| q.q = text);
        query.with_untracked(|q| persist_state(scope, q));
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h2 class="page__title">
                        {match scope {
                            ListScope::Active => "Active Orders",
                            ListScope::Completed => "Completed Orders",
                        }}
                    </h2>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        <span>{move || rows.get().len().to_string()}</span>
                    </Badge>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=search_text
                        on_change=handle_search
                        placeholder="Search SO, name or company…"
                    />
                </div>
            </div>

            {status_pills(ctx, scope, query)}

            <div class="page-content">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell
                                label="SO #"
                                sort_field="so"
                                current_sort_field=current_sort_field
                                sort_ascending=sort_ascending
                                on_sort=handle_sort
                            />
                            <SortableHeaderCell
                                label="Name"
                                sort_field="name"
                                current_sort_field=current_sort_field
                                sort_ascending=sort_ascending
                                on_sort=handle_sort
                            />
                            <SortableHeaderCell
                                label="Company"
                                sort_field="company"
                                current_sort_field=current_sort_field
                                sort_ascending=sort_ascending
                                on_sort=handle_sort
                            />
                            <SortableHeaderCell
                                label="PEP"
                                sort_field="peptide"
                                current_sort_field=current_sort_field
                                sort_ascending=sort_ascending
                                on_sort=handle_sort
                                align="right"
                            />
                            <SortableHeaderCell
                                label="END"
                                sort_field="endotoxin"
                                current_sort_field=current_sort_field
                                sort_ascending=sort_ascending
                                on_sort=handle_sort
                                align="right"
                            />
                            <SortableHeaderCell
                                label="STE"
                                sort_field="sterility"
                                current_sort_field=current_sort_field
                                sort_ascending=sort_ascending
                                on_sort=handle_sort
                                align="right"
                            />
                            <SortableHeaderCell
                                label="Created"
                                sort_field=order_list::SORT_CREATED_AT
                                current_sort_field=current_sort_field
                                sort_ascending=sort_ascending
                                on_sort=handle_sort
                            />
                            <TableHeaderCell>"Reports"</TableHeaderCell>
                            <TableHeaderCell>"Paid"</TableHeaderCell>
                            <TableHeaderCell>"Emailed"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        {move || {
                            let data = rows.get();
                            if data.is_empty() {
                                return vec![
                                    view! {
                                        <TableRow>
                                            <TableCell attr:colspan=COLUMN_COUNT.to_string()>
                                                <TableCellLayout>
                                                    <span class="text-muted">"No orders found"</span>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                        .into_any(),
                                ];
                            }
                            data.into_iter()
                                .map(|row| order_row(ctx, row))
                                .collect::<Vec<_>>()
                        }}
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}

/// Status filter pills with live counts. Only the active tab has them;
/// the completed tab is definitionally one status.
fn status_pills(
    ctx: AppContext,
    scope: ListScope,
    query: RwSignal<OrderListQuery>,
) -> impl IntoView {
    if scope != ListScope::Active {
        return ().into_any();
    }

    let counts = Signal::derive(move || ctx.orders.with(|o| order_list::status_counts(o)));

    view! {
        <div class="filter-pills">
            {StatusFilter::all()
                .into_iter()
                .map(|filter| {
                    let count = move || {
                        let c = counts.get();
                        match filter {
                            StatusFilter::All => c.all,
                            StatusFilter::Pending => c.pending,
                            StatusFilter::Reports => c.reports,
                        }
                    };
                    view! {
                        <button
                            class=move || {
                                if query.with(|q| q.status) == filter {
                                    "filter-pills__pill filter-pills__pill--active"
                                } else {
                                    "filter-pills__pill"
                                }
                            }
                            on:click=move |_| {
                                query.update(|q| q.status = filter);
                                query.with_untracked(|q| persist_state(scope, q));
                            }
                        >
                            {filter.label()}
                            " ("
                            {count}
                            ")"
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

fn order_row(ctx: AppContext, row: OrderRecord) -> AnyView {
    let id = row.id;
    let status = row.status();

    let count_cell = move |sample: SampleType, value: u32| {
        view! {
            <TableCell class="table__cell--right">
                <TableCellLayout>
                    <InlineEdit
                        value=value.to_string()
                        numeric=true
                        on_commit=Callback::new(move |v: String| {
                            ctx.edit_order(id, OrderEdit::Count(sample, parse_count(&v)));
                        })
                    />
                </TableCellLayout>
            </TableCell>
        }
    };

    let flag_cell = move |checked: bool, title: &'static str, make: fn(bool) -> OrderEdit| {
        view! {
            <TableCell>
                <TableCellLayout>
                    <FlagToggle
                        checked=checked
                        title=title
                        on_change=Callback::new(move |v| ctx.edit_order(id, make(v)))
                    />
                </TableCellLayout>
            </TableCell>
        }
    };

    let delete = move |_| {
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message("Delete this order?").unwrap_or(false))
            .unwrap_or(false);
        if confirmed {
            ctx.delete_order(id);
        }
    };

    let created_date: String = row.created_at.chars().take(10).collect();

    view! {
        <TableRow>
            <TableCell>
                <TableCellLayout>
                    <InlineEdit
                        value=row.so.clone()
                        on_commit=Callback::new(move |v| ctx.edit_order(id, OrderEdit::So(v)))
                    />
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>
                    <InlineEdit
                        value=row.name.clone()
                        on_commit=Callback::new(move |v| ctx.edit_order(id, OrderEdit::Name(v)))
                    />
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>
                    <InlineEdit
                        value=row.company.clone()
                        on_commit=Callback::new(move |v| ctx.edit_order(id, OrderEdit::Company(v)))
                    />
                </TableCellLayout>
            </TableCell>
            {count_cell(SampleType::Peptide, row.peptide)}
            {count_cell(SampleType::Endotoxin, row.endotoxin)}
            {count_cell(SampleType::Sterility, row.sterility)}
            <TableCell>
                <TableCellLayout>{created_date}</TableCellLayout>
            </TableCell>
            {flag_cell(row.reports_ready, "Reports ready", OrderEdit::ReportsReady)}
            {flag_cell(row.paid, "Paid", OrderEdit::Paid)}
            {flag_cell(row.emailed, "Emailed", OrderEdit::Emailed)}
            <TableCell>
                <TableCellLayout>
                    <span class=status.css_class()>{status.label()}</span>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <button class="table__row-delete" title="Delete order" on:click=delete>
                        "✕"
                    </button>
                </TableCellLayout>
            </TableCell>
        </TableRow>
    }
    .into_any()
}
