use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;
use thaw::*;

/// Sortable table header cell with a direction indicator.
#[component]
pub fn SortableHeaderCell(
    /// Header text.
    #[prop(into)]
    label: String,
    /// Column this header sorts by.
    #[prop(into)]
    sort_field: String,
    /// Currently sorted column from list state.
    #[prop(into)]
    current_sort_field: Signal<String>,
    /// Sort direction from list state.
    #[prop(into)]
    sort_ascending: Signal<bool>,
    /// Called with the column name on click.
    on_sort: Callback<String>,
    /// Header alignment (left/right).
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let sort_field_for_click = sort_field.clone();
    let sort_field_for_indicator = sort_field.clone();
    let sort_field_for_class = sort_field;

    let handle_click = move |_| {
        on_sort.run(sort_field_for_click.clone());
    };

    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end;"
    } else {
        "cursor: pointer;"
    };

    view! {
        <TableHeaderCell>
            <div class="table__sortable-header" style=header_style on:click=handle_click>
                {label}
                <span class=move || {
                    get_sort_class(&current_sort_field.get(), &sort_field_for_class)
                }>
                    {move || {
                        get_sort_indicator(
                            &current_sort_field.get(),
                            &sort_field_for_indicator,
                            sort_ascending.get(),
                        )
                    }}
                </span>
            </div>
        </TableHeaderCell>
    }
}
