//! Row selection checkbox.

use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

/// Checkbox cell bound to one row id.
///
/// Stops click propagation so the row itself does not react.
#[component]
pub fn TableCellCheckbox(
    /// Book id of the row
    item_id: u32,

    /// Selected ids of the table
    #[prop(into)]
    selected: Signal<HashSet<u32>>,

    /// Callback on change (item_id, checked)
    on_change: Callback<(u32, bool)>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                aria-label=format!("Select book {}", item_id)
                prop:checked=move || selected.get().contains(&item_id)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run((item_id, checked));
                }
            />
        </TableCell>
    }
}
