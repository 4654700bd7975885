//! Select-all checkbox for a table header.

use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

impl CheckboxState {
    /// Checked when every id is selected, indeterminate when only some are.
    pub fn for_selection(ids: &[u32], selected: &HashSet<u32>) -> Self {
        if ids.is_empty() {
            return CheckboxState::Unchecked;
        }
        let selected_count = ids.iter().filter(|id| selected.contains(id)).count();
        if selected_count == 0 {
            CheckboxState::Unchecked
        } else if selected_count == ids.len() {
            CheckboxState::Checked
        } else {
            CheckboxState::Indeterminate
        }
    }
}

/// Header checkbox with three states; clicking selects or clears all rows.
#[component]
pub fn TableHeaderCheckbox(
    /// Ids of every row in the table
    #[prop(into)]
    ids: Signal<Vec<u32>>,

    /// Selected ids
    #[prop(into)]
    selected: Signal<HashSet<u32>>,

    /// true = select all, false = clear all
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_state =
        Signal::derive(move || selected.with(|sel| ids.with(|ids| CheckboxState::for_selection(ids, sel))));

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate is a DOM property only
    Effect::new(move |_| {
        let state = checkbox_state.get();
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(state == CheckboxState::Indeterminate);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                aria-label="Select all books"
                prop:checked=move || checkbox_state.get() == CheckboxState::Checked
                on:change=move |ev| {
                    on_change.run(event_target_checked(&ev));
                }
            />
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_for_selection() {
        let ids = vec![1, 2, 3];
        let mut selected = HashSet::new();
        assert_eq!(CheckboxState::for_selection(&ids, &selected), CheckboxState::Unchecked);
        selected.insert(2);
        assert_eq!(CheckboxState::for_selection(&ids, &selected), CheckboxState::Indeterminate);
        selected.extend([1, 3]);
        assert_eq!(CheckboxState::for_selection(&ids, &selected), CheckboxState::Checked);
    }

    #[test]
    fn test_empty_table_is_unchecked() {
        let selected: HashSet<u32> = [1].into_iter().collect();
        assert_eq!(CheckboxState::for_selection(&[], &selected), CheckboxState::Unchecked);
    }

    #[test]
    fn test_ids_outside_table_do_not_count() {
        let selected: HashSet<u32> = [7, 8].into_iter().collect();
        assert_eq!(CheckboxState::for_selection(&[1, 2], &selected), CheckboxState::Unchecked);
    }
}
