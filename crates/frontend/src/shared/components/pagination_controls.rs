use crate::shared::icons::icon;
use contracts::shared::pagination::TablePage;
use leptos::prelude::*;

/// Table footer: rows-per-page selector, "{from}-{to} of {count}" label and
/// previous/next buttons.
#[component]
pub fn PaginationControls(
    /// Current page view-state of the owning table
    #[prop(into)]
    state: Signal<TablePage>,

    /// Total number of rows in the table
    #[prop(into)]
    total_count: Signal<usize>,

    /// Callback when page changes (0-indexed)
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let page_size = move || state.get().page_size;

    view! {
        <div class="pagination-controls">
            <span class="pagination-controls__caption">"Rows per page:"</span>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let fallback = page_size();
                    let val = event_target_value(&ev).parse().unwrap_or(fallback);
                    on_page_size_change.run(val);
                }
                prop:value=move || page_size().to_string()
            >
                {page_size_options.into_iter().map(|size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
            <span class="pagination-info">
                {move || state.get().displayed_rows(total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let current = state.get_untracked();
                    if current.has_previous() {
                        on_page_change.run(current.page - 1);
                    }
                }
                disabled=move || !state.get().has_previous()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let current = state.get_untracked();
                    if current.has_next(total_count.get_untracked()) {
                        on_page_change.run(current.page + 1);
                    }
                }
                disabled=move || !state.get().has_next(total_count.get())
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
