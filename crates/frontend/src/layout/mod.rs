pub mod global_context;
pub mod left;
pub mod top_header;

use contracts::domain::a001_book_order::{DateRange, UserProfile};
use leptos::prelude::*;
use top_header::TopHeader;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |  Sidebar  |          TopHeader           |
/// |           +------------------------------+
/// |  (Left)   |           Content            |
/// +------------------------------------------+
/// ```
///
/// The page owns the header callbacks, so each page renders its own shell.
#[component]
pub fn Shell(
    /// Breadcrumb shown in the header
    #[prop(into)]
    title: String,
    /// Signed-in user for the profile menu
    user: UserProfile,
    on_search: Callback<String>,
    on_date_range_change: Callback<DateRange>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="app-layout">
            <left::Left />
            <div class="app-body">
                <TopHeader
                    title=title
                    user=user
                    on_search=on_search
                    on_date_range_change=on_date_range_change
                />
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
