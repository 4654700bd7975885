use super::Sidebar;
use crate::layout::global_context::use_app_context;
use leptos::prelude::*;

/// Sidebar drawer.
///
/// On desktop it is permanent and its width follows the collapsed flag; on
/// small screens it slides in over the content and a backdrop closes it.
#[component]
pub fn Left() -> impl IntoView {
    let ctx = use_app_context();
    let mobile_open = move || ctx.mobile_open.get();

    view! {
        <Show when=mobile_open>
            <div class="app-sidebar__backdrop" on:click=move |_| ctx.close_mobile()></div>
        </Show>
        <aside
            data-zone="left"
            class="app-sidebar"
            class:app-sidebar--collapsed=move || ctx.sidebar_collapsed()
            class:app-sidebar--labels-hidden=move || !ctx.shows_labels()
            class:app-sidebar--mobile-open=mobile_open
            style=move || format!("--sidebar-width: {}px", ctx.drawer_width())
        >
            <Sidebar />
        </aside>
    }
}
