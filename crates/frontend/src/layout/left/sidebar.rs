//! Sidebar content: brand, seller controls and the navigation list.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use contracts::domain::a001_book_order::NavigationItem;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    let collapsed = move || ctx.sidebar_collapsed();
    let labels_hidden = move || !ctx.shows_labels();

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">
                <span class="app-sidebar__brand-name app-sidebar__label">"booksmandala"</span>
                <button
                    class="app-sidebar__toggle"
                    on:click=move |_| ctx.toggle_sidebar()
                    title=move || if collapsed() { "Expand sidebar" } else { "Collapse sidebar" }
                >
                    {move || if collapsed() { icon("menu") } else { icon("chevron-left") }}
                </button>
            </div>

            <div class="app-sidebar__section app-sidebar__label">
                <div class="app-sidebar__seller-controls">
                    {icon("users")}
                    <span>"Seller Controls"</span>
                </div>
            </div>
            <div class="app-sidebar__caption app-sidebar__label">"Controls"</div>

            <nav class="app-sidebar__nav" aria-label="navigation sidebar">
                {NavigationItem::sidebar().into_iter().map(|item| {
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=item.active
                            title=move || if labels_hidden() { item.label } else { "" }
                            on:click=move |_| {
                                log::info!("Navigate to {}", item.key);
                                ctx.close_mobile();
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(item.icon)}
                                <span class="app-sidebar__label">{item.label}</span>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </nav>

            <div class="app-sidebar__spacer"></div>

            <div class="app-sidebar__footer">
                <span class="avatar">"P"</span>
                <span class="app-sidebar__label">"Person Name"</span>
                <button class="app-sidebar__footer-menu app-sidebar__label" title="More">
                    {icon("more-vertical")}
                </button>
            </div>
        </div>
    }
}
