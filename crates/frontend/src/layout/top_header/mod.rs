//! TopHeader component - application top bar.
//!
//! Contains:
//! - Mobile drawer button and breadcrumb title
//! - Search popover and date range filter
//! - Theme toggle
//! - Profile menu

mod calendar_filter;
mod profile_menu;
mod search_bar;

pub use calendar_filter::CalendarFilter;
pub use profile_menu::ProfileMenu;
pub use search_bar::SearchBar;

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use contracts::domain::a001_book_order::{DateRange, UserProfile};
use leptos::prelude::*;

#[component]
pub fn TopHeader(
    #[prop(into)] title: String,
    user: UserProfile,
    on_search: Callback<String>,
    on_date_range_change: Callback<DateRange>,
) -> impl IntoView {
    let ctx = use_app_context();
    let user_id = StoredValue::new(user.id.clone());

    view! {
        <header class="top-header">
            <button
                class="top-header__icon-btn top-header__menu-btn"
                aria-label="open drawer"
                on:click=move |_| ctx.toggle_mobile()
            >
                {icon("menu")}
            </button>

            <div class="top-header__brand">
                <span class="top-header__title">{title}</span>
            </div>

            <div class="top-header__actions">
                <SearchBar placeholder="Search orders..." on_search=on_search />
                <CalendarFilter on_date_range_change=on_date_range_change />
                <ThemeToggle />
                <ProfileMenu
                    user=user
                    on_profile_click=Callback::new(move |_| log::info!("Profile clicked (user {})", user_id.get_value()))
                    on_settings_click=Callback::new(move |_| log::info!("Settings clicked (user {})", user_id.get_value()))
                    on_logout=Callback::new(move |_| log::info!("Logout clicked (user {})", user_id.get_value()))
                />
            </div>
        </header>
    }
}
