use super::use_theme;
use crate::shared::icons::icon;
use contracts::shared::theme::ThemeMode;
use leptos::prelude::*;

/// Header button switching between light and dark mode.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();
    let mode = ctx.mode;

    view! {
        <button
            class="top-header__icon-btn"
            on:click=move |_| ctx.toggle()
            title=move || format!("Switch to {} mode", mode.get().toggled().as_str())
        >
            {move || match mode.get() {
                ThemeMode::Light => icon("moon"),
                ThemeMode::Dark => icon("sun"),
            }}
        </button>
    }
}
