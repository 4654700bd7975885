use crate::domain::a001_book_order::ui::details::OrderDetailPage;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::theme::{use_theme, ThemeProvider};
use contracts::shared::config::{load_config, DashboardConfig};
use contracts::shared::theme::ThemeMode;
use leptos::prelude::*;
use thaw::{ConfigProvider, Theme};

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let storage_key = config.theme.storage_key.clone();

    // Screen-wide settings are read through context, not threaded as props.
    provide_context(config);
    let app_ctx = AppGlobalContext::new();
    app_ctx.track_viewport();
    provide_context(app_ctx);

    view! {
        <ThemeProvider storage_key=storage_key>
            <ThemedShell />
        </ThemeProvider>
    }
}

/// Keeps the thaw component theme in step with the colour mode.
#[component]
fn ThemedShell() -> impl IntoView {
    let theme_ctx = use_theme();
    let thaw_theme = RwSignal::new(thaw_theme_for(theme_ctx.mode.get_untracked()));

    Effect::new(move |_| {
        thaw_theme.set(thaw_theme_for(theme_ctx.mode.get()));
    });

    view! {
        <ConfigProvider theme=thaw_theme>
            <OrderDetailPage />
        </ConfigProvider>
    }
}

fn thaw_theme_for(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Light => Theme::light(),
        ThemeMode::Dark => Theme::dark(),
    }
}

/// Screen configuration provided by [`App`].
pub fn use_config() -> DashboardConfig {
    use_context::<DashboardConfig>().unwrap_or_default()
}
