//! Colour mode context.
//!
//! The mode is loaded from `localStorage` when the provider mounts (light if
//! nothing usable is stored), and written back on every toggle.

mod theme_toggle;

pub use theme_toggle::ThemeToggle;

use crate::shared::storage::BrowserStorage;
use contracts::shared::theme::{load_theme_mode, toggle_theme_mode, ThemeMode};
use leptos::prelude::*;
use web_sys::window;

/// Set `data-theme` on `<body>` so the stylesheet can switch palettes.
fn apply_theme_attribute(mode: ThemeMode) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", mode.as_str());
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current mode. Read-only for consumers; change it through [`ThemeContext::toggle`].
    pub mode: ReadSignal<ThemeMode>,
    set_mode: WriteSignal<ThemeMode>,
    storage_key: StoredValue<String>,
}

impl ThemeContext {
    /// Flip between light and dark and persist the new mode.
    pub fn toggle(&self) {
        let key = self.storage_key.get_value();
        let next = toggle_theme_mode(&BrowserStorage, &key, self.mode.get_untracked());
        log::info!("Theme switched to {}", next.as_str());
        apply_theme_attribute(next);
        self.set_mode.set(next);
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(
    /// `localStorage` key holding `"light"` or `"dark"`
    #[prop(into)]
    storage_key: String,
    children: Children,
) -> impl IntoView {
    let initial_mode = load_theme_mode(&BrowserStorage, &storage_key);
    let (mode, set_mode) = signal(initial_mode);
    apply_theme_attribute(initial_mode);

    provide_context(ThemeContext {
        mode,
        set_mode,
        storage_key: StoredValue::new(storage_key),
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}
