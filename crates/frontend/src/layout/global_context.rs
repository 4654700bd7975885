use contracts::shared::layout::{is_mobile_width, LayoutState};
use leptos::prelude::*;

fn viewport_is_mobile() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .map(is_mobile_width)
        .unwrap_or(false)
}

/// Shell-wide layout flags shared by the header and the sidebar.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub layout: RwSignal<LayoutState>,
    /// Temporary drawer on small screens.
    pub mobile_open: RwSignal<bool>,
    /// Viewport is below the mobile breakpoint.
    pub is_mobile: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            layout: RwSignal::new(LayoutState::default()),
            mobile_open: RwSignal::new(false),
            is_mobile: RwSignal::new(viewport_is_mobile()),
        }
    }

    /// Keep `is_mobile` in step with the window size for the lifetime of the
    /// app. Leaving the mobile layout closes the temporary drawer.
    pub fn track_viewport(&self) {
        let is_mobile = self.is_mobile;
        let mobile_open = self.mobile_open;
        let _ = window_event_listener(leptos::ev::resize, move |_| {
            let now_mobile = viewport_is_mobile();
            if is_mobile.get_untracked() != now_mobile {
                is_mobile.set(now_mobile);
                if !now_mobile {
                    mobile_open.set(false);
                }
            }
        });
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.layout.get().sidebar_collapsed
    }

    pub fn drawer_width(&self) -> u32 {
        self.layout.get().drawer_width(self.is_mobile.get())
    }

    pub fn shows_labels(&self) -> bool {
        self.layout.get().shows_labels(self.is_mobile.get())
    }

    pub fn toggle_sidebar(&self) {
        self.layout.update(|layout| layout.toggle_sidebar());
    }

    pub fn set_sidebar_collapsed(&self, collapsed: bool) {
        self.layout.update(|layout| layout.set_sidebar_collapsed(collapsed));
    }

    pub fn toggle_mobile(&self) {
        self.mobile_open.update(|val| *val = !*val);
    }

    pub fn close_mobile(&self) {
        self.mobile_open.set(false);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
