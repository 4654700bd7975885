/// Sidebar width when collapsed to icons.
pub const SIDEBAR_COLLAPSED_WIDTH: u32 = 72;
/// Sidebar width when expanded, and always on small screens.
pub const SIDEBAR_EXPANDED_WIDTH: u32 = 250;
/// Viewports narrower than this get the temporary drawer.
pub const MOBILE_BREAKPOINT: f64 = 900.0;

pub fn is_mobile_width(viewport_width: f64) -> bool {
    viewport_width < MOBILE_BREAKPOINT
}

/// Layout preferences shared by the shell. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutState {
    pub sidebar_collapsed: bool,
}

impl LayoutState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn set_sidebar_collapsed(&mut self, collapsed: bool) {
        self.sidebar_collapsed = collapsed;
    }

    /// The collapsed flag only narrows the permanent (desktop) drawer.
    pub fn drawer_width(&self, is_mobile: bool) -> u32 {
        if self.sidebar_collapsed && !is_mobile {
            SIDEBAR_COLLAPSED_WIDTH
        } else {
            SIDEBAR_EXPANDED_WIDTH
        }
    }

    /// Whether labels are rendered next to the sidebar icons.
    pub fn shows_labels(&self, is_mobile: bool) -> bool {
        !self.sidebar_collapsed || is_mobile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips() {
        let mut layout = LayoutState::default();
        assert!(!layout.sidebar_collapsed);
        layout.toggle_sidebar();
        assert!(layout.sidebar_collapsed);
        layout.toggle_sidebar();
        assert!(!layout.sidebar_collapsed);
    }

    #[test]
    fn test_drawer_width() {
        let mut layout = LayoutState::default();
        assert_eq!(layout.drawer_width(false), 250);
        layout.set_sidebar_collapsed(true);
        assert_eq!(layout.drawer_width(false), 72);
        assert_eq!(layout.drawer_width(true), 250);
        assert!(!layout.shows_labels(false));
        assert!(layout.shows_labels(true));
    }

    #[test]
    fn test_mobile_breakpoint() {
        assert!(is_mobile_width(375.0));
        assert!(is_mobile_width(899.0));
        assert!(!is_mobile_width(900.0));
        assert!(!is_mobile_width(1440.0));
    }
}
