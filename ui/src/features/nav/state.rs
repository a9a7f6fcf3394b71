//! Navbar: compact style after scrolling, mobile menu, anchor offsets.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavState {
    scrolled: bool,
    menu_open: bool,
}

impl NavState {
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Returns true when the compact flag changed.
    pub fn on_scroll(&mut self, scroll_y: f64, threshold: f64) -> bool {
        let scrolled = scroll_y > threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// Hamburger click.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Any nav link click closes the mobile menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

/// Scroll position that puts a section's top just under the fixed navbar.
pub fn anchor_scroll_top(section_top: f64, nav_offset: f64) -> f64 {
    section_top - nav_offset
}
