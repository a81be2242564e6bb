//! Navbar chrome state (dropdowns, mobile menu, scroll appearance).
//!
//! DESIGN
//! ======
//! At most one dropdown is open at a time, so the open dropdown is a single
//! enum value rather than one boolean per menu. The mobile menu toggles
//! independently.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Vertical scroll offset above which the navbar switches to its compact look.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Which navbar dropdown is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dropdown {
    #[default]
    Closed,
    Services,
    Account,
}

/// Cosmetic navbar appearance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavAppearance {
    #[default]
    Default,
    Scrolled,
}

impl NavAppearance {
    /// Appearance for a vertical scroll offset; strictly past the threshold
    /// counts as scrolled.
    pub fn for_offset(offset: f64) -> Self {
        if offset > SCROLL_THRESHOLD_PX { Self::Scrolled } else { Self::Default }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub dropdown: Dropdown,
    pub mobile_open: bool,
    pub appearance: NavAppearance,
}

impl NavState {
    /// Open `which`, or close it when it is already the open dropdown.
    pub fn toggle_dropdown(&mut self, which: Dropdown) {
        self.dropdown = if self.dropdown == which { Dropdown::Closed } else { which };
    }

    pub fn is_open(&self, which: Dropdown) -> bool {
        which != Dropdown::Closed && self.dropdown == which
    }

    pub fn toggle_mobile(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    /// Close every menu, used when a navbar link is followed.
    pub fn close_all(&mut self) {
        self.dropdown = Dropdown::Closed;
        self.mobile_open = false;
    }

    /// Record the window's vertical scroll offset. Returns whether the
    /// appearance changed.
    pub fn set_scroll_offset(&mut self, offset: f64) -> bool {
        let next = NavAppearance::for_offset(offset);
        let changed = next != self.appearance;
        self.appearance = next;
        changed
    }

    pub fn is_scrolled(&self) -> bool {
        self.appearance == NavAppearance::Scrolled
    }
}
