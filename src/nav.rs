/// Scroll offset (CSS px) past which the header switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Matches Tailwind's `md` breakpoint. At or above it the mobile menu is never shown.
pub const WIDE_VIEWPORT_QUERY: &str = "(min-width: 768px)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        name: "Command",
        href: "#hero",
    },
    NavLink {
        name: "Experience",
        href: "#experience",
    },
    NavLink {
        name: "Projects",
        href: "#projects",
    },
    NavLink {
        name: "Comms",
        href: "#contact",
    },
];

/// The two independent header flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
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

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Called when a navigation link is activated.
    pub fn close(&mut self) {
        self.menu_open = false;
    }

    /// Returns whether the flag changed.
    pub fn observe_scroll(&mut self, offset: f64) -> bool {
        let scrolled = offset > SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn menu_visible(&self, wide_viewport: bool) -> bool {
        self.menu_open && !wide_viewport
    }

    pub fn header_class(&self) -> &'static str {
        if self.scrolled {
            "bg-background/95 border-cyan/30 backdrop-blur-md"
        } else {
            "bg-transparent border-transparent"
        }
    }
}
