use alloc::string::{String, ToString};

/// Style block injected once at initialization: the menu toggle's "open" geometry.
pub const MENU_TOGGLE_STYLE: &str = "
.hamburger.active span:nth-child(1) {
    transform: rotate(45deg) translate(5px, 5px);
}

.hamburger.active span:nth-child(2) {
    opacity: 0;
}

.hamburger.active span:nth-child(3) {
    transform: rotate(-45deg) translate(6px, -6px);
}
";

pub const COPY_NOTIFICATION: &str = "Email copied to clipboard!";

pub const BACK_TO_TOP_LABEL: &str = "Back to top";

/// Presentation classes toggled by the page controller.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClassNames {
    /// Navbar in elevated mode.
    pub elevated: String,
    /// Active navigation link; also the open flag of the menu and its toggle.
    pub active: String,
    /// Added to the body once every resource has loaded.
    pub loaded: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            elevated: "scrolled".to_string(),
            active: "active".to_string(),
            loaded: "loaded".to_string(),
        }
    }
}
