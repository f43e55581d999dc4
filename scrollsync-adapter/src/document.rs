use core::fmt;

use alloc::string::String;

use scrollsync::{
    ElementId, HeroAnimation, NotificationId, NotificationPhase, RevealStyle, ScrollBehavior,
    ScrollRequest,
};

/// Mutations the page controller applies to the host document.
///
/// Every call is idempotent from the host's point of view: the controller reassigns flags on
/// each recomputation instead of diffing.
pub trait Document {
    /// Adds (`on = true`) or removes a presentation class.
    fn set_class(&mut self, element: ElementId, class: &str, on: bool);

    fn set_reveal_style(&mut self, element: ElementId, style: RevealStyle);

    /// Sets (`Some`) or removes (`None`) an attribute.
    fn set_attribute(&mut self, element: ElementId, name: &str, value: Option<&str>);

    /// Creates the back-to-top control (initially hidden) and returns its handle.
    fn insert_back_to_top(&mut self, label: &str) -> ElementId;

    fn set_control_visible(&mut self, element: ElementId, visible: bool);

    fn insert_notification(&mut self, id: NotificationId, message: &str);

    fn set_notification_phase(&mut self, id: NotificationId, phase: NotificationPhase);

    fn remove_notification(&mut self, id: NotificationId);

    fn scroll_to(&mut self, request: ScrollRequest);

    /// Navigates the page to `href` (used as the clipboard fallback).
    fn navigate(&mut self, href: &str);

    fn inject_style(&mut self, css: &str);

    fn set_root_scroll_behavior(&mut self, behavior: ScrollBehavior);

    fn set_animation(&mut self, animation: HeroAnimation);
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClipboardError {
    /// The host refused clipboard access.
    Denied,
    /// No clipboard is available (insecure context, headless host, ...).
    Unavailable,
    Other(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Denied => f.write_str("clipboard access denied"),
            Self::Unavailable => f.write_str("clipboard unavailable"),
            Self::Other(msg) => write!(f, "clipboard write failed: {msg}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ClipboardError {}

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}
