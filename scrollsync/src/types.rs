/// An opaque handle for a host node (DOM element, widget id, ...).
pub type ElementId = u64;

/// Document-space geometry of an element on the scroll axis.
///
/// Only the vertical axis matters: pages scroll vertically and every threshold in this crate is
/// a vertical distance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementRect {
    /// Offset of the element's top edge from the top of the document.
    pub top: u64,
    pub height: u32,
}

impl ElementRect {
    pub fn new(top: u64, height: u32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> u64 {
        self.top.saturating_add(self.height as u64)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Auto,
}

/// A request for the host to scroll the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollRequest {
    pub top: u64,
    pub behavior: ScrollBehavior,
}

/// Presentation state of a reveal-animated element.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RevealStyle {
    pub opacity: f32,
    /// Downward offset in pixels (`0` once revealed).
    pub translate_y: u32,
    /// Transition start delay (stagger).
    pub delay_ms: u64,
}

impl RevealStyle {
    pub fn hidden(translate_y: u32, delay_ms: u64) -> Self {
        Self {
            opacity: 0.0,
            translate_y,
            delay_ms,
        }
    }

    pub fn revealed(delay_ms: u64) -> Self {
        Self {
            opacity: 1.0,
            translate_y: 0,
            delay_ms,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.opacity >= 1.0 && self.translate_y == 0
    }
}

/// Entrance animation for a hero element, started once the page has fully loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroAnimation {
    pub element: ElementId,
    pub delay_ms: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MotionPreference {
    #[default]
    NoPreference,
    Reduce,
}

impl MotionPreference {
    /// The scroll behavior to use for programmatic scrolling.
    pub fn scroll_behavior(self) -> ScrollBehavior {
        match self {
            Self::NoPreference => ScrollBehavior::Smooth,
            Self::Reduce => ScrollBehavior::Auto,
        }
    }
}
