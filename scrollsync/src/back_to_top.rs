use crate::{ScrollBehavior, ScrollRequest};

/// The back-to-top control: visible only after scrolling past a fixed distance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BackToTop {
    threshold: u64,
    visible: bool,
}

impl BackToTop {
    pub fn new(threshold: u64) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Recomputes visibility; reassigned on every call, even when unchanged.
    pub fn update(&mut self, scroll_offset: u64) -> bool {
        self.visible = scroll_offset > self.threshold;
        self.visible
    }

    /// The scroll to issue when the control is activated.
    pub fn activate(&self, behavior: ScrollBehavior) -> ScrollRequest {
        ScrollRequest { top: 0, behavior }
    }
}
