/// Intersection observation settings (aka `IntersectionObserver` options).
///
/// The root box is the viewport. `root_margin_bottom` moves its bottom edge: negative values
/// contract it, so an element must rise that far above the viewport bottom before it counts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntersectionOptions {
    /// Fraction of the element's area (`0.0..=1.0`) that must be visible.
    pub threshold: f32,
    pub root_margin_bottom: i32,
}

impl IntersectionOptions {
    pub fn new(threshold: f32, root_margin_bottom: i32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            root_margin_bottom,
        }
    }
}

/// Configuration for [`crate::RevealEngine`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RevealOptions {
    /// Per-registration stagger: element `i` gets a `i * stagger_ms` transition delay.
    pub stagger_ms: u64,
    /// Downward offset of a hidden element.
    pub hidden_offset: u32,
    pub intersection: IntersectionOptions,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            stagger_ms: 50,
            hidden_offset: 40,
            intersection: IntersectionOptions::new(0.15, -80),
        }
    }
}

/// What happens when a notification is requested while another one is still on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverlapPolicy {
    /// Every call shows immediately; instances may stack visually.
    #[default]
    Overlap,
    /// Later calls wait until the current notification is removed, then show in call order.
    Serialize,
}

/// Configuration for [`crate::NotificationQueue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NotificationOptions {
    /// Delay between insertion and the visible phase (the "next paint" tick).
    pub enter_delay_ms: u64,
    /// Time from insertion until the exit transition starts.
    pub hold_ms: u64,
    /// Exit transition duration; the node is removed once it elapses.
    pub exit_ms: u64,
    pub policy: OverlapPolicy,
}

impl Default for NotificationOptions {
    fn default() -> Self {
        Self {
            enter_delay_ms: 10,
            hold_ms: 2500,
            exit_ms: 300,
            policy: OverlapPolicy::Overlap,
        }
    }
}

/// Configuration shared by every component.
///
/// `Default` reproduces the reference page behavior.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`, so adapters can
/// load it from a config file.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SyncOptions {
    /// The navbar is elevated once the scroll offset is strictly greater than this.
    pub navbar_elevation_threshold: u64,
    /// Extra distance below the navbar at which a section already counts as current.
    pub section_lookahead: u32,
    /// The back-to-top control is visible once the scroll offset is strictly greater than this.
    pub back_to_top_threshold: u64,
    pub reveal: RevealOptions,
    pub lazy_image: IntersectionOptions,
    pub notification: NotificationOptions,
    /// Quiet period after the last resize signal.
    pub resize_debounce_ms: u64,
    /// Viewports wider than this are "desktop" and never show the mobile menu.
    pub mobile_breakpoint: u32,
    /// Per-element delay of the hero entrance animation.
    pub hero_stagger_ms: u64,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            navbar_elevation_threshold: 10,
            section_lookahead: 100,
            back_to_top_threshold: 400,
            reveal: RevealOptions::default(),
            lazy_image: IntersectionOptions::default(),
            notification: NotificationOptions::default(),
            resize_debounce_ms: 250,
            mobile_breakpoint: 768,
            hero_stagger_ms: 100,
        }
    }
}

impl SyncOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_navbar_elevation_threshold(mut self, threshold: u64) -> Self {
        self.navbar_elevation_threshold = threshold;
        self
    }

    pub fn with_section_lookahead(mut self, lookahead: u32) -> Self {
        self.section_lookahead = lookahead;
        self
    }

    pub fn with_back_to_top_threshold(mut self, threshold: u64) -> Self {
        self.back_to_top_threshold = threshold;
        self
    }

    pub fn with_reveal(mut self, reveal: RevealOptions) -> Self {
        self.reveal = reveal;
        self
    }

    pub fn with_lazy_image(mut self, lazy_image: IntersectionOptions) -> Self {
        self.lazy_image = lazy_image;
        self
    }

    pub fn with_notification(mut self, notification: NotificationOptions) -> Self {
        self.notification = notification;
        self
    }

    pub fn with_overlap_policy(mut self, policy: OverlapPolicy) -> Self {
        self.notification.policy = policy;
        self
    }

    pub fn with_resize_debounce_ms(mut self, delay_ms: u64) -> Self {
        self.resize_debounce_ms = delay_ms;
        self
    }

    pub fn with_mobile_breakpoint(mut self, breakpoint: u32) -> Self {
        self.mobile_breakpoint = breakpoint;
        self
    }

    pub fn with_hero_stagger_ms(mut self, stagger_ms: u64) -> Self {
        self.hero_stagger_ms = stagger_ms;
        self
    }
}
