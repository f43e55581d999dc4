/// Result of one scroll recomputation.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollProjection {
    pub offset: u64,
    pub elevated: bool,
    /// Index of the current section, in document order.
    pub active_section: Option<usize>,
    /// Index of the single active navigation link.
    pub active_link: Option<usize>,
}

/// A lightweight snapshot of every derived presentation flag.
///
/// This is useful for debugging adapters and for asserting page state in tests without
/// inspecting the host document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyncState {
    pub scroll: ScrollProjection,
    pub back_to_top_visible: bool,
    pub menu_open: bool,
    pub revealed: usize,
    pub images_pending: usize,
    pub images_loaded: usize,
    pub notifications: usize,
}
