use crate::key::ElementMap;
use crate::{ElementId, ElementRect, Viewport};

/// Live layout metrics supplied by the host.
///
/// Implementations must not cache: every call should reflect the current layout, so state
/// machines stay correct after layout shifts (late image loads, font swaps, ...).
pub trait GeometryReader {
    /// Vertical scroll position of the page.
    fn scroll_offset(&self) -> u64;

    fn viewport(&self) -> Viewport;

    /// Returns `None` if the element is unknown or currently detached.
    fn element_rect(&self, element: ElementId) -> Option<ElementRect>;
}

impl<G: GeometryReader + ?Sized> GeometryReader for &G {
    fn scroll_offset(&self) -> u64 {
        (**self).scroll_offset()
    }

    fn viewport(&self) -> Viewport {
        (**self).viewport()
    }

    fn element_rect(&self, element: ElementId) -> Option<ElementRect> {
        (**self).element_rect(element)
    }
}

/// A plain snapshot of page geometry.
///
/// Useful for adapters that measure layout once per frame, and for driving the state machines
/// with synthetic geometry.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticGeometry {
    pub scroll_offset: u64,
    pub viewport: Viewport,
    rects: ElementMap<ElementRect>,
}

impl StaticGeometry {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            scroll_offset: 0,
            viewport,
            rects: ElementMap::new(),
        }
    }

    pub fn with_scroll_offset(mut self, scroll_offset: u64) -> Self {
        self.scroll_offset = scroll_offset;
        self
    }

    pub fn with_element(mut self, element: ElementId, rect: ElementRect) -> Self {
        self.rects.insert(element, rect);
        self
    }

    pub fn set_scroll_offset(&mut self, scroll_offset: u64) {
        self.scroll_offset = scroll_offset;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn set_element(&mut self, element: ElementId, rect: ElementRect) {
        self.rects.insert(element, rect);
    }

    pub fn remove_element(&mut self, element: ElementId) -> Option<ElementRect> {
        self.rects.remove(&element)
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

impl GeometryReader for StaticGeometry {
    fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn element_rect(&self, element: ElementId) -> Option<ElementRect> {
        self.rects.get(&element).copied()
    }
}
