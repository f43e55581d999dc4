use core::cmp;

use crate::{ElementId, ElementRect, IntersectionOptions, Viewport};

/// One observation result for a tracked element.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntersectionEntry {
    pub target: ElementId,
    pub is_intersecting: bool,
    /// Visible fraction of the element, in `0.0..=1.0`.
    pub ratio: f32,
}

impl IntersectionEntry {
    pub fn new(target: ElementId, is_intersecting: bool, ratio: f32) -> Self {
        Self {
            target,
            is_intersecting,
            ratio,
        }
    }
}

/// Returns the `[top, bottom)` range of the root box in document space.
pub fn root_bounds(
    scroll_offset: u64,
    viewport: Viewport,
    options: IntersectionOptions,
) -> (u64, u64) {
    let height = (viewport.height as i64)
        .saturating_add(options.root_margin_bottom as i64)
        .max(0) as u64;
    (scroll_offset, scroll_offset.saturating_add(height))
}

/// Computes an intersection entry from plain geometry.
///
/// An element intersects when it overlaps the root box and at least `threshold` of its height
/// is inside it. A zero-height element intersects when its top lies in `[top, bottom)` of the
/// root box.
pub fn intersection(
    target: ElementId,
    rect: ElementRect,
    scroll_offset: u64,
    viewport: Viewport,
    options: IntersectionOptions,
) -> IntersectionEntry {
    let (root_top, root_bottom) = root_bounds(scroll_offset, viewport, options);
    if root_bottom <= root_top {
        return IntersectionEntry::new(target, false, 0.0);
    }

    if rect.height == 0 {
        let inside = (root_top..root_bottom).contains(&rect.top);
        return IntersectionEntry::new(target, inside, if inside { 1.0 } else { 0.0 });
    }

    let top = cmp::max(root_top, rect.top);
    let bottom = cmp::min(root_bottom, rect.bottom());
    let overlap = bottom.saturating_sub(top);
    let ratio = (overlap as f32 / rect.height as f32).clamp(0.0, 1.0);
    let is_intersecting = overlap > 0 && ratio >= options.threshold;
    IntersectionEntry::new(target, is_intersecting, ratio)
}
