use alloc::vec::Vec;

use crate::intersection::intersection;
use crate::{ElementId, GeometryReader, IntersectionEntry, IntersectionOptions};

/// A set of elements watched for viewport intersection.
///
/// Implementations decide what a qualifying intersection means for an element (the `Effect`)
/// and whether the element stays observed afterwards. Entries may come from a native observer
/// (`on_intersection`) or be synthesized from geometry (`sync`); both paths behave the same.
pub trait ViewportObserver {
    /// What the adapter registers (an element, or an element plus extra data).
    type Target;
    /// What the adapter must apply when an element qualifies.
    type Effect;

    fn options(&self) -> IntersectionOptions;

    /// Starts observing `target`. Returns `false` if its element is already known.
    fn register(&mut self, target: Self::Target) -> bool;

    /// Stops observing `element`. Returns `false` if it was not observed.
    fn unobserve(&mut self, element: ElementId) -> bool;

    fn is_observing(&self, element: ElementId) -> bool;

    fn observed_len(&self) -> usize;

    /// Calls `f` for every observed element, in registration order.
    fn for_each_observed(&self, f: &mut dyn FnMut(ElementId));

    /// Handles `element` becoming visible.
    fn on_visible(&mut self, element: ElementId) -> Option<Self::Effect>;

    /// Handles one observation entry. Non-intersecting entries never produce an effect.
    fn on_intersection(&mut self, entry: IntersectionEntry) -> Option<Self::Effect> {
        if !entry.is_intersecting || !self.is_observing(entry.target) {
            return None;
        }
        self.on_visible(entry.target)
    }

    /// Computes entries for every observed element from `geometry`.
    ///
    /// Elements without geometry are skipped.
    fn collect_entries<G: GeometryReader + ?Sized>(
        &self,
        geometry: &G,
        emit: &mut dyn FnMut(IntersectionEntry),
    ) {
        let scroll_offset = geometry.scroll_offset();
        let viewport = geometry.viewport();
        let options = self.options();
        self.for_each_observed(&mut |element| {
            if let Some(rect) = geometry.element_rect(element) {
                emit(intersection(element, rect, scroll_offset, viewport, options));
            }
        });
    }

    /// Evaluates every observed element against `geometry` and emits the resulting effects.
    fn sync<G: GeometryReader + ?Sized>(
        &mut self,
        geometry: &G,
        emit: &mut dyn FnMut(Self::Effect),
    ) {
        let mut entries = Vec::new();
        self.collect_entries(geometry, &mut |entry| entries.push(entry));
        for entry in entries {
            if let Some(effect) = self.on_intersection(entry) {
                emit(effect);
            }
        }
    }
}
