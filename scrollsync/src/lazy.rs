use alloc::string::String;
use alloc::vec::Vec;
use core::mem;

use crate::key::ElementMap;
use crate::observer::ViewportObserver;
use crate::{ElementId, IntersectionOptions};

/// An image whose real source is deferred until it scrolls into view.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeferredImage {
    pub element: ElementId,
    pub source: String,
}

impl DeferredImage {
    pub fn new(element: ElementId, source: impl Into<String>) -> Self {
        Self {
            element,
            source: source.into(),
        }
    }
}

/// Emitted once per image: copy `source` into the live source and drop the pending marker.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadImage {
    pub element: ElementId,
    pub source: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ImageState {
    Pending,
    Loaded,
    /// Unobserved by the host before it ever loaded.
    Dropped,
}

#[derive(Clone, Debug)]
struct ImageSlot {
    image: DeferredImage,
    state: ImageState,
}

/// Loads deferred images the first time they become visible.
///
/// Each image is a one-shot claim: it is unobserved as soon as it loads, so the observer only
/// ever tracks images that are still pending.
#[derive(Clone, Debug)]
pub struct LazyImageLoader {
    options: IntersectionOptions,
    slots: Vec<ImageSlot>,
    index: ElementMap<usize>,
    observed: usize,
    loaded: usize,
}

impl LazyImageLoader {
    pub fn new(options: IntersectionOptions) -> Self {
        Self {
            options,
            slots: Vec::new(),
            index: ElementMap::new(),
            observed: 0,
            loaded: 0,
        }
    }

    fn slot(&self, element: ElementId) -> Option<&ImageSlot> {
        self.index.get(&element).map(|&i| &self.slots[i])
    }

    /// Images still waiting to load, in registration order.
    pub fn pending(&self) -> impl Iterator<Item = &DeferredImage> + '_ {
        self.slots
            .iter()
            .filter(|slot| slot.state == ImageState::Pending)
            .map(|slot| &slot.image)
    }

    pub fn pending_source(&self, element: ElementId) -> Option<&str> {
        self.slot(element)
            .filter(|slot| slot.state == ImageState::Pending)
            .map(|slot| slot.image.source.as_str())
    }

    pub fn is_loaded(&self, element: ElementId) -> bool {
        self.slot(element)
            .is_some_and(|slot| slot.state == ImageState::Loaded)
    }

    pub fn loaded_len(&self) -> usize {
        self.loaded
    }
}

impl ViewportObserver for LazyImageLoader {
    type Target = DeferredImage;
    type Effect = LoadImage;

    fn options(&self) -> IntersectionOptions {
        self.options
    }

    fn register(&mut self, image: DeferredImage) -> bool {
        let element = image.element;
        if let Some(&i) = self.index.get(&element) {
            let slot = &mut self.slots[i];
            if slot.state != ImageState::Dropped {
                swarn!(element, "LazyImageLoader: image registered twice");
                return false;
            }
            slot.image = image;
            slot.state = ImageState::Pending;
        } else {
            self.index.insert(element, self.slots.len());
            self.slots.push(ImageSlot {
                image,
                state: ImageState::Pending,
            });
        }
        self.observed += 1;
        strace!(element, "LazyImageLoader::register");
        true
    }

    fn unobserve(&mut self, element: ElementId) -> bool {
        let Some(&i) = self.index.get(&element) else {
            return false;
        };
        let slot = &mut self.slots[i];
        if slot.state != ImageState::Pending {
            return false;
        }
        slot.state = ImageState::Dropped;
        self.observed -= 1;
        true
    }

    fn is_observing(&self, element: ElementId) -> bool {
        self.pending_source(element).is_some()
    }

    fn observed_len(&self) -> usize {
        self.observed
    }

    fn for_each_observed(&self, f: &mut dyn FnMut(ElementId)) {
        for image in self.pending() {
            f(image.element);
        }
    }

    fn on_visible(&mut self, element: ElementId) -> Option<LoadImage> {
        let &i = self.index.get(&element)?;
        let slot = &mut self.slots[i];
        if slot.state != ImageState::Pending {
            return None;
        }
        slot.state = ImageState::Loaded;
        self.observed -= 1;
        self.loaded += 1;
        sdebug!(element, "LazyImageLoader: loading image");
        Some(LoadImage {
            element,
            source: mem::take(&mut slot.image.source),
        })
    }
}
