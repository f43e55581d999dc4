use alloc::vec::Vec;

use crate::key::ElementMap;
use crate::observer::ViewportObserver;
use crate::{ElementId, HeroAnimation, IntersectionOptions, RevealOptions, RevealStyle};

/// A registered reveal-animated element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RevealTarget {
    pub element: ElementId,
    pub delay_ms: u64,
    pub revealed: bool,
}

/// Emitted once per element, the first time it becomes sufficiently visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    pub element: ElementId,
    pub style: RevealStyle,
}

/// Transitions elements from hidden to revealed, once, as they scroll into view.
///
/// Reveal is monotonic: later non-intersecting reports never hide an element again. Elements
/// stay observed after revealing; repeated reports are no-ops.
#[derive(Clone, Debug)]
pub struct RevealEngine {
    options: RevealOptions,
    targets: Vec<RevealTarget>,
    index: ElementMap<usize>,
}

impl RevealEngine {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            targets: Vec::new(),
            index: ElementMap::new(),
        }
    }

    pub fn reveal_options(&self) -> &RevealOptions {
        &self.options
    }

    pub fn targets(&self) -> &[RevealTarget] {
        &self.targets
    }

    pub fn target(&self, element: ElementId) -> Option<&RevealTarget> {
        self.index.get(&element).map(|&i| &self.targets[i])
    }

    pub fn is_revealed(&self, element: ElementId) -> bool {
        self.target(element).is_some_and(|t| t.revealed)
    }

    pub fn revealed_len(&self) -> usize {
        self.targets.iter().filter(|t| t.revealed).count()
    }

    /// The presentation an element should currently have.
    pub fn style(&self, element: ElementId) -> Option<RevealStyle> {
        let target = self.target(element)?;
        Some(if target.revealed {
            RevealStyle::revealed(target.delay_ms)
        } else {
            RevealStyle::hidden(self.options.hidden_offset, target.delay_ms)
        })
    }
}

impl ViewportObserver for RevealEngine {
    type Target = ElementId;
    type Effect = Reveal;

    fn options(&self) -> IntersectionOptions {
        self.options.intersection
    }

    fn register(&mut self, element: ElementId) -> bool {
        if self.index.contains_key(&element) {
            swarn!(element, "RevealEngine: element registered twice");
            return false;
        }
        let delay_ms = (self.targets.len() as u64).saturating_mul(self.options.stagger_ms);
        self.index.insert(element, self.targets.len());
        self.targets.push(RevealTarget {
            element,
            delay_ms,
            revealed: false,
        });
        strace!(element, delay_ms, "RevealEngine::register");
        true
    }

    fn unobserve(&mut self, element: ElementId) -> bool {
        let Some(i) = self.index.remove(&element) else {
            return false;
        };
        self.targets.remove(i);
        for slot in self.index.values_mut() {
            if *slot > i {
                *slot -= 1;
            }
        }
        true
    }

    fn is_observing(&self, element: ElementId) -> bool {
        self.index.contains_key(&element)
    }

    fn observed_len(&self) -> usize {
        self.targets.len()
    }

    fn for_each_observed(&self, f: &mut dyn FnMut(ElementId)) {
        for t in &self.targets {
            f(t.element);
        }
    }

    fn on_visible(&mut self, element: ElementId) -> Option<Reveal> {
        let &i = self.index.get(&element)?;
        let target = &mut self.targets[i];
        if target.revealed {
            return None;
        }
        target.revealed = true;
        sdebug!(element, delay_ms = target.delay_ms, "RevealEngine: revealed");
        Some(Reveal {
            element,
            style: RevealStyle::revealed(target.delay_ms),
        })
    }
}

/// Staggered entrance animation for hero elements, started once on full page load.
#[derive(Clone, Debug, Default)]
pub struct HeroEntrance {
    stagger_ms: u64,
    elements: Vec<ElementId>,
    started: bool,
}

impl HeroEntrance {
    pub fn new(stagger_ms: u64) -> Self {
        Self {
            stagger_ms,
            elements: Vec::new(),
            started: false,
        }
    }

    pub fn register(&mut self, element: ElementId) {
        if self.elements.contains(&element) {
            return;
        }
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[ElementId] {
        &self.elements
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Emits one animation per element in registration order.
    ///
    /// Returns `false` (and emits nothing) if the entrance already ran.
    pub fn start(&mut self, mut emit: impl FnMut(HeroAnimation)) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        for (i, &element) in self.elements.iter().enumerate() {
            emit(HeroAnimation {
                element,
                delay_ms: (i as u64).saturating_mul(self.stagger_ms),
            });
        }
        true
    }
}
