use alloc::string::String;
use alloc::vec::Vec;

use crate::{ElementId, GeometryReader, ScrollProjection, SyncOptions};

/// A page section that navigation links can point at.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    pub id: String,
    pub element: ElementId,
}

impl Section {
    pub fn new(id: impl Into<String>, element: ElementId) -> Self {
        Self {
            id: id.into(),
            element,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavLink {
    pub element: ElementId,
    /// Id of the section this link scrolls to (without the leading `#`).
    pub target: String,
    active: bool,
}

impl NavLink {
    pub fn new(element: ElementId, target: impl Into<String>) -> Self {
        Self {
            element,
            target: target.into(),
            active: false,
        }
    }

    /// Builds a link from an in-page `href` such as `#about`.
    ///
    /// Returns `None` for anything that is not a non-empty fragment reference.
    pub fn from_href(element: ElementId, href: &str) -> Option<Self> {
        let target = href.strip_prefix('#')?;
        if target.is_empty() {
            return None;
        }
        Some(Self::new(element, target))
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Navbar "elevated" mode, a pure function of the scroll offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavbarElevation {
    threshold: u64,
    elevated: bool,
}

impl NavbarElevation {
    pub fn new(threshold: u64) -> Self {
        Self {
            threshold,
            elevated: false,
        }
    }

    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    pub fn is_elevated(&self) -> bool {
        self.elevated
    }

    /// Recomputes the mode. No hysteresis: the result depends on `scroll_offset` only.
    pub fn update(&mut self, scroll_offset: u64) -> bool {
        self.elevated = scroll_offset > self.threshold;
        self.elevated
    }
}

/// Tracks which section is "current" and keeps navigation links exclusive.
#[derive(Clone, Debug, Default)]
pub struct ActiveSection {
    lookahead: u32,
    sections: Vec<Section>,
    links: Vec<NavLink>,
    current: Option<usize>,
}

impl ActiveSection {
    pub fn new(lookahead: u32) -> Self {
        Self {
            lookahead,
            ..Self::default()
        }
    }

    /// Sections must be added in document order.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn add_link(&mut self, link: NavLink) {
        self.links.push(link);
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn link(&self, element: ElementId) -> Option<&NavLink> {
        self.links.iter().find(|l| l.element == element)
    }

    pub fn current(&self) -> Option<&Section> {
        self.current.map(|i| &self.sections[i])
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current().map(|s| s.id.as_str())
    }

    pub fn active_link(&self) -> Option<&NavLink> {
        self.links.iter().find(|l| l.active)
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Finds the current section without touching link state.
    ///
    /// Linear scan in document order; the last section whose top (minus navbar height and
    /// lookahead) has been scrolled past wins. Sections without geometry are skipped.
    pub fn locate<G: GeometryReader + ?Sized>(
        &self,
        geometry: &G,
        navbar_height: u32,
    ) -> Option<usize> {
        let offset = geometry.scroll_offset();
        let margin = navbar_height as u64 + self.lookahead as u64;
        let mut current = None;
        for (i, section) in self.sections.iter().enumerate() {
            let Some(rect) = geometry.element_rect(section.element) else {
                continue;
            };
            if offset >= rect.top.saturating_sub(margin) {
                current = Some(i);
            }
        }
        current
    }

    /// Recomputes the current section and reassigns every link's active flag.
    ///
    /// At most one link ends up active: the first link pointing at the current section. With no
    /// current section, every link is inactive.
    pub fn update<G: GeometryReader + ?Sized>(
        &mut self,
        geometry: &G,
        navbar_height: u32,
    ) -> Option<usize> {
        self.current = self.locate(geometry, navbar_height);
        let current_id = self.current.map(|i| self.sections[i].id.as_str());
        let mut claimed = false;
        for link in &mut self.links {
            let matches = !claimed && current_id == Some(link.target.as_str());
            link.active = matches;
            claimed |= matches;
        }
        self.current
    }

    /// Index of the active link, if any.
    pub fn active_link_index(&self) -> Option<usize> {
        self.links.iter().position(|l| l.active)
    }
}

/// The two scroll-derived projections: navbar elevation and the active section.
#[derive(Clone, Debug)]
pub struct ScrollStateMachine {
    navbar_element: Option<ElementId>,
    navbar: NavbarElevation,
    sections: ActiveSection,
}

impl ScrollStateMachine {
    pub fn new(options: &SyncOptions, navbar_element: Option<ElementId>) -> Self {
        Self {
            navbar_element,
            navbar: NavbarElevation::new(options.navbar_elevation_threshold),
            sections: ActiveSection::new(options.section_lookahead),
        }
    }

    pub fn navbar_element(&self) -> Option<ElementId> {
        self.navbar_element
    }

    pub fn navbar(&self) -> &NavbarElevation {
        &self.navbar
    }

    pub fn sections(&self) -> &ActiveSection {
        &self.sections
    }

    pub fn sections_mut(&mut self) -> &mut ActiveSection {
        &mut self.sections
    }

    /// Live navbar height (`0` without a navbar or its geometry).
    pub fn navbar_height<G: GeometryReader + ?Sized>(&self, geometry: &G) -> u32 {
        self.navbar_element
            .and_then(|el| geometry.element_rect(el))
            .map_or(0, |r| r.height)
    }

    /// Recomputes both projections from the current geometry.
    pub fn on_scroll<G: GeometryReader + ?Sized>(&mut self, geometry: &G) -> ScrollProjection {
        let offset = geometry.scroll_offset();
        let navbar_height = self.navbar_height(geometry);
        let elevated = self.navbar.update(offset);
        let active_section = self.sections.update(geometry, navbar_height);
        strace!(offset, elevated, ?active_section, "ScrollStateMachine::on_scroll");
        ScrollProjection {
            offset,
            elevated,
            active_section,
            active_link: self.sections.active_link_index(),
        }
    }

    /// Scroll offset that puts section `id` right below the navbar.
    ///
    /// Returns `None` for unknown sections or sections without geometry.
    pub fn scroll_target<G: GeometryReader + ?Sized>(&self, id: &str, geometry: &G) -> Option<u64> {
        let section = self.sections.section(id)?;
        let rect = geometry.element_rect(section.element)?;
        Some(rect.top.saturating_sub(self.navbar_height(geometry) as u64))
    }
}
