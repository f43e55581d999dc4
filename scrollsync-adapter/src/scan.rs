use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use scrollsync::{DeferredImage, ElementId, NavLink, Section};

/// How the initialization scan recognizes the page's parts.
///
/// `Default` matches the reference page markup.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Selectors {
    pub navbar_class: String,
    pub menu_id: String,
    pub menu_toggle_id: String,
    pub nav_link_class: String,
    /// Tag names match ASCII case-insensitively, so `"SECTION"` from an HTML DOM works too.
    pub body_tag: String,
    pub section_tag: String,
    pub image_tag: String,
    /// Sections with this class are never reveal-animated.
    pub hero_class: String,
    /// Elements with this class inside the hero get the load-time entrance animation.
    pub hero_item_class: String,
    /// Card-like blocks that are reveal-animated.
    pub card_classes: Vec<String>,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            navbar_class: "navbar".to_string(),
            menu_id: "navMenu".to_string(),
            menu_toggle_id: "hamburger".to_string(),
            nav_link_class: "nav-link".to_string(),
            body_tag: "body".to_string(),
            section_tag: "section".to_string(),
            image_tag: "img".to_string(),
            hero_class: "hero".to_string(),
            hero_item_class: "fade-in".to_string(),
            card_classes: vec![
                "skill-card".to_string(),
                "project-card".to_string(),
                "timeline-item".to_string(),
                "contact-item".to_string(),
                "education-card".to_string(),
            ],
        }
    }
}

/// One host node, as reported by the adapter's document walk (in document order).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanNode<'a> {
    pub element: ElementId,
    pub tag: &'a str,
    pub id: Option<&'a str>,
    pub classes: &'a [&'a str],
    pub href: Option<&'a str>,
    pub text: &'a str,
    /// Deferred image source (`data-src`).
    pub pending_source: Option<&'a str>,
    /// The node is a descendant of the hero section.
    pub in_hero: bool,
}

impl<'a> ScanNode<'a> {
    pub fn new(element: ElementId, tag: &'a str) -> Self {
        Self {
            element,
            tag,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_classes(mut self, classes: &'a [&'a str]) -> Self {
        self.classes = classes;
        self
    }

    pub fn with_href(mut self, href: &'a str) -> Self {
        self.href = Some(href);
        self
    }

    pub fn with_text(mut self, text: &'a str) -> Self {
        self.text = text;
        self
    }

    pub fn with_pending_source(mut self, source: &'a str) -> Self {
        self.pending_source = Some(source);
        self
    }

    pub fn in_hero(mut self) -> Self {
        self.in_hero = true;
        self
    }

    fn is_tag(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }
}

/// A `mailto:` link whose click copies the address instead of navigating.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmailLink {
    pub element: ElementId,
    pub address: String,
    pub href: String,
}

/// The element sets the page controller works on, collected once at document-ready.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageLayout {
    pub body: Option<ElementId>,
    pub navbar: Option<ElementId>,
    pub menu: Option<ElementId>,
    pub menu_toggle: Option<ElementId>,
    /// Every section, hero included, in document order.
    pub sections: Vec<Section>,
    pub nav_links: Vec<NavLink>,
    /// Reveal-animated elements, in document order.
    pub animated: Vec<ElementId>,
    pub hero: Vec<ElementId>,
    pub images: Vec<DeferredImage>,
    pub email_links: Vec<EmailLink>,
}

impl PageLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies `nodes` (in document order) into a layout.
    pub fn scan<'a>(selectors: &Selectors, nodes: impl IntoIterator<Item = ScanNode<'a>>) -> Self {
        let mut layout = Self::default();
        for node in nodes {
            layout.classify(selectors, &node);
        }
        pdebug!(
            sections = layout.sections.len(),
            nav_links = layout.nav_links.len(),
            animated = layout.animated.len(),
            images = layout.images.len(),
            "PageLayout::scan"
        );
        layout
    }

    fn classify(&mut self, selectors: &Selectors, node: &ScanNode<'_>) {
        let element = node.element;
        if node.is_tag(&selectors.body_tag) {
            self.body.get_or_insert(element);
        }
        if self.navbar.is_none() && node.has_class(&selectors.navbar_class) {
            self.navbar = Some(element);
        }
        if node.id == Some(selectors.menu_id.as_str()) {
            self.menu.get_or_insert(element);
        }
        if node.id == Some(selectors.menu_toggle_id.as_str()) {
            self.menu_toggle.get_or_insert(element);
        }
        if node.has_class(&selectors.nav_link_class) {
            if let Some(link) = node.href.and_then(|href| NavLink::from_href(element, href)) {
                self.nav_links.push(link);
            }
        }

        let is_section = node.is_tag(&selectors.section_tag);
        if is_section {
            // Sections without an id still take part; they just never match a link.
            self.sections
                .push(Section::new(node.id.unwrap_or_default(), element));
        }
        let animated = (is_section && !node.has_class(&selectors.hero_class))
            || selectors.card_classes.iter().any(|c| node.has_class(c));
        if animated {
            self.animated.push(element);
        }
        if node.in_hero && node.has_class(&selectors.hero_item_class) {
            self.hero.push(element);
        }

        if node.is_tag(&selectors.image_tag) {
            if let Some(source) = node.pending_source {
                self.images.push(DeferredImage::new(element, source));
            }
        }
        if let Some(href) = node.href.filter(|h| h.starts_with("mailto:")) {
            self.email_links.push(EmailLink {
                element,
                address: node.text.trim().to_string(),
                href: href.to_string(),
            });
        }
    }
}
