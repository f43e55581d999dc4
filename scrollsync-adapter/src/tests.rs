use crate::*;

use std::collections::HashMap;
use std::string::{String, ToString};
use std::vec;
use std::vec::Vec;

use scrollsync::{
    ElementId, ElementRect, HeroAnimation, IntersectionEntry, MotionPreference, NotificationId,
    NotificationPhase, RevealStyle, ScrollBehavior, ScrollRequest, StaticGeometry, SyncOptions,
    Viewport, ViewportObserver,
};

const BODY: ElementId = 1;
const NAVBAR: ElementId = 2;
const MENU: ElementId = 3;
const TOGGLE: ElementId = 4;
const LINKS: [ElementId; 5] = [10, 11, 12, 13, 14];
const MISSING_LINK: ElementId = 15;
const SECTIONS: [ElementId; 5] = [20, 21, 22, 23, 24];
const HERO_ITEM: ElementId = 30;
const CARD_NEAR: ElementId = 40;
const CARD_FAR: ElementId = 41;
const IMG_NEAR: ElementId = 50;
const IMG_FAR: ElementId = 51;
const EMAIL: ElementId = 60;
const BACK_TO_TOP: ElementId = 9_000;

#[derive(Clone, Debug, PartialEq)]
enum Op {
    Class(ElementId, String, bool),
    Reveal(ElementId, RevealStyle),
    Attr(ElementId, String, Option<String>),
    InsertBackToTop(String),
    ControlVisible(ElementId, bool),
    InsertNotification(NotificationId, String),
    Phase(NotificationId, NotificationPhase),
    RemoveNotification(NotificationId),
    ScrollTo(ScrollRequest),
    Navigate(String),
    Style(String),
    RootScroll(ScrollBehavior),
    Animation(HeroAnimation),
}

#[derive(Default)]
struct RecordingDocument {
    ops: Vec<Op>,
    classes: HashMap<(ElementId, String), bool>,
    attrs: HashMap<(ElementId, String), String>,
    styles: HashMap<ElementId, RevealStyle>,
    control_visible: Option<bool>,
    notifications: Vec<(NotificationId, String)>,
}

impl RecordingDocument {
    fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.classes
            .get(&(element, class.to_string()))
            .copied()
            .unwrap_or(false)
    }

    fn attr(&self, element: ElementId, name: &str) -> Option<&str> {
        self.attrs
            .get(&(element, name.to_string()))
            .map(String::as_str)
    }

    fn count(&self, f: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| f(op)).count()
    }

    fn scrolls(&self) -> Vec<ScrollRequest> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::ScrollTo(r) => Some(*r),
                _ => None,
            })
            .collect()
    }
}

impl Document for RecordingDocument {
    fn set_class(&mut self, element: ElementId, class: &str, on: bool) {
        self.classes.insert((element, class.to_string()), on);
        self.ops.push(Op::Class(element, class.to_string(), on));
    }

    fn set_reveal_style(&mut self, element: ElementId, style: RevealStyle) {
        self.styles.insert(element, style);
        self.ops.push(Op::Reveal(element, style));
    }

    fn set_attribute(&mut self, element: ElementId, name: &str, value: Option<&str>) {
        match value {
            Some(v) => {
                self.attrs.insert((element, name.to_string()), v.to_string());
            }
            None => {
                self.attrs.remove(&(element, name.to_string()));
            }
        }
        self.ops.push(Op::Attr(
            element,
            name.to_string(),
            value.map(ToString::to_string),
        ));
    }

    fn insert_back_to_top(&mut self, label: &str) -> ElementId {
        self.control_visible = Some(false);
        self.ops.push(Op::InsertBackToTop(label.to_string()));
        BACK_TO_TOP
    }

    fn set_control_visible(&mut self, element: ElementId, visible: bool) {
        self.control_visible = Some(visible);
        self.ops.push(Op::ControlVisible(element, visible));
    }

    fn insert_notification(&mut self, id: NotificationId, message: &str) {
        self.notifications.push((id, message.to_string()));
        self.ops
            .push(Op::InsertNotification(id, message.to_string()));
    }

    fn set_notification_phase(&mut self, id: NotificationId, phase: NotificationPhase) {
        self.ops.push(Op::Phase(id, phase));
    }

    fn remove_notification(&mut self, id: NotificationId) {
        self.notifications.retain(|(n, _)| *n != id);
        self.ops.push(Op::RemoveNotification(id));
    }

    fn scroll_to(&mut self, request: ScrollRequest) {
        self.ops.push(Op::ScrollTo(request));
    }

    fn navigate(&mut self, href: &str) {
        self.ops.push(Op::Navigate(href.to_string()));
    }

    fn inject_style(&mut self, css: &str) {
        self.ops.push(Op::Style(css.to_string()));
    }

    fn set_root_scroll_behavior(&mut self, behavior: ScrollBehavior) {
        self.ops.push(Op::RootScroll(behavior));
    }

    fn set_animation(&mut self, animation: HeroAnimation) {
        self.ops.push(Op::Animation(animation));
    }
}

#[derive(Default)]
struct FakeClipboard {
    fail: Option<ClipboardError>,
    written: Vec<String>,
}

impl Clipboard for FakeClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if let Some(err) = self.fail.clone() {
            return Err(err);
        }
        self.written.push(text.to_string());
        Ok(())
    }
}

const SECTION_IDS: [&str; 5] = ["home", "about", "skills", "projects", "contact"];
const HREFS: [&str; 5] = ["#home", "#about", "#skills", "#projects", "#contact"];

fn layout() -> PageLayout {
    let mut nodes = vec![
        ScanNode::new(BODY, "body"),
        ScanNode::new(NAVBAR, "nav").with_classes(&["navbar"]),
        ScanNode::new(MENU, "ul").with_id("navMenu").with_classes(&["nav-menu"]),
        ScanNode::new(TOGGLE, "div").with_id("hamburger").with_classes(&["hamburger"]),
    ];
    for (i, href) in HREFS.iter().enumerate() {
        nodes.push(
            ScanNode::new(LINKS[i], "a")
                .with_classes(&["nav-link"])
                .with_href(href),
        );
    }
    nodes.push(
        ScanNode::new(MISSING_LINK, "a")
            .with_classes(&["nav-link"])
            .with_href("#missing"),
    );
    for (i, id) in SECTION_IDS.iter().enumerate() {
        let node = ScanNode::new(SECTIONS[i], "section").with_id(id);
        nodes.push(if i == 0 {
            node.with_classes(&["hero"])
        } else {
            node
        });
        if i == 0 {
            nodes.push(
                ScanNode::new(HERO_ITEM, "h1")
                    .with_classes(&["hero-title", "fade-in"])
                    .in_hero(),
            );
        }
    }
    nodes.push(ScanNode::new(CARD_NEAR, "div").with_classes(&["skill-card"]));
    nodes.push(ScanNode::new(CARD_FAR, "div").with_classes(&["project-card"]));
    nodes.push(ScanNode::new(IMG_NEAR, "img").with_pending_source("img/me.jpg"));
    nodes.push(ScanNode::new(IMG_FAR, "img").with_pending_source("img/far.jpg"));
    nodes.push(
        ScanNode::new(EMAIL, "a")
            .with_href("mailto:me@example.com")
            .with_text("  me@example.com \n"),
    );
    PageLayout::scan(&Selectors::default(), nodes)
}

fn geometry() -> StaticGeometry {
    let mut g = StaticGeometry::new(Viewport::new(1280, 800))
        .with_element(NAVBAR, ElementRect::new(0, 64))
        .with_element(HERO_ITEM, ElementRect::new(200, 50))
        .with_element(CARD_NEAR, ElementRect::new(500, 200))
        .with_element(CARD_FAR, ElementRect::new(2_000, 200))
        .with_element(IMG_NEAR, ElementRect::new(300, 200))
        .with_element(IMG_FAR, ElementRect::new(20_000, 200));
    for (i, &element) in SECTIONS.iter().enumerate() {
        g.set_element(element, ElementRect::new(64 + 600 * i as u64, 600));
    }
    g
}

fn page() -> Page {
    Page::new(PageOptions::default(), layout())
}

fn ready() -> (Page, RecordingDocument, StaticGeometry) {
    let mut page = page();
    let mut doc = RecordingDocument::default();
    let geometry = geometry();
    assert!(page.init(&mut doc, &geometry, MotionPreference::NoPreference));
    (page, doc, geometry)
}

#[test]
fn scan_classifies_reference_markup() {
    let layout = layout();
    assert_eq!(layout.body, Some(BODY));
    assert_eq!(layout.navbar, Some(NAVBAR));
    assert_eq!(layout.menu, Some(MENU));
    assert_eq!(layout.menu_toggle, Some(TOGGLE));
    assert_eq!(layout.nav_links.len(), 6);
    assert_eq!(layout.nav_links[1].target, "about");
    let ids: Vec<&str> = layout.sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, SECTION_IDS.to_vec());
    // The hero section is not reveal-animated.
    assert_eq!(
        layout.animated,
        vec![SECTIONS[1], SECTIONS[2], SECTIONS[3], SECTIONS[4], CARD_NEAR, CARD_FAR]
    );
    assert_eq!(layout.hero, vec![HERO_ITEM]);
    assert_eq!(layout.images.len(), 2);
    assert_eq!(layout.email_links.len(), 1);
    assert_eq!(layout.email_links[0].address, "me@example.com");
    assert_eq!(layout.email_links[0].href, "mailto:me@example.com");
}

#[test]
fn scan_matches_uppercase_html_tag_names() {
    let nodes = [
        ScanNode::new(BODY, "BODY"),
        ScanNode::new(SECTIONS[0], "SECTION").with_id("home"),
        ScanNode::new(IMG_NEAR, "IMG").with_pending_source("img/me.jpg"),
        ScanNode::new(IMG_FAR, "Img").with_pending_source("img/far.jpg"),
    ];
    let layout = PageLayout::scan(&Selectors::default(), nodes);
    assert_eq!(layout.body, Some(BODY));
    assert_eq!(layout.sections.len(), 1);
    assert_eq!(layout.sections[0].id, "home");
    assert_eq!(layout.animated, vec![SECTIONS[0]]);
    let images: Vec<ElementId> = layout.images.iter().map(|i| i.element).collect();
    assert_eq!(images, vec![IMG_NEAR, IMG_FAR]);
}

#[test]
fn scan_uses_configured_tags() {
    let selectors = Selectors {
        section_tag: "article".to_string(),
        image_tag: "picture".to_string(),
        ..Selectors::default()
    };
    let nodes = [
        ScanNode::new(SECTIONS[0], "section").with_id("home"),
        ScanNode::new(SECTIONS[1], "ARTICLE").with_id("about"),
        ScanNode::new(IMG_NEAR, "img").with_pending_source("img/me.jpg"),
        ScanNode::new(IMG_FAR, "picture").with_pending_source("img/far.jpg"),
    ];
    let layout = PageLayout::scan(&selectors, nodes);
    let ids: Vec<&str> = layout.sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["about"]);
    assert_eq!(layout.images.len(), 1);
    assert_eq!(layout.images[0].element, IMG_FAR);
}

#[test]
fn init_hides_targets_creates_control_and_syncs_once() {
    let (mut page, mut doc, geometry) = ready();

    assert_eq!(doc.count(|op| matches!(op, Op::Style(_))), 1);
    assert!(doc.ops.contains(&Op::Style(MENU_TOGGLE_STYLE.to_string())));
    assert_eq!(
        doc.ops.iter().position(|op| *op == Op::Reveal(SECTIONS[1], RevealStyle::hidden(40, 0))),
        Some(1)
    );
    assert_eq!(
        page.reveal().style(CARD_FAR),
        Some(RevealStyle::hidden(40, 250))
    );
    assert!(doc.ops.contains(&Op::InsertBackToTop(BACK_TO_TOP_LABEL.to_string())));
    assert_eq!(page.back_to_top_element(), Some(BACK_TO_TOP));
    assert_eq!(doc.control_visible, Some(false));

    // Offset 0: the first section qualifies immediately.
    assert!(!doc.has_class(NAVBAR, "scrolled"));
    assert!(doc.has_class(LINKS[0], "active"));
    assert!(LINKS[1..].iter().all(|&l| !doc.has_class(l, "active")));

    // Initial intersection entries: the visible card reveals, the visible image loads.
    assert!(page.reveal().is_revealed(CARD_NEAR));
    assert!(doc.styles.get(&CARD_NEAR).is_some_and(|s| s.is_revealed()));
    assert!(!page.reveal().is_revealed(CARD_FAR));
    assert_eq!(doc.attr(IMG_NEAR, "src"), Some("img/me.jpg"));
    assert_eq!(doc.attr(IMG_FAR, "src"), None);

    let ops = doc.ops.len();
    assert!(!page.init(&mut doc, &geometry, MotionPreference::Reduce));
    assert_eq!(doc.ops.len(), ops);
    assert_eq!(page.motion(), MotionPreference::NoPreference);
}

#[test]
fn scroll_drives_navbar_links_and_back_to_top() {
    let (mut page, mut doc, mut geometry) = ready();

    geometry.set_scroll_offset(10);
    page.on_scroll(&mut doc, &geometry);
    assert!(!doc.has_class(NAVBAR, "scrolled"));

    geometry.set_scroll_offset(11);
    page.on_scroll(&mut doc, &geometry);
    assert!(doc.has_class(NAVBAR, "scrolled"));

    geometry.set_scroll_offset(400);
    page.on_scroll(&mut doc, &geometry);
    assert_eq!(doc.control_visible, Some(false));

    geometry.set_scroll_offset(401);
    page.on_scroll(&mut doc, &geometry);
    assert_eq!(doc.control_visible, Some(true));

    // Third section threshold: 1264 - 64 - 100.
    geometry.set_scroll_offset(1_100);
    let projection = page.on_scroll(&mut doc, &geometry);
    assert_eq!(projection.active_link, Some(2));
    let active: Vec<ElementId> = LINKS
        .iter()
        .copied()
        .filter(|&l| doc.has_class(l, "active"))
        .collect();
    assert_eq!(active, vec![LINKS[2]]);
    assert_eq!(page.state().scroll, projection);
}

#[test]
fn scroll_reassigns_flags_even_when_unchanged() {
    let (mut page, mut doc, geometry) = ready();
    let before = doc.count(|op| matches!(op, Op::Class(NAVBAR, _, _)));
    page.on_scroll(&mut doc, &geometry);
    page.on_scroll(&mut doc, &geometry);
    let after = doc.count(|op| matches!(op, Op::Class(NAVBAR, _, _)));
    assert_eq!(after, before + 2);
    assert!(!doc.has_class(NAVBAR, "scrolled"));
}

#[test]
fn native_reveal_entries_are_monotonic() {
    let (mut page, mut doc, _) = ready();
    assert_eq!(
        page.on_reveal_intersection(&mut doc, [IntersectionEntry::new(CARD_FAR, true, 0.4)]),
        1
    );
    assert_eq!(
        page.on_reveal_intersection(
            &mut doc,
            [
                IntersectionEntry::new(CARD_FAR, false, 0.0),
                IntersectionEntry::new(CARD_FAR, true, 1.0),
            ]
        ),
        0
    );
    assert!(page.reveal().is_revealed(CARD_FAR));
    assert_eq!(
        doc.styles.get(&CARD_FAR),
        Some(&RevealStyle::revealed(250))
    );
    // Entries for unknown elements are ignored.
    assert_eq!(
        page.on_reveal_intersection(&mut doc, [IntersectionEntry::new(IMG_FAR, true, 1.0)]),
        0
    );
}

#[test]
fn native_image_entries_load_once() {
    let (mut page, mut doc, _) = ready();
    assert_eq!(
        page.on_image_intersection(&mut doc, [IntersectionEntry::new(IMG_FAR, false, 0.0)]),
        0
    );
    assert_eq!(doc.attr(IMG_FAR, "src"), None);

    assert_eq!(
        page.on_image_intersection(&mut doc, [IntersectionEntry::new(IMG_FAR, true, 0.2)]),
        1
    );
    assert_eq!(doc.attr(IMG_FAR, "src"), Some("img/far.jpg"));
    assert!(doc.ops.contains(&Op::Attr(IMG_FAR, "data-src".to_string(), None)));
    assert!(!page.images().is_observing(IMG_FAR));

    assert_eq!(
        page.on_image_intersection(&mut doc, [IntersectionEntry::new(IMG_FAR, true, 1.0)]),
        0
    );
    let state = page.state();
    assert_eq!(state.images_loaded, 2);
    assert_eq!(state.images_pending, 0);
}

#[test]
fn resize_to_desktop_closes_open_menu() {
    let (mut page, mut doc, mut geometry) = ready();
    geometry.set_viewport(Viewport::new(500, 900));
    assert!(page.on_menu_toggle(&mut doc));
    assert!(doc.has_class(MENU, "active"));
    assert!(doc.has_class(TOGGLE, "active"));

    page.on_resize(0);
    geometry.set_viewport(Viewport::new(1_024, 768));
    page.on_resize(100);
    assert_eq!(page.next_deadline(), Some(350));

    assert_eq!(page.tick(&mut doc, &geometry, 200), None);
    assert!(page.menu().is_open());

    let settled = page.tick(&mut doc, &geometry, 350);
    assert!(settled.is_some_and(|s| s.desktop && s.closed_menu));
    assert!(!page.menu().is_open());
    assert!(!doc.has_class(MENU, "active"));
    assert!(!doc.has_class(TOGGLE, "active"));
    assert_eq!(page.next_deadline(), None);
}

#[test]
fn nav_link_click_scrolls_below_navbar_and_closes_menu() {
    let (mut page, mut doc, geometry) = ready();
    page.on_menu_toggle(&mut doc);

    let request = page.on_nav_link_click(&mut doc, &geometry, LINKS[1]);
    let expected = ScrollRequest {
        top: 600,
        behavior: ScrollBehavior::Smooth,
    };
    assert_eq!(request, Some(expected));
    assert_eq!(doc.scrolls(), vec![expected]);
    assert!(!page.menu().is_open());
    assert!(!doc.has_class(MENU, "active"));
}

#[test]
fn nav_link_with_missing_target_is_skipped() {
    let (mut page, mut doc, geometry) = ready();
    page.on_menu_toggle(&mut doc);
    assert_eq!(page.on_nav_link_click(&mut doc, &geometry, MISSING_LINK), None);
    assert_eq!(page.on_nav_link_click(&mut doc, &geometry, 12_345), None);
    assert!(doc.scrolls().is_empty());
    assert!(!page.menu().is_open());
}

#[test]
fn reduced_motion_uses_instant_scrolling() {
    let mut page = page();
    let mut doc = RecordingDocument::default();
    let geometry = geometry();
    page.init(&mut doc, &geometry, MotionPreference::Reduce);
    assert!(doc.ops.contains(&Op::RootScroll(ScrollBehavior::Auto)));

    let request = page.on_back_to_top_click(&mut doc);
    assert_eq!(
        request,
        ScrollRequest {
            top: 0,
            behavior: ScrollBehavior::Auto
        }
    );
    assert_eq!(doc.scrolls(), vec![request]);
}

#[test]
fn copy_email_shows_notification_timeline() {
    let (mut page, mut doc, geometry) = ready();
    let mut clipboard = FakeClipboard::default();

    let outcome = page.copy_email(&mut doc, &mut clipboard, EMAIL, 1_000);
    let CopyOutcome::Copied(id) = outcome else {
        panic!("expected a copy, got {outcome:?}");
    };
    assert_eq!(clipboard.written, vec!["me@example.com".to_string()]);
    assert_eq!(
        doc.notifications,
        vec![(id, "Email copied to clipboard!".to_string())]
    );

    let mut now_ms = 1_000;
    while now_ms <= 4_000 {
        page.tick(&mut doc, &geometry, now_ms);
        now_ms += 50;
    }
    let timeline: Vec<&Op> = doc
        .ops
        .iter()
        .filter(|op| {
            matches!(op, Op::InsertNotification(..) | Op::Phase(..) | Op::RemoveNotification(..))
        })
        .collect();
    assert_eq!(
        timeline,
        vec![
            &Op::InsertNotification(id, COPY_NOTIFICATION.to_string()),
            &Op::Phase(id, NotificationPhase::Visible),
            &Op::Phase(id, NotificationPhase::Exiting),
            &Op::RemoveNotification(id),
        ]
    );
    assert!(doc.notifications.is_empty());
    assert!(page.notifications().is_idle());
}

#[test]
fn notification_phases_land_on_their_deadlines() {
    let (mut page, mut doc, geometry) = ready();
    let id = page.notify(&mut doc, "Saved", 0);
    let mut seen = Vec::new();
    while let Some(deadline) = page.next_deadline() {
        let before = doc.ops.len();
        page.tick(&mut doc, &geometry, deadline);
        for op in &doc.ops[before..] {
            seen.push((op.clone(), deadline));
        }
    }
    assert_eq!(
        seen,
        vec![
            (Op::Phase(id, NotificationPhase::Visible), 10),
            (Op::Phase(id, NotificationPhase::Exiting), 2_500),
            (Op::RemoveNotification(id), 2_800),
        ]
    );
}

#[test]
fn clipboard_failure_falls_back_to_mailto() {
    let (mut page, mut doc, _) = ready();
    let mut clipboard = FakeClipboard {
        fail: Some(ClipboardError::Denied),
        ..FakeClipboard::default()
    };
    assert_eq!(
        page.copy_email(&mut doc, &mut clipboard, EMAIL, 0),
        CopyOutcome::FellBack
    );
    assert_eq!(
        doc.ops.last(),
        Some(&Op::Navigate("mailto:me@example.com".to_string()))
    );
    assert!(doc.notifications.is_empty());

    assert_eq!(
        page.copy_email(&mut doc, &mut clipboard, NAVBAR, 0),
        CopyOutcome::Ignored
    );
    assert_eq!(
        page.finish_copy(&mut doc, EMAIL, Err(ClipboardError::Unavailable), 0),
        CopyOutcome::FellBack
    );
}

#[test]
fn load_marks_body_and_starts_hero_once() {
    let (mut page, mut doc, _) = ready();
    assert!(page.on_load(&mut doc));
    assert!(doc.has_class(BODY, "loaded"));
    assert!(doc.ops.contains(&Op::Animation(HeroAnimation {
        element: HERO_ITEM,
        delay_ms: 0
    })));
    assert!(!page.on_load(&mut doc));
    assert_eq!(doc.count(|op| matches!(op, Op::Animation(_))), 1);
}

#[test]
fn custom_options_flow_through_page() {
    let options = PageOptions::default()
        .with_sync(SyncOptions::default().with_back_to_top_threshold(1_000))
        .with_classes(ClassNames {
            elevated: "is-elevated".to_string(),
            ..ClassNames::default()
        });
    let mut page = Page::new(options, layout());
    let mut doc = RecordingDocument::default();
    let geometry = geometry().with_scroll_offset(900);
    page.init(&mut doc, &geometry, MotionPreference::NoPreference);
    assert!(doc.has_class(NAVBAR, "is-elevated"));
    assert_eq!(doc.control_visible, Some(false));
    assert!(!page.state().back_to_top_visible);
}

#[test]
fn clipboard_error_display() {
    assert_eq!(ClipboardError::Denied.to_string(), "clipboard access denied");
    assert_eq!(
        ClipboardError::Other("quota".to_string()).to_string(),
        "clipboard write failed: quota"
    );
}

#[cfg(feature = "serde")]
#[test]
fn page_options_load_from_json() {
    let options: PageOptions = serde_json::from_str(
        r#"{ "sync": { "notification": { "enter_delay_ms": 10, "hold_ms": 1000, "exit_ms": 200, "policy": "Serialize" } }, "classes": { "elevated": "raised" } }"#,
    )
    .unwrap();
    assert_eq!(options.sync.notification.hold_ms, 1_000);
    assert_eq!(options.classes.elevated, "raised");
    assert_eq!(options.classes.active, "active");
}
