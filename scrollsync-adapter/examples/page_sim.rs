// Example: a page controller driven by a simulated host that just logs mutations.
use scrollsync::{
    ElementId, ElementRect, HeroAnimation, MotionPreference, NotificationId, NotificationPhase,
    RevealStyle, ScrollBehavior, ScrollRequest, StaticGeometry, Viewport,
};
use scrollsync_adapter::{
    Clipboard, ClipboardError, Document, Page, PageLayout, PageOptions, ScanNode, Selectors,
};

struct LogDocument;

impl Document for LogDocument {
    fn set_class(&mut self, element: ElementId, class: &str, on: bool) {
        println!("  class #{element} {class}={on}");
    }

    fn set_reveal_style(&mut self, element: ElementId, style: RevealStyle) {
        println!("  reveal #{element} {style:?}");
    }

    fn set_attribute(&mut self, element: ElementId, name: &str, value: Option<&str>) {
        println!("  attr #{element} {name}={value:?}");
    }

    fn insert_back_to_top(&mut self, label: &str) -> ElementId {
        println!("  insert back-to-top ({label})");
        999
    }

    fn set_control_visible(&mut self, element: ElementId, visible: bool) {
        println!("  control #{element} visible={visible}");
    }

    fn insert_notification(&mut self, id: NotificationId, message: &str) {
        println!("  notification #{id} inserted: {message}");
    }

    fn set_notification_phase(&mut self, id: NotificationId, phase: NotificationPhase) {
        println!("  notification #{id} {phase:?}");
    }

    fn remove_notification(&mut self, id: NotificationId) {
        println!("  notification #{id} removed");
    }

    fn scroll_to(&mut self, request: ScrollRequest) {
        println!("  scroll to {} ({:?})", request.top, request.behavior);
    }

    fn navigate(&mut self, href: &str) {
        println!("  navigate {href}");
    }

    fn inject_style(&mut self, css: &str) {
        println!("  inject style ({} bytes)", css.len());
    }

    fn set_root_scroll_behavior(&mut self, behavior: ScrollBehavior) {
        println!("  root scroll behavior {behavior:?}");
    }

    fn set_animation(&mut self, animation: HeroAnimation) {
        println!("  animate #{} after {}ms", animation.element, animation.delay_ms);
    }
}

struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Ok(())
    }
}

fn main() {
    let nodes = [
        ScanNode::new(1, "body"),
        ScanNode::new(2, "nav").with_classes(&["navbar"]),
        ScanNode::new(3, "a").with_classes(&["nav-link"]).with_href("#about"),
        ScanNode::new(4, "section").with_id("home").with_classes(&["hero"]),
        ScanNode::new(5, "h1").with_classes(&["fade-in"]).in_hero(),
        ScanNode::new(6, "section").with_id("about"),
        ScanNode::new(7, "img").with_pending_source("img/portrait.jpg"),
        ScanNode::new(8, "a")
            .with_href("mailto:hello@example.com")
            .with_text("hello@example.com"),
    ];
    let layout = PageLayout::scan(&Selectors::default(), nodes);
    let mut page = Page::new(PageOptions::default(), layout);

    let mut geometry = StaticGeometry::new(Viewport::new(1280, 800))
        .with_element(2, ElementRect::new(0, 64))
        .with_element(4, ElementRect::new(64, 800))
        .with_element(5, ElementRect::new(300, 80))
        .with_element(6, ElementRect::new(864, 900))
        .with_element(7, ElementRect::new(1_200, 400));
    let mut doc = LogDocument;

    println!("document ready");
    page.init(&mut doc, &geometry, MotionPreference::NoPreference);
    println!("load");
    page.on_load(&mut doc);

    println!("scroll to 700");
    geometry.set_scroll_offset(700);
    page.on_scroll(&mut doc, &geometry);
    page.sync_intersections(&mut doc, &geometry);

    println!("copy email");
    page.copy_email(&mut doc, &mut SystemClipboard, 8, 0);
    while let Some(deadline) = page.next_deadline() {
        println!("tick {deadline}ms");
        page.tick(&mut doc, &geometry, deadline);
    }

    println!("state: {:?}", page.state());
}
