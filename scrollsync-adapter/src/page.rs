use alloc::vec::Vec;

use scrollsync::{
    BackToTop, ElementId, GeometryReader, HeroEntrance, IntersectionEntry, LazyImageLoader,
    LoadImage, MobileMenu, MotionPreference, NotificationChange, NotificationId,
    NotificationPhase, NotificationQueue, ResizeReactor, ResizeSettled, Reveal, RevealEngine,
    ScheduledTask, ScrollProjection, ScrollRequest, ScrollStateMachine, SyncOptions, SyncState,
    ViewportObserver,
};

use crate::style::{BACK_TO_TOP_LABEL, COPY_NOTIFICATION, MENU_TOGGLE_STYLE};
use crate::{ClassNames, Clipboard, ClipboardError, Document, EmailLink, PageLayout};

/// Everything the page controller can be configured with.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageOptions {
    pub sync: SyncOptions,
    pub classes: ClassNames,
}

impl PageOptions {
    pub fn with_sync(mut self, sync: SyncOptions) -> Self {
        self.sync = sync;
        self
    }

    pub fn with_classes(mut self, classes: ClassNames) -> Self {
        self.classes = classes;
        self
    }
}

/// Result of an email link click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CopyOutcome {
    /// The address was copied and a confirmation notification shown.
    Copied(NotificationId),
    /// The clipboard failed; the page navigated to the `mailto:` target instead.
    FellBack,
    /// The element is not a known email link.
    Ignored,
}

/// The page-level context object: owns every component and applies their output to a host
/// [`Document`].
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `init` on document-ready and `on_load` once every resource has loaded
/// - `on_scroll` / `on_resize` / the intersection hooks when the host reports them
/// - the click hooks for the menu toggle, navigation links, back-to-top and email links
/// - `tick(now_ms)` from a timer, ideally at `next_deadline()`
#[derive(Clone, Debug)]
pub struct Page {
    options: PageOptions,
    motion: MotionPreference,
    scroll: ScrollStateMachine,
    reveal: RevealEngine,
    images: LazyImageLoader,
    hero: HeroEntrance,
    back_to_top: BackToTop,
    back_to_top_element: Option<ElementId>,
    notifications: NotificationQueue,
    resize: ResizeReactor,
    menu: MobileMenu,
    menu_element: Option<ElementId>,
    menu_toggle: Option<ElementId>,
    body: Option<ElementId>,
    email_links: Vec<EmailLink>,
    last_projection: ScrollProjection,
    initialized: bool,
}

impl Page {
    pub fn new(options: PageOptions, layout: PageLayout) -> Self {
        let sync = options.sync;
        let mut scroll = ScrollStateMachine::new(&sync, layout.navbar);
        for section in layout.sections {
            scroll.sections_mut().add_section(section);
        }
        for link in layout.nav_links {
            scroll.sections_mut().add_link(link);
        }

        let mut reveal = RevealEngine::new(sync.reveal);
        for element in layout.animated {
            reveal.register(element);
        }
        let mut images = LazyImageLoader::new(sync.lazy_image);
        for image in layout.images {
            images.register(image);
        }
        let mut hero = HeroEntrance::new(sync.hero_stagger_ms);
        for element in layout.hero {
            hero.register(element);
        }

        Self {
            scroll,
            reveal,
            images,
            hero,
            back_to_top: BackToTop::new(sync.back_to_top_threshold),
            back_to_top_element: None,
            notifications: NotificationQueue::new(sync.notification),
            resize: ResizeReactor::new(sync.resize_debounce_ms, sync.mobile_breakpoint),
            menu: MobileMenu::new(),
            menu_element: layout.menu,
            menu_toggle: layout.menu_toggle,
            body: layout.body,
            email_links: layout.email_links,
            motion: MotionPreference::NoPreference,
            last_projection: ScrollProjection::default(),
            initialized: false,
            options,
        }
    }

    pub fn options(&self) -> &PageOptions {
        &self.options
    }

    pub fn scroll(&self) -> &ScrollStateMachine {
        &self.scroll
    }

    pub fn reveal(&self) -> &RevealEngine {
        &self.reveal
    }

    pub fn images(&self) -> &LazyImageLoader {
        &self.images
    }

    pub fn hero(&self) -> &HeroEntrance {
        &self.hero
    }

    pub fn back_to_top(&self) -> &BackToTop {
        &self.back_to_top
    }

    pub fn back_to_top_element(&self) -> Option<ElementId> {
        self.back_to_top_element
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn menu(&self) -> &MobileMenu {
        &self.menu
    }

    pub fn email_links(&self) -> &[EmailLink] {
        &self.email_links
    }

    pub fn motion(&self) -> MotionPreference {
        self.motion
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Document-ready setup. Runs once; later calls return `false` and do nothing.
    ///
    /// Injects the menu toggle style, hides every reveal target, creates the back-to-top
    /// control, applies the motion preference, then syncs scroll state and delivers the
    /// initial intersection entries.
    pub fn init<D: Document + ?Sized, G: GeometryReader + ?Sized>(
        &mut self,
        doc: &mut D,
        geometry: &G,
        motion: MotionPreference,
    ) -> bool {
        if self.initialized {
            return false;
        }
        self.initialized = true;
        self.motion = motion;
        pdebug!(
            reveal = self.reveal.observed_len(),
            images = self.images.observed_len(),
            ?motion,
            "Page::init"
        );

        doc.inject_style(MENU_TOGGLE_STYLE);
        for target in self.reveal.targets() {
            if let Some(style) = self.reveal.style(target.element) {
                doc.set_reveal_style(target.element, style);
            }
        }
        self.back_to_top_element = Some(doc.insert_back_to_top(BACK_TO_TOP_LABEL));
        if motion == MotionPreference::Reduce {
            doc.set_root_scroll_behavior(motion.scroll_behavior());
        }

        self.on_scroll(doc, geometry);
        self.sync_intersections(doc, geometry);
        true
    }

    /// Full-load hook: marks the body loaded and starts the hero entrance, once.
    pub fn on_load<D: Document + ?Sized>(&mut self, doc: &mut D) -> bool {
        if self.hero.is_started() {
            return false;
        }
        if let Some(body) = self.body {
            doc.set_class(body, &self.options.classes.loaded, true);
        }
        self.hero.start(|animation| doc.set_animation(animation))
    }

    /// Scroll hook: recomputes navbar elevation, the active link and back-to-top visibility,
    /// and reassigns every flag.
    pub fn on_scroll<D: Document + ?Sized, G: GeometryReader + ?Sized>(
        &mut self,
        doc: &mut D,
        geometry: &G,
    ) -> ScrollProjection {
        let projection = self.scroll.on_scroll(geometry);
        let classes = &self.options.classes;
        if let Some(navbar) = self.scroll.navbar_element() {
            doc.set_class(navbar, &classes.elevated, projection.elevated);
        }
        for link in self.scroll.sections().links() {
            doc.set_class(link.element, &classes.active, link.is_active());
        }

        let visible = self.back_to_top.update(projection.offset);
        if let Some(control) = self.back_to_top_element {
            doc.set_control_visible(control, visible);
        }
        self.last_projection = projection;
        projection
    }

    /// Evaluates both observers against `geometry`, for hosts without a native observer.
    pub fn sync_intersections<D: Document + ?Sized, G: GeometryReader + ?Sized>(
        &mut self,
        doc: &mut D,
        geometry: &G,
    ) {
        self.reveal
            .sync(geometry, &mut |reveal| apply_reveal(doc, reveal));
        self.images.sync(geometry, &mut |load| apply_load(doc, load));
    }

    /// Entries from the host's reveal observer. Returns the number of newly revealed elements.
    pub fn on_reveal_intersection<D: Document + ?Sized>(
        &mut self,
        doc: &mut D,
        entries: impl IntoIterator<Item = IntersectionEntry>,
    ) -> usize {
        let mut revealed = 0;
        for entry in entries {
            if let Some(reveal) = self.reveal.on_intersection(entry) {
                apply_reveal(doc, reveal);
                revealed += 1;
            }
        }
        revealed
    }

    /// Entries from the host's image observer. Returns the number of images that started
    /// loading.
    pub fn on_image_intersection<D: Document + ?Sized>(
        &mut self,
        doc: &mut D,
        entries: impl IntoIterator<Item = IntersectionEntry>,
    ) -> usize {
        let mut loaded = 0;
        for entry in entries {
            if let Some(load) = self.images.on_intersection(entry) {
                apply_load(doc, load);
                loaded += 1;
            }
        }
        loaded
    }

    /// Resize hook: (re)arms the debounced settle.
    pub fn on_resize(&mut self, now_ms: u64) -> ScheduledTask {
        self.resize.on_resize(now_ms)
    }

    /// Timer hook: settles pending resizes and advances notifications.
    pub fn tick<D: Document + ?Sized, G: GeometryReader + ?Sized>(
        &mut self,
        doc: &mut D,
        geometry: &G,
        now_ms: u64,
    ) -> Option<ResizeSettled> {
        let settled = self.resize.tick(now_ms, geometry, &mut self.menu);
        if settled.is_some_and(|s| s.desktop) {
            self.apply_menu(doc);
        }
        self.notifications
            .tick(now_ms, |change| apply_notification(doc, change));
        settled
    }

    /// The earliest time at which `tick` has work to do.
    pub fn next_deadline(&self) -> Option<u64> {
        let resize = self.resize.pending().map(|t| t.due_ms());
        match (resize, self.notifications.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Menu toggle click. Returns the new open state.
    pub fn on_menu_toggle<D: Document + ?Sized>(&mut self, doc: &mut D) -> bool {
        let open = self.menu.toggle();
        self.apply_menu(doc);
        open
    }

    /// Navigation link click: closes the mobile menu, then scrolls the target section right
    /// below the navbar.
    ///
    /// Returns `None` (and does not scroll) for unknown links or missing targets.
    pub fn on_nav_link_click<D: Document + ?Sized, G: GeometryReader + ?Sized>(
        &mut self,
        doc: &mut D,
        geometry: &G,
        link: ElementId,
    ) -> Option<ScrollRequest> {
        self.menu.close();
        self.apply_menu(doc);

        let target = &self.scroll.sections().link(link)?.target;
        let Some(top) = self.scroll.scroll_target(target, geometry) else {
            pdebug!(link, target = target.as_str(), "Page: nav link target missing");
            return None;
        };
        let request = ScrollRequest {
            top,
            behavior: self.motion.scroll_behavior(),
        };
        doc.scroll_to(request);
        Some(request)
    }

    pub fn on_back_to_top_click<D: Document + ?Sized>(&mut self, doc: &mut D) -> ScrollRequest {
        let request = self.back_to_top.activate(self.motion.scroll_behavior());
        doc.scroll_to(request);
        request
    }

    /// Shows a transient notification.
    pub fn notify<D: Document + ?Sized>(
        &mut self,
        doc: &mut D,
        message: &str,
        now_ms: u64,
    ) -> NotificationId {
        self.notifications
            .show(message, now_ms, |change| apply_notification(doc, change))
    }

    /// Email link click: copies the address, falling back to the `mailto:` target.
    pub fn copy_email<D: Document + ?Sized, C: Clipboard + ?Sized>(
        &mut self,
        doc: &mut D,
        clipboard: &mut C,
        link: ElementId,
        now_ms: u64,
    ) -> CopyOutcome {
        let Some(email) = self.email_links.iter().find(|l| l.element == link) else {
            return CopyOutcome::Ignored;
        };
        let result = clipboard.write_text(&email.address);
        self.finish_copy(doc, link, result, now_ms)
    }

    /// Completes an email copy once an asynchronous clipboard write settles.
    pub fn finish_copy<D: Document + ?Sized>(
        &mut self,
        doc: &mut D,
        link: ElementId,
        result: Result<(), ClipboardError>,
        now_ms: u64,
    ) -> CopyOutcome {
        let Some(href) = self
            .email_links
            .iter()
            .find(|l| l.element == link)
            .map(|l| l.href.clone())
        else {
            return CopyOutcome::Ignored;
        };
        match result {
            Ok(()) => CopyOutcome::Copied(self.notify(doc, COPY_NOTIFICATION, now_ms)),
            Err(_err) => {
                pdebug!(link, err = %_err, "Page: clipboard write failed, navigating");
                doc.navigate(&href);
                CopyOutcome::FellBack
            }
        }
    }

    /// A snapshot of every derived flag.
    pub fn state(&self) -> SyncState {
        SyncState {
            scroll: self.last_projection,
            back_to_top_visible: self.back_to_top.is_visible(),
            menu_open: self.menu.is_open(),
            revealed: self.reveal.revealed_len(),
            images_pending: self.images.observed_len(),
            images_loaded: self.images.loaded_len(),
            notifications: self.notifications.active().len(),
        }
    }

    fn apply_menu<D: Document + ?Sized>(&self, doc: &mut D) {
        let open = self.menu.is_open();
        let class = &self.options.classes.active;
        for element in [self.menu_element, self.menu_toggle].into_iter().flatten() {
            doc.set_class(element, class, open);
        }
    }
}

fn apply_reveal<D: Document + ?Sized>(doc: &mut D, reveal: Reveal) {
    doc.set_reveal_style(reveal.element, reveal.style);
}

fn apply_load<D: Document + ?Sized>(doc: &mut D, load: LoadImage) {
    ptrace!(element = load.element, "Page: loading image");
    doc.set_attribute(load.element, "src", Some(&load.source));
    doc.set_attribute(load.element, "data-src", None);
}

fn apply_notification<D: Document + ?Sized>(doc: &mut D, change: NotificationChange<'_>) {
    match change.phase {
        NotificationPhase::Entering => doc.insert_notification(change.id, change.message),
        NotificationPhase::Visible | NotificationPhase::Exiting => {
            doc.set_notification_phase(change.id, change.phase)
        }
        NotificationPhase::Removed => doc.remove_notification(change.id),
    }
}
