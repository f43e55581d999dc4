use crate::schedule::{Debouncer, ScheduledTask};
use crate::{GeometryReader, MobileMenu};

/// Outcome of a settled resize burst.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeSettled {
    /// Viewport width read when the debounce fired.
    pub width: u32,
    /// The width is past the mobile breakpoint; the menu was forced closed.
    pub desktop: bool,
    /// The menu was open before settling.
    pub closed_menu: bool,
}

/// Closes the mobile menu once a resize burst settles on a desktop-width viewport.
#[derive(Clone, Debug)]
pub struct ResizeReactor {
    debouncer: Debouncer,
    breakpoint: u32,
}

impl ResizeReactor {
    pub fn new(delay_ms: u64, breakpoint: u32) -> Self {
        Self {
            debouncer: Debouncer::new(delay_ms),
            breakpoint,
        }
    }

    pub fn breakpoint(&self) -> u32 {
        self.breakpoint
    }

    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }

    pub fn pending(&self) -> Option<ScheduledTask> {
        self.debouncer.pending()
    }

    /// Records a resize signal, replacing any pending settle.
    pub fn on_resize(&mut self, now_ms: u64) -> ScheduledTask {
        self.debouncer.trigger(now_ms)
    }

    /// Fires the settle action if the quiet period elapsed.
    ///
    /// Reads the viewport width at fire time, so the latest geometry always wins.
    pub fn tick<G: GeometryReader + ?Sized>(
        &mut self,
        now_ms: u64,
        geometry: &G,
        menu: &mut MobileMenu,
    ) -> Option<ResizeSettled> {
        self.debouncer.poll(now_ms)?;
        let width = geometry.viewport().width;
        let desktop = width > self.breakpoint;
        let closed_menu = desktop && menu.close();
        sdebug!(width, desktop, closed_menu, "ResizeReactor: settled");
        Some(ResizeSettled {
            width,
            desktop,
            closed_menu,
        })
    }
}
