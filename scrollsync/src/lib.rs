//! A headless engine that keeps scroll- and viewport-driven page state in sync.
//!
//! For the host-facing page controller (document wiring, clipboard, initialization scan), see
//! the `scrollsync-adapter` crate.
//!
//! This crate holds the state machines behind a scroll-reactive page: navbar elevation and
//! active-section highlighting, one-shot reveal animations, lazy image loading, a back-to-top
//! control, transient notifications, and a debounced resize reaction.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - live layout geometry (via [`GeometryReader`])
//! - intersection entries, or geometry to synthesize them from
//! - the current time in milliseconds, for deferred effects
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod back_to_top;
mod geometry;
mod intersection;
mod key;
mod lazy;
mod menu;
mod notify;
mod observer;
mod options;
mod resize;
mod reveal;
mod schedule;
mod scroll;
mod state;
mod types;


pub use back_to_top::BackToTop;
pub use geometry::{GeometryReader, StaticGeometry};
pub use intersection::{IntersectionEntry, intersection, root_bounds};
pub use lazy::{DeferredImage, LazyImageLoader, LoadImage};
pub use menu::MobileMenu;
pub use notify::{
    Notification, NotificationChange, NotificationId, NotificationPhase, NotificationQueue,
};
pub use observer::ViewportObserver;
pub use options::{
    IntersectionOptions, NotificationOptions, OverlapPolicy, RevealOptions, SyncOptions,
};
pub use resize::{ResizeReactor, ResizeSettled};
pub use reveal::{HeroEntrance, Reveal, RevealEngine, RevealTarget};
pub use schedule::{Debouncer, ScheduledTask};
pub use scroll::{ActiveSection, NavLink, NavbarElevation, ScrollStateMachine, Section};
pub use state::{ScrollProjection, SyncState};
pub use types::{
    ElementId, ElementRect, HeroAnimation, MotionPreference, RevealStyle, ScrollBehavior,
    ScrollRequest, Viewport,
};
