//! Host-facing page controller for the `scrollsync` crate.
//!
//! The `scrollsync` crate holds the state machines and never touches a document. This crate
//! provides the glue a browser (or any other host) adapter needs:
//!
//! - [`Document`] / [`Clipboard`] capabilities the host implements
//! - an initialization scan that turns host nodes into a [`PageLayout`]
//! - [`Page`], the context object that owns every component and applies its output
//!
//! This crate is intentionally framework-agnostic (no `web-sys` bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod document;
mod page;
mod scan;
mod style;

#[cfg(test)]
mod tests;

pub use document::{Clipboard, ClipboardError, Document};
pub use page::{CopyOutcome, Page, PageOptions};
pub use scan::{EmailLink, PageLayout, ScanNode, Selectors};
pub use style::{BACK_TO_TOP_LABEL, COPY_NOTIFICATION, ClassNames, MENU_TOGGLE_STYLE};
