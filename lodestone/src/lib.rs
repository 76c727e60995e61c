// Copyright 2025 the Lodestone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lodestone --heading-base-level=0

//! Lodestone: a headless magnetic cursor.
//!
//! A floating proxy follows the pointer with per-frame smoothing and stretches
//! in the direction of travel. Elements carrying a marker attribute
//! (`data-magnetic` by default) are magnetic: while hovered the proxy grows to
//! cover them and the element leans toward the pointer.
//!
//! The engine never touches a document directly. The embedder implements
//! [`CursorHost`] and forwards events:
//!
//! - [`MagneticCursor::pointer_move`], [`MagneticCursor::pointer_left_document`]
//!   and [`MagneticCursor::pointer_entered_document`] for document-level pointer
//!   input;
//! - [`MagneticCursor::element_event`] from the listeners the engine attached
//!   through [`ElementHost::attach`];
//! - [`MagneticCursor::nodes_added`] and [`MagneticCursor::nodes_removed`] from
//!   the mutation observer;
//! - [`MagneticCursor::route_changed`] on navigation;
//! - [`MagneticCursor::advance_frame`] once per display refresh, after which
//!   [`MagneticCursor::frame`] and [`MagneticCursor::element_translation`]
//!   describe what to draw.
//!
//! [`MagneticCursor::unmount`] releases every subscription and listener and
//! restores the native cursor.
//!
//! The building blocks live in their own crates and are re-exported here:
//! [`lodestone_motion`] (smoothing and stretch), [`lodestone_tween`]
//! (interruptible transitions) and [`lodestone_magnet`] (registry and
//! attraction).
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use lodestone::{
//!     CursorConfig, CursorHost, ElementEvent, ElementHost, MagneticCursor, MediaFeatures,
//!     PointerEventKind,
//! };
//!
//! struct Page {
//!     button: Rect,
//!     listeners: usize,
//! }
//!
//! impl ElementHost for Page {
//!     type Element = &'static str;
//!     type Listener = PointerEventKind;
//!
//!     fn marked_elements(&self, _attribute: &str, out: &mut Vec<&'static str>) {
//!         out.push("button");
//!     }
//!     fn is_connected(&self, _element: &&'static str) -> bool {
//!         true
//!     }
//!     fn bounds(&self, _element: &&'static str) -> Option<Rect> {
//!         Some(self.button)
//!     }
//!     fn corner_radius(&self, _element: &&'static str) -> f64 {
//!         6.0
//!     }
//!     fn attribute(&self, _element: &&'static str, _name: &str) -> Option<String> {
//!         None
//!     }
//!     fn attach(&mut self, _element: &&'static str, kind: PointerEventKind) -> PointerEventKind {
//!         self.listeners += 1;
//!         kind
//!     }
//!     fn detach(&mut self, _element: &&'static str, _listener: PointerEventKind) {
//!         self.listeners -= 1;
//!     }
//! }
//!
//! impl CursorHost for Page {
//!     type FrameSubscription = ();
//!     type MutationObserver = ();
//!
//!     fn media_features(&self) -> MediaFeatures {
//!         MediaFeatures::empty()
//!     }
//!     fn viewport(&self) -> Size {
//!         Size::new(800.0, 600.0)
//!     }
//!     fn request_frames(&mut self) {}
//!     fn cancel_frames(&mut self, _subscription: ()) {}
//!     fn observe_mutations(&mut self) {}
//!     fn disconnect_mutations(&mut self, _observer: ()) {}
//!     fn set_native_cursor_hidden(&mut self, _hidden: bool) {}
//! }
//!
//! let page = Page {
//!     button: Rect::from_origin_size((50.0, 50.0), (80.0, 30.0)),
//!     listeners: 0,
//! };
//! let mut cursor = MagneticCursor::mount(CursorConfig::default(), page).unwrap();
//! assert_eq!(cursor.host().listeners, 4);
//!
//! cursor.pointer_move(Point::new(60.0, 60.0));
//! cursor.element_event(&"button", ElementEvent::Enter);
//! for _ in 0..30 {
//!     cursor.advance_frame(1.0 / 60.0);
//! }
//! let frame = cursor.frame().unwrap();
//! assert_eq!(frame.proxy.position, Point::new(42.0, 42.0));
//! assert_eq!(frame.proxy.size, Size::new(96.0, 46.0));
//!
//! let page = cursor.unmount();
//! assert_eq!(page.listeners, 0);
//! ```

mod config;
mod cursor_type;
mod engine;
mod error;
mod follower;
mod host;
mod lifecycle;

pub use config::{CursorConfig, DOCUMENT_FADE, TEXT_SQUASH, VIEWPORT_FADE};
pub use cursor_type::{CursorType, CursorTypeHandle};
pub use engine::{CursorFrame, ElementEvent, MagneticCursor};
pub use error::ConfigError;
pub use follower::{
    DEFAULT_FOLLOWER_GAP, DEFAULT_POINTER_SIZE, FollowerAlign, follower_position, follower_rect,
};
pub use host::{CursorHost, MediaFeatures};
pub use lifecycle::Phase;

pub use lodestone_magnet::{
    AttractionState, CursorShape, ElementHost, PointerEventKind, ProxyFrame, TEXT_SQUASH_SCALE,
};
pub use lodestone_motion::{PointerState, Stretch};
pub use {lodestone_magnet, lodestone_motion, lodestone_tween};
