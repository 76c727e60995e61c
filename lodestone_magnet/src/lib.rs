// Copyright 2025 the Lodestone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lodestone_magnet --heading-base-level=0

//! Lodestone Magnet: magnetic hover targets for a custom cursor.
//!
//! Elements opt in to magnetic behavior with a marker attribute. While the
//! pointer is over such an element, the floating cursor proxy stretches to
//! cover it and the element itself leans toward the pointer.
//!
//! - [`ElementHost`]: what the crate needs from the document (queries about
//!   marked elements, listener attach/detach).
//! - [`HoverRegistry`]: ordered, enumerable registrations of marked elements
//!   with the listeners attached to each. Scanning is idempotent and teardown
//!   detaches every listener exactly once.
//! - [`AttractionController`]: the `Idle → Attracted → Idle` state machine and
//!   the hover session that owns the proxy while an element is hovered.
//! - [`Magnet`]: per-element phase, coalesced moves and magnetic translation.
//! - [`Proxy`]: animated visual properties of the cursor proxy, and
//!   [`ProxyFrame`], the snapshot the host draws.
//!
//! Events are pushed in by the host; nothing here blocks or schedules work.
//! Pointer moves over an attracted element are queued and applied once per
//! frame by [`AttractionController::flush`].
//!
//! ## Geometry
//!
//! With padding `p`, an element with bounds `{ x, y, w, h }` is covered by a
//! proxy at `(x − p, y − p)` of size `(w + 2p, h + 2p)`. A pointer at `q` pulls
//! the element by `(q − center) × magnetic_factor`.
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use lodestone_magnet::{hover_frame, magnetic_offset};
//!
//! let bounds = Rect::from_origin_size((50.0, 50.0), (80.0, 30.0));
//! let frame = hover_frame(bounds, 8.0);
//! assert_eq!(frame, Rect::new(42.0, 42.0, 138.0, 88.0));
//!
//! let pull = magnetic_offset(Point::new(100.0, 65.0), bounds, 0.5);
//! assert_eq!(pull.x, 5.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod host;
mod magnet;
mod proxy;
mod registry;

pub use controller::{
    AttractionConfig, AttractionController, DEFAULT_COLOR_ATTRIBUTE, DEFAULT_MARKER_ATTRIBUTE,
};
pub use host::{ElementHost, PointerEventKind};
pub use magnet::{AttractionState, Magnet, magnetic_offset};
pub use proxy::{
    CursorLook, CursorShape, DEFAULT_CURSOR_SIZE, Proxy, ProxyFrame, ROUNDED_RADIUS,
    TEXT_SQUASH_SCALE, hover_frame,
};
pub use registry::{HoverRegistry, Registration};
