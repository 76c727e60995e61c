// Copyright 2025 the Lodestone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lodestone_motion --heading-base-level=0

//! Lodestone Motion: smoothed pointer state and free-roam cursor motion.
//!
//! This crate holds the leaf state of a custom cursor: where the pointer is
//! (`target`), where the drawn cursor is (`current`), and where it was one frame
//! ago (`previous`). Each display refresh the cursor eases toward the pointer
//! and a small stretch effect is derived from how far it moved.
//!
//! - [`PointerState`]: the position triple plus the hover flag.
//! - [`MotionDriver`]: advances the state once per frame and produces a
//!   [`FreeRoamFrame`] (position, rotation, scale) for the host to draw.
//! - [`Stretch`]: speed-to-scale limits for the stretch effect.
//!
//! The crate does not schedule frames or draw anything. Call
//! [`MotionDriver::advance_frame`] from whatever frame callback the host has.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use lodestone_motion::MotionDriver;
//!
//! let mut driver = MotionDriver::new(0.1);
//!
//! // A 20px cursor centered on the pointer.
//! driver.pointer_moved(Point::new(100.0, 100.0), 20.0);
//! driver.pointer_moved(Point::new(200.0, 100.0), 20.0);
//!
//! let frame = driver.advance_frame().unwrap();
//! assert!(frame.position.x > 90.0 && frame.position.x < 190.0);
//! assert!(frame.scale.x > 1.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod driver;
mod state;

pub use driver::{DEFAULT_LERP_AMOUNT, FreeRoamFrame, MotionDriver, Stretch};
pub use state::{OFFSCREEN, PointerState};
