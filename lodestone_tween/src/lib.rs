// Copyright 2025 the Lodestone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lodestone_tween --heading-base-level=0

//! Lodestone Tween: small, interruptible property transitions.
//!
//! Cursor effects are built from short fire-and-forget transitions (fit the
//! cursor to a button, fade it out, pull an element toward the pointer) that
//! are frequently superseded before they finish. This crate models each
//! animatable property as an [`Animated`] value owning at most one in-flight
//! [`Tween`]. Starting a new transition always kills the previous one and
//! continues from the present value.
//!
//! - [`Easing`]: linear, cubic ease-out and elastic ease-out curves.
//! - [`TweenSpec`]: duration (seconds) plus easing.
//! - [`Lerp`]: interpolation for `f64`, Kurbo `Point`/`Vec2`/`Size` and
//!   Peniko `Color`.
//! - [`QuickTo`]: an [`Animated`] bound to one spec for rapid retargeting.
//!
//! Time is supplied by the caller. Nothing here reads a clock.
//!
//! ## Example
//!
//! ```rust
//! use lodestone_tween::{Animated, Easing, TweenSpec};
//!
//! let mut opacity = Animated::new(1.0);
//! opacity.animate_to(0.0, TweenSpec::new(0.2, Easing::Linear));
//! opacity.tick(0.1);
//! assert!((opacity.value() - 0.5).abs() < 1e-9);
//!
//! // Re-entering mid fade turns around without a jump.
//! opacity.animate_to(1.0, TweenSpec::new(0.2, Easing::Linear));
//! assert!((opacity.value() - 0.5).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod animated;
mod easing;
mod lerp;
mod tween;

pub use animated::{Animated, QuickTo};
pub use easing::Easing;
pub use lerp::Lerp;
pub use tween::{Tween, TweenSpec};
