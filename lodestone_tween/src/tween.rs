// Copyright 2025 the Lodestone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::easing::Easing;
use crate::lerp::Lerp;

/// Duration and easing of a transition.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TweenSpec {
    /// Duration in seconds. Zero or negative completes immediately.
    pub duration: f64,
    /// Easing curve.
    pub easing: Easing,
}

impl TweenSpec {
    /// Creates a spec.
    #[must_use]
    pub const fn new(duration: f64, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// A transition that completes on the first tick.
    #[must_use]
    pub const fn instant() -> Self {
        Self::new(0.0, Easing::Linear)
    }
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self::new(0.3, Easing::Power3Out)
    }
}

/// A single transition from one value to another.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tween<T> {
    from: T,
    to: T,
    spec: TweenSpec,
    elapsed: f64,
}

impl<T: Lerp> Tween<T> {
    /// Creates a tween that has not started yet.
    #[must_use]
    pub fn new(from: T, to: T, spec: TweenSpec) -> Self {
        Self {
            from,
            to,
            spec,
            elapsed: 0.0,
        }
    }

    /// Start value.
    #[must_use]
    pub fn start(&self) -> T {
        self.from
    }

    /// End value.
    #[must_use]
    pub fn end(&self) -> T {
        self.to
    }

    /// Duration and easing.
    #[must_use]
    pub fn spec(&self) -> TweenSpec {
        self.spec
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.spec.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.spec.duration).clamp(0.0, 1.0)
        }
    }

    /// Returns `true` once the full duration has elapsed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Value at the current progress. Exactly `to` once finished.
    #[must_use]
    pub fn value(&self) -> T {
        if self.is_finished() {
            self.to
        } else {
            self.from.lerp(self.to, self.spec.easing.apply(self.progress()))
        }
    }

    /// Advances by `dt` seconds and returns the new value.
    pub fn advance(&mut self, dt: f64) -> T {
        if dt > 0.0 {
            self.elapsed += dt;
        }
        self.value()
    }
}
