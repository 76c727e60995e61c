// Copyright 2025 the Lodestone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer vector state: current, target and previous positions.
//!
//! ## Usage
//!
//! 1) Feed pointer positions into [`PointerState::set_target`].
//! 2) Once per frame call [`PointerState::step`] to move `current` toward
//!    `target` and get the movement delta since the last frame.
//! 3) While a hover session owns the cursor, mark the state hovered with
//!    [`PointerState::set_hovered`]; stepping is then a no-op.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use lodestone_motion::PointerState;
//!
//! let mut state = PointerState::new();
//!
//! // The first contact snaps every position, so nothing flies in from off-screen.
//! assert!(state.set_target(Point::new(10.0, 10.0)));
//! assert_eq!(state.current(), Point::new(10.0, 10.0));
//!
//! // Later targets are approached gradually.
//! state.set_target(Point::new(20.0, 10.0));
//! let delta = state.step(0.5).unwrap();
//! assert_eq!(state.current(), Point::new(15.0, 10.0));
//! assert_eq!(delta.x, 5.0);
//! ```

use kurbo::{Point, Vec2};

/// Resting position of the cursor before the first pointer contact.
pub const OFFSCREEN: Point = Point::new(-100.0, -100.0);

/// Smoothed pointer position.
///
/// `current` only ever moves by interpolating toward `target`, except on the
/// first contact ([`set_target`](Self::set_target) on a fresh state) and on an
/// explicit [`resume_from`](Self::resume_from) hand-off.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerState {
    current: Point,
    target: Point,
    previous: Point,
    hovered: bool,
    initialized: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerState {
    /// Creates a state resting at [`OFFSCREEN`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: OFFSCREEN,
            target: OFFSCREEN,
            previous: OFFSCREEN,
            hovered: false,
            initialized: false,
        }
    }

    /// Smoothed position, as last written by [`step`](Self::step).
    #[must_use]
    pub fn current(&self) -> Point {
        self.current
    }

    /// Position the state is moving toward.
    #[must_use]
    pub fn target(&self) -> Point {
        self.target
    }

    /// Position at the end of the previous step.
    #[must_use]
    pub fn previous(&self) -> Point {
        self.previous
    }

    /// Returns `true` while a hover session owns the cursor.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Returns `true` once the first pointer contact has been recorded.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Marks whether a hover session owns the cursor.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Updates the target position.
    ///
    /// On the first call every position is set to `target` at once and `true`
    /// is returned. Later calls only move the target and return `false`.
    pub fn set_target(&mut self, target: Point) -> bool {
        if !self.initialized {
            self.current = target;
            self.target = target;
            self.previous = target;
            self.initialized = true;
            return true;
        }
        self.target = target;
        false
    }

    /// Moves `current` toward `target` by `alpha` and returns the delta from
    /// the previous step.
    ///
    /// Returns `None` without touching anything while hovered. An `alpha` of
    /// `1.0` or more lands exactly on the target.
    pub fn step(&mut self, alpha: f64) -> Option<Vec2> {
        if self.hovered {
            return None;
        }
        self.current = if alpha >= 1.0 {
            self.target
        } else {
            self.current.lerp(self.target, alpha)
        };
        let delta = self.current - self.previous;
        self.previous = self.current;
        Some(delta)
    }

    /// Hands position ownership back to smoothing from `position`.
    ///
    /// Sets `current` and `previous` so the next step starts from `position`
    /// with a zero delta. The target is left alone.
    pub fn resume_from(&mut self, position: Point) {
        self.current = position;
        self.previous = position;
    }

    /// Distance left between `current` and `target`.
    #[must_use]
    pub fn remaining(&self) -> f64 {
        (self.target - self.current).hypot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_rests_offscreen() {
        let state = PointerState::new();
        assert_eq!(state.current(), OFFSCREEN);
        assert_eq!(state.target(), OFFSCREEN);
        assert_eq!(state.previous(), OFFSCREEN);
        assert!(!state.is_hovered());
        assert!(!state.is_initialized());
    }

    #[test]
    fn first_target_snaps_everything() {
        let mut state = PointerState::new();
        let p = Point::new(300.0, 120.0);

        assert!(state.set_target(p));

        assert_eq!(state.current(), p);
        assert_eq!(state.previous(), p);
        assert!(state.is_initialized());
        assert_eq!(state.step(0.1), Some(Vec2::ZERO));
    }

    #[test]
    fn later_targets_do_not_snap() {
        let mut state = PointerState::new();
        state.set_target(Point::new(0.0, 0.0));

        assert!(!state.set_target(Point::new(100.0, 0.0)));
        assert_eq!(state.current(), Point::new(0.0, 0.0));
        assert_eq!(state.target(), Point::new(100.0, 0.0));
    }

    #[test]
    fn step_converges_monotonically_without_overshoot() {
        let mut state = PointerState::new();
        state.set_target(Point::new(0.0, 0.0));
        state.set_target(Point::new(100.0, -40.0));

        for alpha in [0.05, 0.1, 0.5, 0.9] {
            let mut s = state;
            let mut last = s.remaining();
            for _ in 0..400 {
                s.step(alpha);
                let now = s.remaining();
                assert!(now <= last, "distance grew at alpha {alpha}");
                assert!(s.current().x <= 100.0, "x overshot at alpha {alpha}");
                assert!(s.current().y >= -40.0, "y overshot at alpha {alpha}");
                last = now;
            }
            assert!(last < 1e-3, "did not converge at alpha {alpha}");
        }
    }

    #[test]
    fn full_alpha_lands_exactly_on_target() {
        let mut state = PointerState::new();
        state.set_target(Point::new(0.1, 0.7));
        state.set_target(Point::new(0.3, 1.9));

        state.step(1.0);

        assert_eq!(state.current(), state.target());
    }

    #[test]
    fn step_reports_delta_and_updates_previous() {
        let mut state = PointerState::new();
        state.set_target(Point::new(0.0, 0.0));
        state.set_target(Point::new(10.0, 20.0));

        let delta = state.step(0.5);

        assert_eq!(delta, Some(Vec2::new(5.0, 10.0)));
        assert_eq!(state.previous(), state.current());
    }

    #[test]
    fn hovered_state_does_not_step() {
        let mut state = PointerState::new();
        state.set_target(Point::new(0.0, 0.0));
        state.set_target(Point::new(50.0, 50.0));
        state.set_hovered(true);

        assert_eq!(state.step(0.5), None);
        assert_eq!(state.current(), Point::new(0.0, 0.0));

        state.set_hovered(false);
        assert!(state.step(0.5).is_some());
    }

    #[test]
    fn resume_from_restarts_with_zero_delta() {
        let mut state = PointerState::new();
        state.set_target(Point::new(0.0, 0.0));
        state.set_target(Point::new(80.0, 0.0));

        state.resume_from(Point::new(40.0, 0.0));

        assert_eq!(state.current(), Point::new(40.0, 0.0));
        assert_eq!(state.previous(), Point::new(40.0, 0.0));
        assert_eq!(state.target(), Point::new(80.0, 0.0));
        let delta = state.step(0.5).unwrap();
        assert_eq!(delta, Vec2::new(20.0, 0.0));
    }
}
