// Copyright 2025 the Lodestone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated properties: values with at most one in-flight transition.
//!
//! Starting a transition kills the previous one and continues from wherever
//! the value currently is, so an interrupted transition never jumps.

use crate::lerp::Lerp;
use crate::tween::{Tween, TweenSpec};

/// A property value with an optional in-flight transition.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Animated<T> {
    value: T,
    tween: Option<Tween<T>>,
}

impl<T: Lerp> Animated<T> {
    /// Creates a resting property.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self { value, tween: None }
    }

    /// Present value.
    #[must_use]
    pub fn value(&self) -> T {
        self.value
    }

    /// Value the property will rest at: the end of the in-flight transition,
    /// or the present value.
    #[must_use]
    pub fn target(&self) -> T {
        self.tween.as_ref().map_or(self.value, Tween::end)
    }

    /// Returns `true` while a transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Snaps to `value`, killing any in-flight transition.
    pub fn set(&mut self, value: T) {
        self.tween = None;
        self.value = value;
    }

    /// Starts a transition to `to` from the present value.
    ///
    /// Any in-flight transition is killed first. A zero-duration spec snaps.
    pub fn animate_to(&mut self, to: T, spec: TweenSpec) {
        self.tween = None;
        if spec.duration <= 0.0 {
            self.value = to;
            return;
        }
        self.tween = Some(Tween::new(self.value, to, spec));
    }

    /// Kills the in-flight transition, freezing the present value.
    pub fn kill(&mut self) {
        self.tween = None;
    }

    /// Advances the in-flight transition by `dt` seconds.
    ///
    /// Returns `true` if the value may have changed.
    pub fn tick(&mut self, dt: f64) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };
        self.value = tween.advance(dt);
        if tween.is_finished() {
            self.tween = None;
        }
        true
    }
}

/// An [`Animated`] value bound to one spec and retargeted often.
///
/// Suited to values driven by a stream of inputs, such as the magnetic
/// translation of a hovered element following the pointer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuickTo<T> {
    inner: Animated<T>,
    spec: TweenSpec,
}

impl<T: Lerp> QuickTo<T> {
    /// Creates a resting value that will move with `spec`.
    #[must_use]
    pub fn new(value: T, spec: TweenSpec) -> Self {
        Self {
            inner: Animated::new(value),
            spec,
        }
    }

    /// Transition spec used for every retarget.
    #[must_use]
    pub fn spec(&self) -> TweenSpec {
        self.spec
    }

    /// Present value.
    #[must_use]
    pub fn value(&self) -> T {
        self.inner.value()
    }

    /// Value the property is heading to.
    #[must_use]
    pub fn target(&self) -> T {
        self.inner.target()
    }

    /// Returns `true` while moving.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.inner.is_animating()
    }

    /// Heads to `to` from the present value.
    pub fn retarget(&mut self, to: T) {
        self.inner.animate_to(to, self.spec);
    }

    /// Snaps to `value`.
    pub fn set(&mut self, value: T) {
        self.inner.set(value);
    }

    /// Advances by `dt` seconds. Returns `true` if the value may have changed.
    pub fn tick(&mut self, dt: f64) -> bool {
        self.inner.tick(dt)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::*;
    use crate::easing::Easing;

    const LINEAR_1S: TweenSpec = TweenSpec::new(1.0, Easing::Linear);

    #[test]
    fn resting_property_reports_value_as_target() {
        let prop = Animated::new(4.0);
        assert_eq!(prop.value(), 4.0);
        assert_eq!(prop.target(), 4.0);
        assert!(!prop.is_animating());
    }

    #[test]
    fn animate_to_runs_to_completion() {
        let mut prop = Animated::new(0.0);
        prop.animate_to(10.0, LINEAR_1S);
        assert_eq!(prop.target(), 10.0);

        assert!(prop.tick(0.5));
        assert_eq!(prop.value(), 5.0);
        prop.tick(0.5);
        assert_eq!(prop.value(), 10.0);
        assert!(!prop.is_animating());
        assert!(!prop.tick(0.5));
    }

    #[test]
    fn interrupting_continues_from_present_value() {
        let mut prop = Animated::new(0.0);
        prop.animate_to(10.0, LINEAR_1S);
        prop.tick(0.5);

        prop.animate_to(0.0, LINEAR_1S);

        // No jump: the new transition starts where the old one was.
        assert_eq!(prop.value(), 5.0);
        prop.tick(0.5);
        assert_eq!(prop.value(), 2.5);
        assert_eq!(prop.target(), 0.0);
    }

    #[test]
    fn set_kills_transition() {
        let mut prop = Animated::new(0.0);
        prop.animate_to(10.0, LINEAR_1S);
        prop.tick(0.2);

        prop.set(-1.0);

        assert!(!prop.is_animating());
        prop.tick(1.0);
        assert_eq!(prop.value(), -1.0);
    }

    #[test]
    fn kill_freezes_present_value() {
        let mut prop = Animated::new(0.0);
        prop.animate_to(10.0, LINEAR_1S);
        prop.tick(0.3);

        prop.kill();

        assert_eq!(prop.value(), 3.0);
        assert_eq!(prop.target(), 3.0);
    }

    #[test]
    fn zero_duration_snaps() {
        let mut prop = Animated::new(0.0);
        prop.animate_to(7.0, TweenSpec::instant());
        assert_eq!(prop.value(), 7.0);
        assert!(!prop.is_animating());
    }

    #[test]
    fn quick_to_retargets_with_its_spec() {
        let mut q = QuickTo::new(Vec2::ZERO, LINEAR_1S);
        q.retarget(Vec2::new(2.0, 0.0));
        q.tick(0.5);
        assert_eq!(q.value(), Vec2::new(1.0, 0.0));

        q.retarget(Vec2::new(1.0, 4.0));
        assert_eq!(q.target(), Vec2::new(1.0, 4.0));
        q.tick(1.0);
        assert_eq!(q.value(), Vec2::new(1.0, 4.0));
        assert!(!q.is_animating());
    }
}
