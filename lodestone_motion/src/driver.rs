// Copyright 2025 the Lodestone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Free-roam driver: per-frame smoothing plus the stretch-in-direction-of-travel effect.

use kurbo::{Point, Vec2};

use crate::state::PointerState;

/// Default interpolation factor applied per frame.
pub const DEFAULT_LERP_AMOUNT: f64 = 0.1;

/// Limits for the stretch effect derived from cursor speed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stretch {
    /// Multiplier from pixels moved per frame to stretch amount.
    pub speed_multiplier: f64,
    /// Largest extra horizontal scale (along the direction of travel).
    pub max_scale_x: f64,
    /// Largest vertical squash. Kept below `1.0` so the shape never inverts.
    pub max_scale_y: f64,
}

impl Default for Stretch {
    fn default() -> Self {
        Self {
            speed_multiplier: 0.04,
            max_scale_x: 1.0,
            max_scale_y: 0.3,
        }
    }
}

impl Stretch {
    /// Returns `true` if every limit is finite and non-negative and
    /// `max_scale_y` stays below `1.0`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let non_negative = |v: f64| v.is_finite() && v >= 0.0;
        non_negative(self.speed_multiplier)
            && non_negative(self.max_scale_x)
            && non_negative(self.max_scale_y)
            && self.max_scale_y < 1.0
    }

    /// Rotation (degrees) and scale for a frame that moved by `delta`.
    #[must_use]
    pub fn transform(&self, delta: Vec2) -> (f64, Vec2) {
        let speed = delta.hypot() * self.speed_multiplier;
        let rotation = delta.atan2().to_degrees();
        let scale = Vec2::new(
            1.0 + speed.min(self.max_scale_x),
            1.0 - speed.min(self.max_scale_y),
        );
        (rotation, scale)
    }
}

/// What the driver writes to the cursor proxy for one frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FreeRoamFrame {
    /// Top-left corner of the proxy in viewport coordinates.
    pub position: Point,
    /// Direction of travel in degrees.
    pub rotation_degrees: f64,
    /// Horizontal and vertical scale.
    pub scale: Vec2,
}

/// Advances a [`PointerState`] once per display refresh.
///
/// The driver is the single owner of the pointer state; hover logic reaches
/// it through [`state_mut`](Self::state_mut).
#[derive(Clone, Debug)]
pub struct MotionDriver {
    state: PointerState,
    lerp_amount: f64,
    reduced_motion: bool,
    stretch: Stretch,
}

impl Default for MotionDriver {
    fn default() -> Self {
        Self::new(DEFAULT_LERP_AMOUNT)
    }
}

impl MotionDriver {
    /// Creates a driver interpolating by `lerp_amount` per frame.
    #[must_use]
    pub fn new(lerp_amount: f64) -> Self {
        Self {
            state: PointerState::new(),
            lerp_amount,
            reduced_motion: false,
            stretch: Stretch::default(),
        }
    }

    /// Snaps instantly and disables the stretch effect when `reduced` is set.
    #[must_use]
    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    /// Replaces the stretch limits.
    #[must_use]
    pub fn with_stretch(mut self, stretch: Stretch) -> Self {
        self.stretch = stretch;
        self
    }

    /// Interpolation factor actually applied per frame.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        if self.reduced_motion {
            1.0
        } else {
            self.lerp_amount
        }
    }

    /// Returns `true` when reduced motion is in effect.
    #[must_use]
    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Shared pointer state.
    #[must_use]
    pub fn state(&self) -> &PointerState {
        &self.state
    }

    /// Mutable access to the shared pointer state.
    pub fn state_mut(&mut self) -> &mut PointerState {
        &mut self.state
    }

    /// Records a pointer position in viewport coordinates.
    ///
    /// The target is offset by half the cursor size so the proxy is centered
    /// on the pointer. Returns `true` on the first contact, where the state
    /// snaps instead of interpolating.
    pub fn pointer_moved(&mut self, client: Point, cursor_size: f64) -> bool {
        let half = cursor_size / 2.0;
        self.state.set_target(client - Vec2::new(half, half))
    }

    /// Advances one frame.
    ///
    /// Returns `None` while a hover session owns the proxy.
    pub fn advance_frame(&mut self) -> Option<FreeRoamFrame> {
        let delta = self.state.step(self.alpha())?;
        let (rotation_degrees, scale) = if self.reduced_motion {
            (0.0, Vec2::new(1.0, 1.0))
        } else {
            self.stretch.transform(delta)
        };
        Some(FreeRoamFrame {
            position: self.state.current(),
            rotation_degrees,
            scale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver_at(p: Point, size: f64) -> MotionDriver {
        let mut driver = MotionDriver::new(0.1);
        driver.pointer_moved(p, size);
        driver
    }

    #[test]
    fn valid_limits_never_invert_the_shape() {
        let stretch = Stretch::default();
        assert!(stretch.is_valid());
        let (_, scale) = stretch.transform(Vec2::new(5_000.0, 0.0));
        assert!(scale.y > 0.0);
        assert_eq!(scale.x, 2.0);

        let inverting = Stretch {
            max_scale_y: 1.5,
            ..stretch
        };
        assert!(!inverting.is_valid());
        assert!(
            !Stretch {
                speed_multiplier: f64::NAN,
                ..stretch
            }
            .is_valid()
        );
    }

    #[test]
    fn pointer_target_is_centered_on_cursor() {
        let mut driver = driver_at(Point::new(100.0, 100.0), 20.0);
        assert_eq!(driver.state().current(), Point::new(90.0, 90.0));

        driver.pointer_moved(Point::new(200.0, 50.0), 20.0);
        assert_eq!(driver.state().target(), Point::new(190.0, 40.0));
    }

    #[test]
    fn first_contact_reports_snap_once() {
        let mut driver = MotionDriver::default();
        assert!(driver.pointer_moved(Point::new(5.0, 5.0), 24.0));
        assert!(!driver.pointer_moved(Point::new(6.0, 5.0), 24.0));
    }

    #[test]
    fn frame_at_rest_has_identity_stretch() {
        let mut driver = driver_at(Point::new(50.0, 50.0), 20.0);

        let frame = driver.advance_frame().unwrap();

        assert_eq!(frame.position, Point::new(40.0, 40.0));
        assert_eq!(frame.rotation_degrees, 0.0);
        assert_eq!(frame.scale, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn frame_rotates_toward_travel_and_stretches() {
        let mut driver = driver_at(Point::new(0.0, 0.0), 0.0);
        driver.pointer_moved(Point::new(0.0, 100.0), 0.0);

        let frame = driver.advance_frame().unwrap();

        // Moved 10px straight down: 90 degrees, speed 0.4.
        assert!((frame.rotation_degrees - 90.0).abs() < 1e-9);
        assert!((frame.scale.x - 1.4).abs() < 1e-9);
        assert!((frame.scale.y - 0.7).abs() < 1e-9);
    }

    #[test]
    fn stretch_is_clamped() {
        let stretch = Stretch::default();
        let (_, scale) = stretch.transform(Vec2::new(-500.0, 0.0));
        assert_eq!(scale, Vec2::new(2.0, 0.7));
    }

    #[test]
    fn reduced_motion_snaps_and_disables_stretch() {
        let mut driver = MotionDriver::new(0.1).with_reduced_motion(true);
        driver.pointer_moved(Point::new(0.0, 0.0), 0.0);
        driver.pointer_moved(Point::new(300.0, -20.0), 0.0);

        let frame = driver.advance_frame().unwrap();

        assert_eq!(driver.alpha(), 1.0);
        assert_eq!(driver.state().current(), driver.state().target());
        assert_eq!(frame.position, Point::new(300.0, -20.0));
        assert_eq!(frame.rotation_degrees, 0.0);
        assert_eq!(frame.scale, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn hovered_driver_yields_no_frame() {
        let mut driver = driver_at(Point::new(0.0, 0.0), 0.0);
        driver.state_mut().set_hovered(true);
        assert_eq!(driver.advance_frame(), None);
    }
}
