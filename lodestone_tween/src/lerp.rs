// Copyright 2025 the Lodestone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};
use peniko::Color;

/// Values that can be linearly interpolated.
pub trait Lerp: Copy {
    /// Interpolates from `self` toward `to` by `t`.
    ///
    /// `t` is not clamped: eased progress may leave `[0, 1]`.
    #[must_use]
    fn lerp(self, to: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(self, to: Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Point {
    fn lerp(self, to: Self, t: f64) -> Self {
        Self::new(self.x.lerp(to.x, t), self.y.lerp(to.y, t))
    }
}

impl Lerp for Vec2 {
    fn lerp(self, to: Self, t: f64) -> Self {
        Self::new(self.x.lerp(to.x, t), self.y.lerp(to.y, t))
    }
}

impl Lerp for Size {
    fn lerp(self, to: Self, t: f64) -> Self {
        Self::new(self.width.lerp(to.width, t), self.height.lerp(to.height, t))
    }
}

impl Lerp for Color {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "color components are stored as f32"
    )]
    fn lerp(self, to: Self, t: f64) -> Self {
        let t = t as f32;
        let [r0, g0, b0, a0] = self.components;
        let [r1, g1, b1, a1] = to.components;
        Self::new([
            r0 + (r1 - r0) * t,
            g0 + (g1 - g0) * t,
            b0 + (b1 - b0) * t,
            a0 + (a1 - a0) * t,
        ])
    }
}
