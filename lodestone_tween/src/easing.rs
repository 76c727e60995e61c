// Copyright 2025 the Lodestone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::TAU;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `powf`, `sin`, `sqrt`, `atan2`

/// Easing curves mapping linear progress in `[0, 1]` to eased progress.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum Easing {
    /// No easing.
    #[default]
    Linear,
    /// Cubic deceleration: fast start, gentle landing.
    Power3Out,
    /// Decaying oscillation around the end value.
    ///
    /// `amplitude` below `1.0` is treated as `1.0`. The curve overshoots the
    /// end value before settling.
    ElasticOut {
        /// Peak overshoot scale.
        amplitude: f64,
        /// Oscillation period as a fraction of the duration.
        period: f64,
    },
}

impl Easing {
    /// Elastic-out with amplitude `1.0` and period `0.3`.
    pub const ELASTIC_OUT: Self = Self::ElasticOut {
        amplitude: 1.0,
        period: 0.3,
    };

    /// Applies the curve to `t`, clamped to `[0, 1]`.
    ///
    /// Every curve maps `0.0` to `0.0` and `1.0` to `1.0`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power3Out => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::ElasticOut { amplitude, period } => {
                if t <= 0.0 || t >= 1.0 || period <= 0.0 {
                    return t;
                }
                let a = amplitude.max(1.0);
                let x = 1.0 / a;
                let shift = period / TAU * x.atan2((1.0 - x * x).sqrt());
                a * 2.0_f64.powf(-10.0 * t) * ((t - shift) * TAU / period).sin() + 1.0
            }
        }
    }
}
