// Copyright 2025 the Lodestone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use lodestone_motion::Stretch;

/// A [`CursorConfig`](crate::CursorConfig) value outside its valid range.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Interpolation factor not in `(0, 1]`.
    LerpAmount(f64),
    /// Magnetic factor negative or not finite.
    MagneticFactor(f64),
    /// Hover padding negative or not finite.
    HoverPadding(f64),
    /// Cursor size not positive or not finite.
    CursorSize(f64),
    /// The marker attribute is empty, which would match nothing.
    EmptyMarkerAttribute,
    /// Stretch limits negative, not finite, or squashing the shape inside out.
    Stretch(Stretch),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LerpAmount(v) => write!(f, "lerp amount {v} is not in (0, 1]"),
            Self::MagneticFactor(v) => {
                write!(f, "magnetic factor {v} must be finite and non-negative")
            }
            Self::HoverPadding(v) => write!(f, "hover padding {v} must be finite and non-negative"),
            Self::CursorSize(v) => write!(f, "cursor size {v} must be finite and positive"),
            Self::EmptyMarkerAttribute => f.write_str("marker attribute must not be empty"),
            Self::Stretch(s) => write!(
                f,
                "stretch limits {s:?} must be finite and non-negative with max_scale_y below 1"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}
