// Copyright 2025 the Lodestone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mount-time configuration of the cursor engine.

use lodestone_magnet::{
    AttractionConfig, CursorLook, CursorShape, DEFAULT_COLOR_ATTRIBUTE, DEFAULT_CURSOR_SIZE,
    DEFAULT_MARKER_ATTRIBUTE,
};
use lodestone_motion::{DEFAULT_LERP_AMOUNT, MotionDriver, Stretch};
use lodestone_tween::{Easing, TweenSpec};
use peniko::{Color, Mix};

use crate::error::ConfigError;

/// Fade applied when the pointer leaves or re-enters the viewport.
pub const VIEWPORT_FADE: TweenSpec = TweenSpec::new(0.2, Easing::Linear);

/// Fade applied when the pointer leaves or re-enters the document.
pub const DOCUMENT_FADE: TweenSpec = TweenSpec::new(0.3, Easing::Linear);

/// Squash in and out over text content.
pub const TEXT_SQUASH: TweenSpec = TweenSpec::new(0.3, Easing::Linear);

/// Options fixed for the lifetime of one mount.
///
/// ```rust
/// use lodestone::{CursorConfig, CursorShape};
///
/// let config = CursorConfig::default()
///     .with_cursor_size(32.0)
///     .with_shape(CursorShape::Rounded)
///     .with_magnetic_factor(0.35);
/// assert!(config.validate().is_ok());
/// assert!(config.with_lerp_amount(0.0).validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CursorConfig {
    /// Fraction of the remaining distance covered per frame, in `(0, 1]`.
    pub lerp_amount: f64,
    /// Fraction of the pointer's distance from an element center by which the
    /// element leans toward the pointer.
    pub magnetic_factor: f64,
    /// Space added around a hovered element on every side.
    pub hover_padding: f64,
    /// Attribute marking magnetic elements.
    pub marker_attribute: String,
    /// Attribute overriding the proxy color per element.
    pub color_attribute: String,
    /// Edge length of the resting cursor.
    pub cursor_size: f64,
    /// Fill color of the resting cursor.
    pub color: Color,
    /// How the proxy composites over the page.
    pub blend_mode: Mix,
    /// Resting outline.
    pub shape: CursorShape,
    /// Leave the platform cursor alone on touch-primary devices.
    pub disable_on_touch: bool,
    /// Limits of the stretch effect.
    pub stretch: Stretch,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            lerp_amount: DEFAULT_LERP_AMOUNT,
            magnetic_factor: 0.2,
            hover_padding: 8.0,
            marker_attribute: DEFAULT_MARKER_ATTRIBUTE.into(),
            color_attribute: DEFAULT_COLOR_ATTRIBUTE.into(),
            cursor_size: DEFAULT_CURSOR_SIZE,
            color: Color::WHITE,
            blend_mode: Mix::Difference,
            shape: CursorShape::Circle,
            disable_on_touch: true,
            stretch: Stretch::default(),
        }
    }
}

impl CursorConfig {
    /// Sets the per-frame interpolation factor.
    #[must_use]
    pub fn with_lerp_amount(mut self, lerp_amount: f64) -> Self {
        self.lerp_amount = lerp_amount;
        self
    }

    /// Sets the magnetic factor.
    #[must_use]
    pub fn with_magnetic_factor(mut self, magnetic_factor: f64) -> Self {
        self.magnetic_factor = magnetic_factor;
        self
    }

    /// Sets the hover padding.
    #[must_use]
    pub fn with_hover_padding(mut self, hover_padding: f64) -> Self {
        self.hover_padding = hover_padding;
        self
    }

    /// Sets the marker attribute.
    #[must_use]
    pub fn with_marker_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.marker_attribute = attribute.into();
        self
    }

    /// Sets the color override attribute.
    #[must_use]
    pub fn with_color_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.color_attribute = attribute.into();
        self
    }

    /// Sets the resting cursor size.
    #[must_use]
    pub fn with_cursor_size(mut self, cursor_size: f64) -> Self {
        self.cursor_size = cursor_size;
        self
    }

    /// Sets the resting cursor color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the blend mode.
    #[must_use]
    pub fn with_blend_mode(mut self, blend_mode: Mix) -> Self {
        self.blend_mode = blend_mode;
        self
    }

    /// Sets the resting outline.
    #[must_use]
    pub fn with_shape(mut self, shape: CursorShape) -> Self {
        self.shape = shape;
        self
    }

    /// Sets whether touch-primary devices disable the engine.
    #[must_use]
    pub fn with_disable_on_touch(mut self, disable: bool) -> Self {
        self.disable_on_touch = disable;
        self
    }

    /// Sets the stretch limits.
    #[must_use]
    pub fn with_stretch(mut self, stretch: Stretch) -> Self {
        self.stretch = stretch;
        self
    }

    /// Checks every value against its valid range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lerp = self.lerp_amount;
        if lerp.is_nan() || lerp <= 0.0 || lerp > 1.0 {
            return Err(ConfigError::LerpAmount(lerp));
        }
        if !self.magnetic_factor.is_finite() || self.magnetic_factor < 0.0 {
            return Err(ConfigError::MagneticFactor(self.magnetic_factor));
        }
        if !self.hover_padding.is_finite() || self.hover_padding < 0.0 {
            return Err(ConfigError::HoverPadding(self.hover_padding));
        }
        if !self.cursor_size.is_finite() || self.cursor_size <= 0.0 {
            return Err(ConfigError::CursorSize(self.cursor_size));
        }
        if self.marker_attribute.trim().is_empty() {
            return Err(ConfigError::EmptyMarkerAttribute);
        }
        if !self.stretch.is_valid() {
            return Err(ConfigError::Stretch(self.stretch));
        }
        Ok(())
    }

    /// Resting look of the proxy.
    #[must_use]
    pub fn look(&self) -> CursorLook {
        CursorLook {
            size: self.cursor_size,
            color: self.color,
            shape: self.shape,
        }
    }

    /// Attraction tunables.
    #[must_use]
    pub fn attraction(&self, reduced_motion: bool) -> AttractionConfig {
        AttractionConfig {
            magnetic_factor: self.magnetic_factor,
            hover_padding: self.hover_padding,
            marker_attribute: self.marker_attribute.clone(),
            color_attribute: self.color_attribute.clone(),
            ..AttractionConfig::default()
        }
        .with_reduced_motion(reduced_motion)
    }

    /// Free-roam driver.
    #[must_use]
    pub fn motion(&self, reduced_motion: bool) -> MotionDriver {
        MotionDriver::new(self.lerp_amount)
            .with_stretch(self.stretch)
            .with_reduced_motion(reduced_motion)
    }
}
