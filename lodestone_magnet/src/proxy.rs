// Copyright 2025 the Lodestone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The floating cursor proxy: animated visual properties and the frame the host draws.

use kurbo::{Point, Rect, Size, Vec2};
use lodestone_motion::FreeRoamFrame;
use lodestone_tween::{Animated, TweenSpec};
use peniko::Color;

/// Corner radius of [`CursorShape::Rounded`].
pub const ROUNDED_RADIUS: f64 = 8.0;

/// Default cursor edge length in pixels.
pub const DEFAULT_CURSOR_SIZE: f64 = 24.0;

/// Scale factor applied on top of free-roam scale while over text.
pub const TEXT_SQUASH_SCALE: Vec2 = Vec2::new(0.5, 1.5);

const UNIT_SCALE: Vec2 = Vec2::new(1.0, 1.0);

/// Resting outline of the cursor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum CursorShape {
    /// Fully rounded.
    #[default]
    Circle,
    /// Sharp corners.
    Square,
    /// Slightly rounded corners ([`ROUNDED_RADIUS`]).
    Rounded,
}

impl CursorShape {
    /// Corner radius for a cursor of edge length `size`.
    #[must_use]
    pub fn corner_radius(self, size: f64) -> f64 {
        match self {
            Self::Circle => size / 2.0,
            Self::Square => 0.0,
            Self::Rounded => ROUNDED_RADIUS,
        }
    }
}

/// Default look of the cursor, restored whenever no element attracts it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CursorLook {
    /// Edge length in pixels.
    pub size: f64,
    /// Fill color.
    pub color: Color,
    /// Outline.
    pub shape: CursorShape,
}

impl Default for CursorLook {
    fn default() -> Self {
        Self {
            size: DEFAULT_CURSOR_SIZE,
            color: Color::WHITE,
            shape: CursorShape::Circle,
        }
    }
}

impl CursorLook {
    /// Square size of the cursor.
    #[must_use]
    pub fn size2(&self) -> Size {
        Size::new(self.size, self.size)
    }

    /// Corner radius implied by the shape.
    #[must_use]
    pub fn corner_radius(&self) -> f64 {
        self.shape.corner_radius(self.size)
    }
}

/// Rectangle the proxy covers while attracted to an element with `bounds`.
#[must_use]
pub fn hover_frame(bounds: Rect, padding: f64) -> Rect {
    bounds.inflate(padding, padding)
}

/// Snapshot of the proxy for the host to draw.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProxyFrame {
    /// Top-left corner in viewport coordinates.
    pub position: Point,
    /// Width and height before scaling.
    pub size: Size,
    /// Corner radius in pixels.
    pub corner_radius: f64,
    /// Fill color.
    pub color: Color,
    /// Rotation in degrees.
    pub rotation_degrees: f64,
    /// Horizontal and vertical scale.
    pub scale: Vec2,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Animated state of the proxy element.
#[derive(Clone, Debug)]
pub struct Proxy {
    position: Animated<Point>,
    size: Animated<Size>,
    corner_radius: Animated<f64>,
    color: Animated<Color>,
    rotation: Animated<f64>,
    scale: Animated<Vec2>,
    squash: Animated<Vec2>,
    opacity: Animated<f64>,
}

impl Proxy {
    /// Creates a hidden proxy with `look`, resting at `position`.
    #[must_use]
    pub fn new(look: &CursorLook, position: Point) -> Self {
        Self {
            position: Animated::new(position),
            size: Animated::new(look.size2()),
            corner_radius: Animated::new(look.corner_radius()),
            color: Animated::new(look.color),
            rotation: Animated::new(0.0),
            scale: Animated::new(UNIT_SCALE),
            squash: Animated::new(UNIT_SCALE),
            opacity: Animated::new(0.0),
        }
    }

    /// Current values of every property.
    ///
    /// The reported scale is the free-roam scale times the squash factor.
    #[must_use]
    pub fn frame(&self) -> ProxyFrame {
        let scale = self.scale.value();
        let squash = self.squash.value();
        ProxyFrame {
            position: self.position.value(),
            size: self.size.value(),
            corner_radius: self.corner_radius.value(),
            color: self.color.value(),
            rotation_degrees: self.rotation.value(),
            scale: Vec2::new(scale.x * squash.x, scale.y * squash.y),
            opacity: self.opacity.value(),
        }
    }

    /// Present position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position.value()
    }

    /// Returns `true` while a transition owns the position.
    #[must_use]
    pub fn is_position_animating(&self) -> bool {
        self.position.is_animating()
    }

    /// Writes a free-roam frame.
    ///
    /// Rotation and scale are always written. Position is left alone while a
    /// transition owns it; returns whether it was written.
    pub fn apply_free_roam(&mut self, frame: &FreeRoamFrame) -> bool {
        self.rotation.set(frame.rotation_degrees);
        self.scale.set(frame.scale);
        if self.position.is_animating() {
            return false;
        }
        self.position.set(frame.position);
        true
    }

    /// Snaps the position, killing any transition on it.
    pub fn place(&mut self, position: Point) {
        self.position.set(position);
    }

    /// Fits the proxy over `frame` with the given radius and color.
    pub fn fit(&mut self, frame: Rect, corner_radius: f64, color: Color, spec: TweenSpec) {
        self.position.animate_to(frame.origin(), spec);
        self.size.animate_to(frame.size(), spec);
        self.corner_radius.animate_to(corner_radius, spec);
        self.color.animate_to(color, spec);
        self.scale.animate_to(UNIT_SCALE, spec);
        self.squash.animate_to(UNIT_SCALE, spec);
        self.rotation.animate_to(0.0, spec);
    }

    /// Animates back to `look` at `position`.
    pub fn restore(&mut self, look: &CursorLook, position: Point, spec: TweenSpec) {
        self.position.animate_to(position, spec);
        self.size.animate_to(look.size2(), spec);
        self.corner_radius.animate_to(look.corner_radius(), spec);
        self.color.animate_to(look.color, spec);
    }

    /// Snaps to `look` where the proxy currently is, killing every transition
    /// except an opacity fade.
    pub fn reset(&mut self, look: &CursorLook) {
        self.position.kill();
        self.size.set(look.size2());
        self.corner_radius.set(look.corner_radius());
        self.color.set(look.color);
        self.scale.set(UNIT_SCALE);
        self.squash.set(UNIT_SCALE);
        self.rotation.set(0.0);
    }

    /// Heads toward [`TEXT_SQUASH_SCALE`] when `over_text`, otherwise back to
    /// no squash. A transition already heading there is left running.
    pub fn squash(&mut self, over_text: bool, spec: TweenSpec) {
        let to = if over_text {
            TEXT_SQUASH_SCALE
        } else {
            UNIT_SCALE
        };
        if self.squash.target() != to {
            self.squash.animate_to(to, spec);
        }
    }

    /// Squash factor the proxy is heading to.
    #[must_use]
    pub fn target_squash(&self) -> Vec2 {
        self.squash.target()
    }

    /// Fades opacity to `opacity`.
    pub fn fade_to(&mut self, opacity: f64, spec: TweenSpec) {
        self.opacity.animate_to(opacity, spec);
    }

    /// Makes the proxy fully opaque at once.
    pub fn show(&mut self) {
        self.opacity.set(1.0);
    }

    /// Opacity the proxy is heading to.
    #[must_use]
    pub fn target_opacity(&self) -> f64 {
        self.opacity.target()
    }

    /// Advances every transition by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        self.position.tick(dt);
        self.size.tick(dt);
        self.corner_radius.tick(dt);
        self.color.tick(dt);
        self.rotation.tick(dt);
        self.scale.tick(dt);
        self.squash.tick(dt);
        self.opacity.tick(dt);
    }
}
