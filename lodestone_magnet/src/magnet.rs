// Copyright 2025 the Lodestone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-element attraction state: hover phase, coalesced pointer moves and the
//! magnetic translation of the element itself.

use kurbo::{Point, Rect, Vec2};
use lodestone_tween::{QuickTo, TweenSpec};

/// Attraction phase of one registered element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum AttractionState {
    /// Not hovered.
    #[default]
    Idle,
    /// Hovered; the proxy is fitted to the element.
    Attracted,
}

/// Translation pulling an element toward `pointer`, damped by `factor`.
///
/// The offset is measured from the center of `bounds`.
#[must_use]
pub fn magnetic_offset(pointer: Point, bounds: Rect, factor: f64) -> Vec2 {
    (pointer - bounds.center()) * factor
}

/// Attraction bookkeeping for one element.
#[derive(Clone, Debug)]
pub struct Magnet {
    state: AttractionState,
    pending: Option<Point>,
    translation: QuickTo<Vec2>,
}

impl Magnet {
    /// Creates an idle magnet whose translation moves with `spring`.
    #[must_use]
    pub fn new(spring: TweenSpec) -> Self {
        Self {
            state: AttractionState::Idle,
            pending: None,
            translation: QuickTo::new(Vec2::ZERO, spring),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn state(&self) -> AttractionState {
        self.state
    }

    /// Returns `true` while attracted.
    #[must_use]
    pub fn is_attracted(&self) -> bool {
        self.state == AttractionState::Attracted
    }

    /// Present translation of the element.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation.value()
    }

    /// Translation the element is heading to.
    #[must_use]
    pub fn translation_target(&self) -> Vec2 {
        self.translation.target()
    }

    /// Pointer position waiting for the next frame, if any.
    #[must_use]
    pub fn pending(&self) -> Option<Point> {
        self.pending
    }

    pub(crate) fn attract(&mut self) {
        self.state = AttractionState::Attracted;
    }

    /// Back to idle; drops any queued move and sends the element home.
    pub(crate) fn release(&mut self) {
        self.state = AttractionState::Idle;
        self.pending = None;
        self.translation.retarget(Vec2::ZERO);
    }

    /// Snaps home and idles.
    pub(crate) fn reset(&mut self) {
        self.state = AttractionState::Idle;
        self.pending = None;
        self.translation.set(Vec2::ZERO);
    }

    /// Queues a pointer position for the next frame.
    ///
    /// Only the latest position per frame is kept. Returns `true` if this is
    /// the first move queued since the last [`take_pending`](Self::take_pending).
    pub fn queue_move(&mut self, pointer: Point) -> bool {
        if !self.is_attracted() {
            return false;
        }
        self.pending.replace(pointer).is_none()
    }

    /// Takes the queued pointer position.
    pub fn take_pending(&mut self) -> Option<Point> {
        self.pending.take()
    }

    /// Heads toward `offset`.
    pub fn pull(&mut self, offset: Vec2) {
        self.translation.retarget(offset);
    }

    /// Advances the translation by `dt` seconds.
    pub fn tick(&mut self, dt: f64) -> bool {
        self.translation.tick(dt)
    }
}
