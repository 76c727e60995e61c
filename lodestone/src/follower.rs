// Copyright 2025 the Lodestone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement of a label or badge that trails the pointer.

use kurbo::{Point, Rect, Size, Vec2};

/// Default gap between pointer and follower.
pub const DEFAULT_FOLLOWER_GAP: f64 = 20.0;

/// Pointer size assumed when the pointer glyph has not been measured.
pub const DEFAULT_POINTER_SIZE: Size = Size::new(20.0, 20.0);

/// Side or corner of the pointer the follower sits on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum FollowerAlign {
    /// Centered on the pointer.
    Center,
    /// Above.
    Top,
    /// Above and to the left.
    TopLeft,
    /// Above and to the right.
    TopRight,
    /// Below.
    Bottom,
    /// Below and to the left.
    BottomLeft,
    /// Below and to the right.
    #[default]
    BottomRight,
    /// To the left.
    Left,
    /// To the right.
    Right,
}

impl FollowerAlign {
    /// Every alignment.
    pub const ALL: [Self; 9] = [
        Self::Center,
        Self::Top,
        Self::TopLeft,
        Self::TopRight,
        Self::Bottom,
        Self::BottomLeft,
        Self::BottomRight,
        Self::Left,
        Self::Right,
    ];

    /// Distance subtracted from the pointer for a follower of `size`.
    #[must_use]
    pub fn offset(self, size: Size, gap: f64) -> Vec2 {
        let (w, h) = (size.width, size.height);
        match self {
            Self::Center => Vec2::new(w / 2.0, h / 2.0),
            Self::Top => Vec2::new(w / 2.0, h + gap),
            Self::TopLeft => Vec2::new(w + gap, h + gap),
            Self::TopRight => Vec2::new(-gap, h + gap),
            Self::Bottom => Vec2::new(w / 2.0, -gap),
            Self::BottomLeft => Vec2::new(w + gap, -gap),
            Self::BottomRight => Vec2::new(-gap, -gap),
            Self::Left => Vec2::new(w + gap, h / 2.0),
            Self::Right => Vec2::new(-gap, h / 2.0),
        }
    }
}

/// Center of a follower of size `follower` trailing a pointer at `pointer`.
///
/// ```rust
/// use kurbo::{Point, Size};
/// use lodestone::{DEFAULT_POINTER_SIZE, FollowerAlign, follower_position};
///
/// let at = follower_position(
///     Point::new(100.0, 100.0),
///     Size::new(40.0, 10.0),
///     DEFAULT_POINTER_SIZE,
///     FollowerAlign::BottomRight,
///     20.0,
/// );
/// assert_eq!(at, Point::new(130.0, 130.0));
/// ```
#[must_use]
pub fn follower_position(
    pointer: Point,
    follower: Size,
    pointer_size: Size,
    align: FollowerAlign,
    gap: f64,
) -> Point {
    let offset = align.offset(follower, gap);
    Point::new(
        pointer.x - offset.x + pointer_size.width / 2.0,
        pointer.y - offset.y + pointer_size.height / 2.0,
    )
}

/// Rectangle covered by the follower, centered on [`follower_position`].
#[must_use]
pub fn follower_rect(
    pointer: Point,
    follower: Size,
    pointer_size: Size,
    align: FollowerAlign,
    gap: f64,
) -> Rect {
    Rect::from_center_size(
        follower_position(pointer, follower, pointer_size, align, gap),
        follower,
    )
}
