// Copyright 2025 the Lodestone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bitflags::bitflags;
use kurbo::{Point, Size};
use lodestone_magnet::ElementHost;

bitflags! {
    /// User and device preferences sampled once at mount.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MediaFeatures: u8 {
        /// The primary pointer is coarse (a finger); there is no hover.
        const TOUCH_PRIMARY = 1;
        /// The user asked for reduced motion.
        const REDUCED_MOTION = 1 << 1;
    }
}

/// Everything the cursor engine needs from the embedding document.
///
/// Subscriptions are opaque tokens: the engine holds each one while mounted
/// and hands it back exactly once on unmount.
pub trait CursorHost: ElementHost {
    /// Token for the per-refresh frame callback.
    type FrameSubscription;
    /// Token for the subtree mutation observer.
    type MutationObserver;

    /// Media features of the current device.
    fn media_features(&self) -> MediaFeatures;

    /// Size of the visible viewport.
    fn viewport(&self) -> Size;

    /// Starts delivering frames. The host calls
    /// [`MagneticCursor::advance_frame`](crate::MagneticCursor::advance_frame)
    /// once per refresh until the subscription is cancelled.
    fn request_frames(&mut self) -> Self::FrameSubscription;

    /// Stops delivering frames.
    fn cancel_frames(&mut self, subscription: Self::FrameSubscription);

    /// Starts reporting subtree mutations through
    /// [`nodes_added`](crate::MagneticCursor::nodes_added) and
    /// [`nodes_removed`](crate::MagneticCursor::nodes_removed).
    fn observe_mutations(&mut self) -> Self::MutationObserver;

    /// Stops reporting subtree mutations.
    fn disconnect_mutations(&mut self, observer: Self::MutationObserver);

    /// Hides or restores the platform cursor.
    fn set_native_cursor_hidden(&mut self, hidden: bool);

    /// Returns `true` if `point` (viewport coordinates) is over text content:
    /// a paragraph, a heading, an inline span, or anything showing a text cursor.
    ///
    /// The free-roaming proxy squashes into a caret-like shape over text.
    fn is_text_at(&self, _point: Point) -> bool {
        false
    }
}
