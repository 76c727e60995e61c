// Copyright 2025 the Lodestone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mount/unmount bookkeeping: host subscriptions, the native cursor and the
//! current route.

use core::fmt;

use crate::host::{CursorHost, MediaFeatures};

/// Where the engine is in its life.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Mounted on a touch-primary device with `disable_on_touch`; every call
    /// is a no-op.
    Disabled,
    /// Subscribed and drawing.
    Mounted,
    /// Subscriptions returned to the host.
    Unmounted,
}

/// Holds the host tokens between mount and unmount.
pub(crate) struct Lifecycle<H: CursorHost> {
    phase: Phase,
    media: MediaFeatures,
    frames: Option<H::FrameSubscription>,
    observer: Option<H::MutationObserver>,
    native_cursor_hidden: bool,
    route: Option<String>,
}

impl<H: CursorHost> fmt::Debug for Lifecycle<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lifecycle")
            .field("phase", &self.phase)
            .field("media", &self.media)
            .field("frames", &self.frames.is_some())
            .field("observer", &self.observer.is_some())
            .field("native_cursor_hidden", &self.native_cursor_hidden)
            .field("route", &self.route)
            .finish()
    }
}

impl<H: CursorHost> Lifecycle<H> {
    /// Samples media features and, unless disabled, takes every subscription
    /// and hides the native cursor.
    pub(crate) fn mount(host: &mut H, disable_on_touch: bool) -> Self {
        let media = host.media_features();
        let mut lifecycle = Self {
            phase: Phase::Disabled,
            media,
            frames: None,
            observer: None,
            native_cursor_hidden: false,
            route: None,
        };
        if disable_on_touch && media.contains(MediaFeatures::TOUCH_PRIMARY) {
            tracing::debug!(?media, "touch-primary device; cursor disabled");
            return lifecycle;
        }
        lifecycle.frames = Some(host.request_frames());
        lifecycle.observer = Some(host.observe_mutations());
        host.set_native_cursor_hidden(true);
        lifecycle.native_cursor_hidden = true;
        lifecycle.phase = Phase::Mounted;
        tracing::debug!(?media, "cursor mounted");
        lifecycle
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn media(&self) -> MediaFeatures {
        self.media
    }

    pub(crate) fn native_cursor_hidden(&self) -> bool {
        self.native_cursor_hidden
    }

    pub(crate) fn route(&self) -> Option<&str> {
        self.route.as_deref()
    }

    /// Records `path`; returns `true` if it differs from the last one seen.
    pub(crate) fn route_changed(&mut self, path: &str) -> bool {
        if self.route.as_deref() == Some(path) {
            return false;
        }
        self.route = Some(path.to_owned());
        true
    }

    /// Returns every token to the host and restores the native cursor.
    ///
    /// Safe to call more than once; each token is released exactly once.
    pub(crate) fn release(&mut self, host: &mut H) {
        if let Some(frames) = self.frames.take() {
            host.cancel_frames(frames);
        }
        if let Some(observer) = self.observer.take() {
            host.disconnect_mutations(observer);
        }
        if self.native_cursor_hidden {
            host.set_native_cursor_hidden(false);
            self.native_cursor_hidden = false;
        }
        if self.phase == Phase::Mounted {
            tracing::debug!("cursor unmounted");
        }
        self.phase = Phase::Unmounted;
    }
}
