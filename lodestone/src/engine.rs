// Copyright 2025 the Lodestone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The mounted cursor: routes host events to the motion driver and the
//! attraction controller, and produces one [`CursorFrame`] per refresh.

use core::fmt;

use kurbo::{Point, Vec2};
use lodestone_magnet::{AttractionController, AttractionState, Proxy, ProxyFrame};
use lodestone_motion::{MotionDriver, OFFSCREEN, PointerState};
use peniko::Mix;

use crate::config::{CursorConfig, DOCUMENT_FADE, TEXT_SQUASH, VIEWPORT_FADE};
use crate::cursor_type::{CursorType, CursorTypeHandle};
use crate::error::ConfigError;
use crate::host::{CursorHost, MediaFeatures};
use crate::lifecycle::{Lifecycle, Phase};

/// Pointer event delivered by a listener attached to a magnetic element.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ElementEvent {
    /// The pointer entered the element.
    Enter,
    /// The pointer left the element and its descendants.
    Leave,
    /// The pointer moved over the element, in viewport coordinates.
    Move(Point),
    /// The pointer moved out of the element.
    Out,
}

/// Everything the host needs to draw the proxy for one refresh.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CursorFrame {
    /// Animated proxy properties.
    pub proxy: ProxyFrame,
    /// Compositing mode of the proxy.
    pub blend_mode: Mix,
    /// Visual variant.
    pub cursor_type: CursorType,
}

struct Active<H: CursorHost> {
    driver: MotionDriver,
    proxy: Proxy,
    controller: AttractionController<H>,
}

impl<H: CursorHost> Active<H> {
    /// Squashes the free-roaming proxy over text; an attracted proxy is left alone.
    fn squash_over_text(&mut self, host: &H, client: Point) {
        if self.driver.reduced_motion() || self.driver.state().is_hovered() {
            return;
        }
        self.proxy.squash(host.is_text_at(client), TEXT_SQUASH);
    }
}

/// A magnetic custom cursor mounted on a host document.
///
/// The host forwards pointer, element and mutation events as they happen and
/// calls [`advance_frame`](Self::advance_frame) once per display refresh, then
/// draws [`frame`](Self::frame). On a touch-primary device with
/// [`CursorConfig::disable_on_touch`] the engine mounts disabled: it takes no
/// subscriptions and every call is a no-op.
pub struct MagneticCursor<H: CursorHost> {
    host: H,
    config: CursorConfig,
    lifecycle: Lifecycle<H>,
    active: Option<Active<H>>,
    cursor_type: CursorTypeHandle,
}

impl<H: CursorHost> fmt::Debug for MagneticCursor<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("MagneticCursor");
        s.field("config", &self.config)
            .field("lifecycle", &self.lifecycle)
            .field("cursor_type", &self.cursor_type.get());
        if let Some(active) = &self.active {
            s.field("pointer", active.driver.state())
                .field("controller", &active.controller);
        }
        s.finish_non_exhaustive()
    }
}

impl<H: CursorHost> MagneticCursor<H> {
    /// Validates `config`, subscribes to the host and registers every marked
    /// element already in the document.
    pub fn mount(config: CursorConfig, mut host: H) -> Result<Self, ConfigError> {
        config.validate()?;
        let lifecycle = Lifecycle::mount(&mut host, config.disable_on_touch);
        let active = (lifecycle.phase() == Phase::Mounted).then(|| {
            let reduced = lifecycle.media().contains(MediaFeatures::REDUCED_MOTION);
            let look = config.look();
            Active {
                driver: config.motion(reduced),
                proxy: Proxy::new(&look, OFFSCREEN),
                controller: AttractionController::new(config.attraction(reduced), look),
            }
        });
        let mut cursor = Self {
            host,
            config,
            lifecycle,
            active,
            cursor_type: CursorTypeHandle::new(),
        };
        cursor.nodes_added();
        Ok(cursor)
    }

    /// Uses `handle` for the cursor variant instead of a private one, so
    /// components holding a clone can switch it.
    #[must_use]
    pub fn with_cursor_type(mut self, handle: CursorTypeHandle) -> Self {
        self.cursor_type = handle;
        self
    }

    /// Handle to the cursor variant. Clones share the value.
    #[must_use]
    pub fn cursor_type(&self) -> &CursorTypeHandle {
        &self.cursor_type
    }

    /// Configuration fixed at mount.
    #[must_use]
    pub fn config(&self) -> &CursorConfig {
        &self.config
    }

    /// The host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host, for tests and embedders that drive the
    /// document through it.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    /// Returns `true` unless the engine mounted disabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.active.is_some()
    }

    /// Media features sampled at mount.
    #[must_use]
    pub fn media_features(&self) -> MediaFeatures {
        self.lifecycle.media()
    }

    /// Returns `true` while the engine keeps the platform cursor hidden.
    #[must_use]
    pub fn native_cursor_hidden(&self) -> bool {
        self.lifecycle.native_cursor_hidden()
    }

    /// Last route seen by [`route_changed`](Self::route_changed).
    #[must_use]
    pub fn route(&self) -> Option<&str> {
        self.lifecycle.route()
    }

    /// Smoothed pointer state.
    #[must_use]
    pub fn pointer(&self) -> Option<&PointerState> {
        self.active.as_ref().map(|a| a.driver.state())
    }

    /// Proxy properties as of the last frame.
    #[must_use]
    pub fn proxy(&self) -> Option<ProxyFrame> {
        self.active.as_ref().map(|a| a.proxy.frame())
    }

    /// Everything needed to draw the proxy.
    #[must_use]
    pub fn frame(&self) -> Option<CursorFrame> {
        self.proxy().map(|proxy| CursorFrame {
            proxy,
            blend_mode: self.config.blend_mode,
            cursor_type: self.cursor_type.get(),
        })
    }

    /// Element currently attracting the proxy.
    #[must_use]
    pub fn hovered_element(&self) -> Option<&H::Element> {
        self.active.as_ref()?.controller.session()
    }

    /// Attraction phase of `element`, or `None` if it is not registered.
    #[must_use]
    pub fn attraction_state(&self, element: &H::Element) -> Option<AttractionState> {
        self.active.as_ref()?.controller.state_of(element)
    }

    /// Magnetic translation the host applies to `element`.
    #[must_use]
    pub fn element_translation(&self, element: &H::Element) -> Option<Vec2> {
        self.active.as_ref()?.controller.translation(element)
    }

    /// Number of registered magnetic elements.
    #[must_use]
    pub fn registered_len(&self) -> usize {
        self.active
            .as_ref()
            .map_or(0, |a| a.controller.registry().len())
    }

    /// Number of listeners the engine holds on the host.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.active
            .as_ref()
            .map_or(0, |a| a.controller.registry().listener_count())
    }

    /// Document-level pointer move, in viewport coordinates.
    ///
    /// The first move places the proxy without animation. Moves outside the
    /// viewport fade the proxy out and end any hover session without moving
    /// the target. Moves over text squash the free-roaming proxy.
    pub fn pointer_move(&mut self, client: Point) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        let viewport = self.host.viewport();
        let inside = (0.0..=viewport.width).contains(&client.x)
            && (0.0..=viewport.height).contains(&client.y);

        if !active.driver.state().is_initialized() {
            active.driver.pointer_moved(client, self.config.cursor_size);
            active.proxy.place(active.driver.state().current());
            if inside {
                active.proxy.show();
                active.squash_over_text(&self.host, client);
            }
            return;
        }
        if !inside {
            active.proxy.fade_to(0.0, VIEWPORT_FADE);
            active
                .controller
                .end_session(active.driver.state_mut(), &mut active.proxy);
            return;
        }
        active.driver.pointer_moved(client, self.config.cursor_size);
        if active.proxy.target_opacity() < 1.0 {
            active.proxy.fade_to(1.0, VIEWPORT_FADE);
        }
        active.squash_over_text(&self.host, client);
    }

    /// The pointer left the document.
    pub fn pointer_left_document(&mut self) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        active.proxy.fade_to(0.0, DOCUMENT_FADE);
        active
            .controller
            .end_session(active.driver.state_mut(), &mut active.proxy);
    }

    /// The pointer re-entered the document.
    pub fn pointer_entered_document(&mut self) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        if active.driver.state().is_initialized() {
            active.proxy.fade_to(1.0, DOCUMENT_FADE);
        }
    }

    /// Event from a listener attached to `element`. Unknown elements are ignored.
    pub fn element_event(&mut self, element: &H::Element, event: ElementEvent) {
        let Self { host, active, .. } = self;
        let Some(active) = active.as_mut() else {
            return;
        };
        let Active {
            driver,
            proxy,
            controller,
        } = active;
        match event {
            ElementEvent::Enter => {
                controller.enter(host, element, driver.state_mut(), proxy);
            }
            ElementEvent::Leave => controller.leave(element, driver.state_mut(), proxy),
            ElementEvent::Move(position) => controller.pointer_moved(element, position),
            ElementEvent::Out => controller.out(element, driver.state_mut(), proxy),
        }
    }

    /// Nodes were added somewhere in the document; registers new marked
    /// elements.
    pub fn nodes_added(&mut self) {
        let Self { host, active, .. } = self;
        if let Some(active) = active.as_mut() {
            active.controller.scan(host);
        }
    }

    /// Nodes were removed; unregisters elements that left the document.
    pub fn nodes_removed(&mut self) {
        let Self { host, active, .. } = self;
        if let Some(active) = active.as_mut() {
            active
                .controller
                .prune(host, active.driver.state_mut(), &mut active.proxy);
        }
    }

    /// The route changed to `path`.
    ///
    /// A new path ends any hover session, snaps the proxy to its default look
    /// where it stands and rescans the document.
    pub fn route_changed(&mut self, path: &str) {
        if self.active.is_none() || !self.lifecycle.route_changed(path) {
            return;
        }
        let Self { host, active, .. } = self;
        let Some(active) = active.as_mut() else {
            return;
        };
        active
            .controller
            .reset(active.driver.state_mut(), &mut active.proxy);
        let at = active.proxy.position();
        active.driver.state_mut().resume_from(at);
        let added = active.controller.scan(host);
        tracing::debug!(path, added, "route changed; cursor reset");
    }

    /// Advances one display refresh of `dt` seconds.
    ///
    /// Applies the pointer move queued during the frame, steps free-roam
    /// motion unless a hover session or a transition owns the proxy position,
    /// then advances every transition. While a transition owns the position
    /// the smoothed pointer follows the proxy, so free roam resumes from
    /// where the transition ended.
    pub fn advance_frame(&mut self, dt: f64) {
        let Self { host, active, .. } = self;
        let Some(active) = active.as_mut() else {
            return;
        };
        active
            .controller
            .flush(host, active.driver.state_mut(), &mut active.proxy);

        let owned = active.proxy.is_position_animating();
        let free_roam = if owned {
            None
        } else {
            active.driver.advance_frame()
        };
        if let Some(frame) = free_roam {
            active.proxy.apply_free_roam(&frame);
        }

        active.proxy.tick(dt);
        active.controller.tick(dt);

        if owned && !active.driver.state().is_hovered() {
            let at = active.proxy.position();
            active.driver.state_mut().resume_from(at);
        }
    }

    /// Releases every subscription and listener and hands the host back.
    pub fn unmount(mut self) -> H {
        if let Some(mut active) = self.active.take() {
            let detached = active
                .controller
                .teardown(&mut self.host, active.driver.state_mut());
            tracing::debug!(detached, "listeners detached");
        }
        self.lifecycle.release(&mut self.host);
        self.host
    }
}
