// Copyright 2025 the Lodestone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attraction controller: drives the proxy and the hovered element through
//! `Idle → Attracted → Idle`.
//!
//! At most one element is attracted at a time (the hover session). While a
//! session is active the controller owns the proxy transform and the shared
//! [`PointerState`] is marked hovered, which suspends free-roam motion.
//!
//! Every transition tolerates elements that left the document: an attracted
//! element that disappears is treated as if the pointer had left it.

use alloc::string::String;
use core::fmt;

use kurbo::{Point, Vec2};
use lodestone_motion::PointerState;
use lodestone_tween::{Easing, TweenSpec};
use peniko::Color;
use peniko::color::{Srgb, parse_color};

use crate::host::ElementHost;
use crate::magnet::{AttractionState, magnetic_offset};
use crate::proxy::{CursorLook, Proxy, hover_frame};
use crate::registry::HoverRegistry;

/// Default marker attribute opting an element into magnetic behavior.
pub const DEFAULT_MARKER_ATTRIBUTE: &str = "data-magnetic";

/// Default attribute overriding the proxy color while an element is attracted.
pub const DEFAULT_COLOR_ATTRIBUTE: &str = "data-magnetic-color";

/// Tunables of the attraction behavior.
#[derive(Clone, Debug, PartialEq)]
pub struct AttractionConfig {
    /// How strongly a hovered element follows the pointer, as a fraction of
    /// the pointer's distance from the element center.
    pub magnetic_factor: f64,
    /// Extra space around the element covered by the proxy, per side.
    pub hover_padding: f64,
    /// Attribute marking magnetic elements.
    pub marker_attribute: String,
    /// Attribute carrying a per-element proxy color.
    pub color_attribute: String,
    /// Transition fitting the proxy to an element.
    pub attach: TweenSpec,
    /// Transition restoring the proxy's default look.
    pub detach: TweenSpec,
    /// Transition of the element's magnetic translation.
    pub spring: TweenSpec,
}

impl Default for AttractionConfig {
    fn default() -> Self {
        Self {
            magnetic_factor: 0.2,
            hover_padding: 8.0,
            marker_attribute: DEFAULT_MARKER_ATTRIBUTE.into(),
            color_attribute: DEFAULT_COLOR_ATTRIBUTE.into(),
            attach: TweenSpec::new(0.4, Easing::Power3Out),
            detach: TweenSpec::new(0.4, Easing::Power3Out),
            spring: TweenSpec::new(1.0, Easing::ELASTIC_OUT),
        }
    }
}

impl AttractionConfig {
    /// Shortens the proxy transitions for users preferring reduced motion.
    #[must_use]
    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        if reduced {
            self.attach.duration = 0.1;
            self.detach.duration = 0.1;
        }
        self
    }
}

/// Owns the hover registry and the hover session.
pub struct AttractionController<H: ElementHost> {
    config: AttractionConfig,
    look: CursorLook,
    registry: HoverRegistry<H::Element, H::Listener>,
    session: Option<H::Element>,
}

impl<H: ElementHost> fmt::Debug for AttractionController<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttractionController")
            .field("config", &self.config)
            .field("look", &self.look)
            .field("registered", &self.registry.len())
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl<H: ElementHost> AttractionController<H> {
    /// Creates a controller with an empty registry.
    #[must_use]
    pub fn new(config: AttractionConfig, look: CursorLook) -> Self {
        let registry = HoverRegistry::new(config.spring);
        Self {
            config,
            look,
            registry,
            session: None,
        }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &AttractionConfig {
        &self.config
    }

    /// Default look restored on every leave.
    #[must_use]
    pub fn look(&self) -> &CursorLook {
        &self.look
    }

    /// Registered elements.
    #[must_use]
    pub fn registry(&self) -> &HoverRegistry<H::Element, H::Listener> {
        &self.registry
    }

    /// Element currently attracting the proxy.
    #[must_use]
    pub fn session(&self) -> Option<&H::Element> {
        self.session.as_ref()
    }

    /// Attraction phase of `element`, or `None` if not registered.
    #[must_use]
    pub fn state_of(&self, element: &H::Element) -> Option<AttractionState> {
        self.registry.get(element).map(|r| r.magnet().state())
    }

    /// Present magnetic translation of `element`.
    #[must_use]
    pub fn translation(&self, element: &H::Element) -> Option<Vec2> {
        self.registry.get(element).map(|r| r.magnet().translation())
    }

    /// Translation `element` is heading to.
    #[must_use]
    pub fn translation_target(&self, element: &H::Element) -> Option<Vec2> {
        self.registry
            .get(element)
            .map(|r| r.magnet().translation_target())
    }

    /// Registers marked elements not yet registered.
    pub fn scan(&mut self, host: &mut H) -> usize {
        let attribute = self.config.marker_attribute.as_str();
        self.registry.scan(host, attribute)
    }

    /// Pointer entered `element`: fit the proxy over it and start a session.
    ///
    /// Returns `false` and changes nothing if the element is not registered or
    /// has no bounds (already detached).
    pub fn enter(
        &mut self,
        host: &H,
        element: &H::Element,
        pointer: &mut PointerState,
        proxy: &mut Proxy,
    ) -> bool {
        if !self.registry.contains(element) {
            return false;
        }
        let Some(bounds) = host.bounds(element) else {
            tracing::debug!(?element, "ignoring enter on detached element");
            return false;
        };
        if let Some(previous) = self.session.take() {
            if previous != *element {
                if let Some(entry) = self.registry.get_mut(&previous) {
                    entry.magnet_mut().release();
                }
            }
        }

        let color = self.color_for(host, element);
        let radius = host.corner_radius(element);
        proxy.fit(
            hover_frame(bounds, self.config.hover_padding),
            radius,
            color,
            self.config.attach,
        );
        pointer.set_hovered(true);
        if let Some(entry) = self.registry.get_mut(element) {
            entry.magnet_mut().attract();
        }
        self.session = Some(element.clone());
        true
    }

    /// Pointer moved over `element`; queued until the next [`flush`](Self::flush).
    pub fn pointer_moved(&mut self, element: &H::Element, position: Point) {
        if let Some(entry) = self.registry.get_mut(element) {
            entry.magnet_mut().queue_move(position);
        }
    }

    /// Pointer left `element`.
    ///
    /// Ends the session if `element` owns it; the element is sent home either way.
    pub fn leave(
        &mut self,
        element: &H::Element,
        pointer: &mut PointerState,
        proxy: &mut Proxy,
    ) {
        if self.session.as_ref() == Some(element) {
            self.end_session(pointer, proxy);
        } else if let Some(entry) = self.registry.get_mut(element) {
            entry.magnet_mut().release();
        }
    }

    /// Pointer moved out of `element`; handled like [`leave`](Self::leave).
    pub fn out(
        &mut self,
        element: &H::Element,
        pointer: &mut PointerState,
        proxy: &mut Proxy,
    ) {
        self.leave(element, pointer, proxy);
    }

    /// Applies the pointer move queued during the last frame, if any.
    ///
    /// An attracted element that no longer reports bounds ends the session.
    pub fn flush(&mut self, host: &H, pointer: &mut PointerState, proxy: &mut Proxy) {
        let Some(element) = self.session.clone() else {
            return;
        };
        let bounds = if host.is_connected(&element) {
            host.bounds(&element)
        } else {
            None
        };
        let Some(bounds) = bounds else {
            tracing::debug!(?element, "attracted element detached; releasing");
            self.end_session(pointer, proxy);
            return;
        };
        let factor = self.config.magnetic_factor;
        if let Some(entry) = self.registry.get_mut(&element) {
            let magnet = entry.magnet_mut();
            if let Some(position) = magnet.take_pending() {
                magnet.pull(magnetic_offset(position, bounds, factor));
            }
        }
    }

    /// Ends the hover session, if any, animating the proxy back to its
    /// default look at the pointer target.
    ///
    /// Returns `true` if a session was ended.
    pub fn end_session(&mut self, pointer: &mut PointerState, proxy: &mut Proxy) -> bool {
        pointer.set_hovered(false);
        let Some(element) = self.session.take() else {
            return false;
        };
        proxy.restore(&self.look, pointer.target(), self.config.detach);
        if let Some(entry) = self.registry.get_mut(&element) {
            entry.magnet_mut().release();
        }
        true
    }

    /// Forces every element idle and snaps the proxy to its default look in place.
    pub fn reset(&mut self, pointer: &mut PointerState, proxy: &mut Proxy) {
        pointer.set_hovered(false);
        self.session = None;
        for entry in self.registry.iter_mut() {
            if entry.magnet().is_attracted() {
                entry.magnet_mut().reset();
            }
        }
        proxy.reset(&self.look);
    }

    /// Unregisters disconnected elements, ending the session if its element
    /// was among them. Returns how many were removed.
    pub fn prune(
        &mut self,
        host: &mut H,
        pointer: &mut PointerState,
        proxy: &mut Proxy,
    ) -> usize {
        let removed = self.registry.prune(host);
        let lost_session = self
            .session
            .as_ref()
            .is_some_and(|element| removed.contains(element));
        if lost_session {
            tracing::debug!("attracted element removed; releasing");
            self.session = None;
            pointer.set_hovered(false);
            proxy.restore(&self.look, pointer.target(), self.config.detach);
        }
        removed.len()
    }

    /// Drops the session and detaches every listener.
    ///
    /// Returns the number of listeners detached.
    pub fn teardown(&mut self, host: &mut H, pointer: &mut PointerState) -> usize {
        self.session = None;
        pointer.set_hovered(false);
        self.registry.teardown(host)
    }

    /// Advances every element's translation by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        for entry in self.registry.iter_mut() {
            entry.magnet_mut().tick(dt);
        }
    }

    fn color_for(&self, host: &H, element: &H::Element) -> Color {
        let Some(raw) = host.attribute(element, &self.config.color_attribute) else {
            return self.look.color;
        };
        match parse_color(raw.trim()) {
            Ok(color) => color.to_alpha_color::<Srgb>(),
            Err(_) => {
                tracing::warn!(
                    ?element,
                    color = %raw,
                    "unparsable magnetic color; using default"
                );
                self.look.color
            }
        }
    }
}
