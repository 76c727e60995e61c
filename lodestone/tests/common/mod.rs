// Copyright 2025 the Lodestone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A recording in-memory document for integration tests.

#![allow(
    missing_docs,
    reason = "Integration-test helper module; not part of the public API."
)]
#![allow(
    dead_code,
    reason = "Each test binary uses a different subset of the helpers."
)]

use hashbrown::HashMap;
use kurbo::{Point, Rect, Size};
use lodestone::{
    CursorConfig, CursorHost, ElementEvent, ElementHost, MagneticCursor, MediaFeatures,
    PointerEventKind,
};

pub(crate) const FRAME: f64 = 1.0 / 60.0;

#[derive(Debug, Default)]
pub(crate) struct Page {
    elements: Vec<(u32, Rect)>,
    pub(crate) colors: HashMap<u32, String>,
    pub(crate) radii: HashMap<u32, f64>,
    /// Regions showing text content.
    pub(crate) text: Vec<Rect>,
    live: HashMap<u64, (u32, PointerEventKind)>,
    next_listener: u64,
    pub(crate) media: MediaFeatures,
    pub(crate) viewport: Size,
    pub(crate) frames_requested: usize,
    pub(crate) frames_cancelled: usize,
    pub(crate) observers_started: usize,
    pub(crate) observers_stopped: usize,
    pub(crate) native_hidden: bool,
    pub(crate) native_toggles: usize,
}

impl Page {
    pub(crate) fn new() -> Self {
        Self {
            viewport: Size::new(800.0, 600.0),
            ..Self::default()
        }
    }

    pub(crate) fn with(elements: &[(u32, Rect)]) -> Self {
        let mut page = Self::new();
        page.elements = elements.to_vec();
        page
    }

    pub(crate) fn insert(&mut self, id: u32, bounds: Rect) {
        self.elements.push((id, bounds));
    }

    pub(crate) fn remove(&mut self, id: u32) {
        self.elements.retain(|(e, _)| *e != id);
    }

    /// Listeners currently attached.
    pub(crate) fn live_listeners(&self) -> usize {
        self.live.len()
    }

    /// Listeners currently attached to `id`.
    pub(crate) fn listeners_on(&self, id: u32) -> usize {
        self.live.values().filter(|(e, _)| *e == id).count()
    }
}

impl ElementHost for Page {
    type Element = u32;
    type Listener = u64;

    fn marked_elements(&self, _attribute: &str, out: &mut Vec<u32>) {
        out.extend(self.elements.iter().map(|(id, _)| *id));
    }

    fn is_connected(&self, element: &u32) -> bool {
        self.elements.iter().any(|(id, _)| id == element)
    }

    fn bounds(&self, element: &u32) -> Option<Rect> {
        self.elements
            .iter()
            .find(|(id, _)| id == element)
            .map(|(_, bounds)| *bounds)
    }

    fn corner_radius(&self, element: &u32) -> f64 {
        self.radii.get(element).copied().unwrap_or(0.0)
    }

    fn attribute(&self, element: &u32, _name: &str) -> Option<String> {
        self.colors.get(element).cloned()
    }

    fn attach(&mut self, element: &u32, kind: PointerEventKind) -> u64 {
        self.next_listener += 1;
        self.live.insert(self.next_listener, (*element, kind));
        self.next_listener
    }

    fn detach(&mut self, element: &u32, listener: u64) {
        let attached = self.live.remove(&listener);
        assert_eq!(
            attached.map(|(e, _)| e),
            Some(*element),
            "listener {listener} detached twice or from the wrong element"
        );
    }
}

impl CursorHost for Page {
    type FrameSubscription = u32;
    type MutationObserver = u32;

    fn media_features(&self) -> MediaFeatures {
        self.media
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn request_frames(&mut self) -> u32 {
        self.frames_requested += 1;
        7
    }

    fn cancel_frames(&mut self, subscription: u32) {
        assert_eq!(subscription, 7, "unknown frame subscription");
        self.frames_cancelled += 1;
    }

    fn observe_mutations(&mut self) -> u32 {
        self.observers_started += 1;
        11
    }

    fn disconnect_mutations(&mut self, observer: u32) {
        assert_eq!(observer, 11, "unknown mutation observer");
        self.observers_stopped += 1;
    }

    fn set_native_cursor_hidden(&mut self, hidden: bool) {
        self.native_hidden = hidden;
        self.native_toggles += 1;
    }

    fn is_text_at(&self, point: Point) -> bool {
        self.text.iter().any(|region| region.contains(point))
    }
}

/// The button used throughout: `{ x: 50, y: 50, w: 80, h: 30 }`.
pub(crate) fn button() -> Rect {
    Rect::from_origin_size((50.0, 50.0), (80.0, 30.0))
}

pub(crate) fn mount(page: Page) -> MagneticCursor<Page> {
    mount_with(CursorConfig::default(), page)
}

pub(crate) fn mount_with(config: CursorConfig, page: Page) -> MagneticCursor<Page> {
    MagneticCursor::mount(config, page).expect("valid config")
}

/// Runs `n` frames of [`FRAME`] seconds.
pub(crate) fn frames(cursor: &mut MagneticCursor<Page>, n: usize) {
    for _ in 0..n {
        cursor.advance_frame(FRAME);
    }
}

pub(crate) fn enter(cursor: &mut MagneticCursor<Page>, id: u32) {
    cursor.element_event(&id, ElementEvent::Enter);
}
