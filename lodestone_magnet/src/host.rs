// Copyright 2025 the Lodestone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The element-facing half of the host interface.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use kurbo::Rect;

/// Pointer events a registered element listens for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Pointer entered the element.
    Enter,
    /// Pointer left the element.
    Leave,
    /// Pointer moved within the element.
    Move,
    /// Pointer moved out of the element or into a descendant.
    Out,
}

impl PointerEventKind {
    /// Every kind, in attach order.
    pub const ALL: [Self; 4] = [Self::Enter, Self::Leave, Self::Move, Self::Out];
}

/// Document access needed to register and attract elements.
///
/// `Element` is the host's handle for a document node. The engine never owns
/// the node; it only compares handles and hands them back to the host.
/// `Listener` is whatever token the host needs to later remove a listener it
/// attached.
///
/// Queries about elements that have left the document should answer
/// conservatively: `is_connected` returns `false` and `bounds` returns `None`.
pub trait ElementHost {
    /// Handle to a document element.
    type Element: Clone + Eq + Hash + fmt::Debug;
    /// Token for one attached listener.
    type Listener;

    /// Appends every connected element carrying `attribute` to `out`.
    fn marked_elements(&self, attribute: &str, out: &mut Vec<Self::Element>);

    /// Returns `true` while `element` is part of the document.
    fn is_connected(&self, element: &Self::Element) -> bool;

    /// Viewport-space bounding box, or `None` once detached.
    fn bounds(&self, element: &Self::Element) -> Option<Rect>;

    /// Resolved corner radius in pixels.
    fn corner_radius(&self, element: &Self::Element) -> f64;

    /// Value of the named attribute, if present.
    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    /// Attaches a listener that forwards `kind` events for `element` to the engine.
    fn attach(&mut self, element: &Self::Element, kind: PointerEventKind) -> Self::Listener;

    /// Removes a listener previously returned by [`attach`](Self::attach).
    fn detach(&mut self, element: &Self::Element, listener: Self::Listener);
}
