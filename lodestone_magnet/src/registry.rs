// Copyright 2025 the Lodestone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover registry: the set of marked elements and the listeners attached to them.
//!
//! Registrations are kept in an ordered list with a hash index for identity
//! lookups, so every registration can always be enumerated and torn down.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Rect;
//! use lodestone_magnet::{ElementHost, HoverRegistry, PointerEventKind};
//! use lodestone_tween::TweenSpec;
//!
//! #[derive(Default)]
//! struct Page { marked: Vec<u32>, attached: usize }
//!
//! impl ElementHost for Page {
//!     type Element = u32;
//!     type Listener = (u32, PointerEventKind);
//!     fn marked_elements(&self, _: &str, out: &mut Vec<u32>) { out.extend(&self.marked); }
//!     fn is_connected(&self, e: &u32) -> bool { self.marked.contains(e) }
//!     fn bounds(&self, _: &u32) -> Option<Rect> { None }
//!     fn corner_radius(&self, _: &u32) -> f64 { 0.0 }
//!     fn attribute(&self, _: &u32, _: &str) -> Option<String> { None }
//!     fn attach(&mut self, e: &u32, k: PointerEventKind) -> Self::Listener {
//!         self.attached += 1;
//!         (*e, k)
//!     }
//!     fn detach(&mut self, _: &u32, _: Self::Listener) { self.attached -= 1; }
//! }
//!
//! let mut page = Page { marked: vec![1, 2], ..Page::default() };
//! let mut registry = HoverRegistry::new(TweenSpec::default());
//!
//! assert_eq!(registry.scan(&mut page, "data-magnetic"), 2);
//! assert_eq!(registry.scan(&mut page, "data-magnetic"), 0);
//! assert_eq!(page.attached, 8);
//!
//! registry.teardown(&mut page);
//! assert_eq!(page.attached, 0);
//! ```

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;
use lodestone_tween::TweenSpec;
use smallvec::SmallVec;

use crate::host::{ElementHost, PointerEventKind};
use crate::magnet::Magnet;

/// One registered element with its attached listeners.
#[derive(Debug)]
pub struct Registration<E, L> {
    element: E,
    listeners: SmallVec<[L; 4]>,
    magnet: Magnet,
}

impl<E, L> Registration<E, L> {
    /// The registered element.
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Attraction state of the element.
    pub fn magnet(&self) -> &Magnet {
        &self.magnet
    }

    /// Mutable attraction state of the element.
    pub fn magnet_mut(&mut self) -> &mut Magnet {
        &mut self.magnet
    }

    /// Number of listeners still attached for this element.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

/// Ordered set of registered elements.
#[derive(Debug)]
pub struct HoverRegistry<E, L> {
    entries: Vec<Registration<E, L>>,
    index: HashMap<E, usize>,
    spring: TweenSpec,
    scratch: Vec<E>,
}

impl<E, L> HoverRegistry<E, L>
where
    E: Clone + Eq + Hash,
{
    /// Creates an empty registry; magnets move with `spring`.
    #[must_use]
    pub fn new(spring: TweenSpec) -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            spring,
            scratch: Vec::new(),
        }
    }

    /// Number of registered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `element` is registered.
    #[must_use]
    pub fn contains(&self, element: &E) -> bool {
        self.index.contains_key(element)
    }

    /// Registration for `element`.
    #[must_use]
    pub fn get(&self, element: &E) -> Option<&Registration<E, L>> {
        self.index.get(element).map(|&i| &self.entries[i])
    }

    /// Mutable registration for `element`.
    pub fn get_mut(&mut self, element: &E) -> Option<&mut Registration<E, L>> {
        let i = *self.index.get(element)?;
        Some(&mut self.entries[i])
    }

    /// Registrations in the order they were made.
    pub fn iter(&self) -> impl Iterator<Item = &Registration<E, L>> {
        self.entries.iter()
    }

    /// Mutable registrations in the order they were made.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Registration<E, L>> {
        self.entries.iter_mut()
    }

    /// Total listeners held across all registrations.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.entries.iter().map(Registration::listener_count).sum()
    }

    /// Registers every marked element not registered yet.
    ///
    /// Each new element gets one listener per [`PointerEventKind`]. Calling
    /// this again without document changes registers nothing. Returns the
    /// number of new registrations.
    pub fn scan<H>(&mut self, host: &mut H, attribute: &str) -> usize
    where
        H: ElementHost<Element = E, Listener = L>,
    {
        let mut found = core::mem::take(&mut self.scratch);
        found.clear();
        host.marked_elements(attribute, &mut found);

        let mut added = 0;
        for element in found.drain(..) {
            if self.index.contains_key(&element) {
                continue;
            }
            let listeners = PointerEventKind::ALL
                .iter()
                .map(|&kind| host.attach(&element, kind))
                .collect();
            self.index.insert(element.clone(), self.entries.len());
            self.entries.push(Registration {
                element,
                listeners,
                magnet: Magnet::new(self.spring),
            });
            added += 1;
        }
        self.scratch = found;

        if added > 0 {
            tracing::trace!(added, total = self.entries.len(), "registered magnetic elements");
        }
        added
    }

    /// Unregisters every element that is no longer connected.
    ///
    /// Listeners of removed elements are detached. Returns the removed elements
    /// in registration order.
    pub fn prune<H>(&mut self, host: &mut H) -> Vec<E>
    where
        H: ElementHost<Element = E, Listener = L>,
    {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.entries.len());
        for mut entry in self.entries.drain(..) {
            if host.is_connected(&entry.element) {
                kept.push(entry);
            } else {
                detach_all(host, &mut entry);
                removed.push(entry.element);
            }
        }
        self.entries = kept;
        if !removed.is_empty() {
            self.reindex();
            tracing::trace!(
                removed = removed.len(),
                total = self.entries.len(),
                "pruned disconnected magnetic elements"
            );
        }
        removed
    }

    /// Unregisters one element, detaching its listeners.
    ///
    /// Returns `false` if it was not registered.
    pub fn unregister<H>(&mut self, host: &mut H, element: &E) -> bool
    where
        H: ElementHost<Element = E, Listener = L>,
    {
        let Some(i) = self.index.remove(element) else {
            return false;
        };
        let mut entry = self.entries.remove(i);
        detach_all(host, &mut entry);
        self.reindex();
        true
    }

    /// Detaches every listener exactly once and forgets every element.
    ///
    /// Returns the number of listeners detached.
    pub fn teardown<H>(&mut self, host: &mut H) -> usize
    where
        H: ElementHost<Element = E, Listener = L>,
    {
        let mut detached = 0;
        for mut entry in self.entries.drain(..) {
            detached += detach_all(host, &mut entry);
        }
        self.index.clear();
        detached
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (i, entry) in self.entries.iter().enumerate() {
            self.index.insert(entry.element.clone(), i);
        }
    }
}

fn detach_all<H: ElementHost>(
    host: &mut H,
    entry: &mut Registration<H::Element, H::Listener>,
) -> usize {
    let count = entry.listeners.len();
    for listener in entry.listeners.drain(..) {
        host.detach(&entry.element, listener);
    }
    count
}
