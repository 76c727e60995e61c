// Copyright 2025 the Lodestone Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared cursor variant, switched by components anywhere in the tree.

use std::cell::Cell;
use std::rc::Rc;

/// Visual variant of the cursor proxy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum CursorType {
    /// Filled shape that stretches while moving.
    #[default]
    Blob,
    /// Pointer icon glyph.
    Glyph,
}

/// Cloneable handle to the current [`CursorType`].
///
/// Every clone observes the same value. The revision counts actual changes,
/// so a renderer can tell whether it needs to redraw.
///
/// ```rust
/// use lodestone::{CursorType, CursorTypeHandle};
///
/// let handle = CursorTypeHandle::new();
/// let button = handle.clone();
///
/// button.set(CursorType::Glyph);
/// assert_eq!(handle.get(), CursorType::Glyph);
/// assert_eq!(handle.revision(), 1);
///
/// button.set(CursorType::Glyph);
/// assert_eq!(handle.revision(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CursorTypeHandle {
    inner: Rc<Cell<(CursorType, u64)>>,
}

impl CursorTypeHandle {
    /// Creates a handle set to [`CursorType::Blob`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current variant.
    #[must_use]
    pub fn get(&self) -> CursorType {
        self.inner.get().0
    }

    /// Switches the variant. Setting the current value is a no-op.
    pub fn set(&self, ty: CursorType) {
        let (current, revision) = self.inner.get();
        if current != ty {
            self.inner.set((ty, revision.wrapping_add(1)));
        }
    }

    /// Number of changes so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.inner.get().1
    }

    /// Returns `true` if `other` shares this handle's value.
    #[must_use]
    pub fn same_handle(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_value() {
        let a = CursorTypeHandle::new();
        let b = a.clone();
        assert!(a.same_handle(&b));
        assert!(!a.same_handle(&CursorTypeHandle::new()));

        b.set(CursorType::Glyph);
        assert_eq!(a.get(), CursorType::Glyph);
        a.set(CursorType::Blob);
        assert_eq!(b.get(), CursorType::Blob);
        assert_eq!(b.revision(), 2);
    }
}
