//! ListNode: one cell of a `LinkedList`.

use core::fmt;
use slotmap::DefaultKey;

/// A value plus the arena key of the following cell.
///
/// Nodes inside a list are owned by that list's arena. A node returned by
/// one of the delete operations is detached: it no longer links anywhere
/// and belongs to the caller.
#[derive(Clone, Debug)]
pub struct ListNode<V> {
    pub(crate) value: V,
    pub(crate) next: Option<DefaultKey>,
}

impl<V> ListNode<V> {
    pub(crate) fn new(value: V, next: Option<DefaultKey>) -> Self {
        Self { value, next }
    }

    pub(crate) fn detached(mut self) -> Self {
        self.next = None;
        self
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub fn into_value(self) -> V {
        self.value
    }

    /// Render the value through `render` instead of its `Display` form.
    pub fn to_string_with<F>(&self, render: F) -> String
    where
        F: FnOnce(&V) -> String,
    {
        render(&self.value)
    }
}

impl<V: fmt::Display> fmt::Display for ListNode<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
