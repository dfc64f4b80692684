//! LinkedList: singly linked sequence over a generational node arena.
//!
//! Nodes live in a `SlotMap` owned by the list and link forward through
//! arena keys. There are no back-links, so `delete_tail` and `remove` walk
//! from the head to find a predecessor.
//!
//! Structural invariants (checked by [`LinkedList::invariants`]):
//! - `head.is_none() == tail.is_none() == is_empty()`.
//! - Walking `next` from `head` visits every arena node exactly once and
//!   stops at `tail`, whose `next` is `None`.

mod invariants;

use crate::comparator::{Comparator, DefaultComparator};
use crate::list_node::ListNode;
use core::fmt;
use slotmap::{DefaultKey, SlotMap};

/// Stable reference to a live node of one list.
///
/// Handles are generational: once the node is removed the handle stops
/// resolving, even if its arena slot is reused. A handle does not record
/// which list minted it; passing it to a different list is a logic error
/// and may resolve to an arbitrary node of that list.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeHandle(DefaultKey);

impl NodeHandle {
    pub(crate) fn raw_handle(&self) -> DefaultKey {
        self.0
    }

    pub fn node<'a, V, C>(&self, list: &'a LinkedList<V, C>) -> Option<&'a ListNode<V>> {
        list.get(*self)
    }

    pub fn value<'a, V, C>(&self, list: &'a LinkedList<V, C>) -> Option<&'a V> {
        list.get(*self).map(ListNode::value)
    }

    pub fn value_mut<'a, V, C>(&self, list: &'a mut LinkedList<V, C>) -> Option<&'a mut V> {
        list.get_mut(*self).map(ListNode::value_mut)
    }
}

/// Search criterion for [`LinkedList::find`].
pub enum Search<'a, V> {
    /// First node equal to this value under the list's comparator.
    Value(&'a V),
    /// First node whose value satisfies the predicate.
    Predicate(&'a dyn Fn(&V) -> bool),
}

#[derive(Clone)]
pub struct LinkedList<V, C = DefaultComparator> {
    nodes: SlotMap<DefaultKey, ListNode<V>>,
    head: Option<DefaultKey>,
    tail: Option<DefaultKey>,
    compare: C,
}

impl<V> LinkedList<V> {
    pub fn new() -> Self {
        Self::with_comparator(DefaultComparator)
    }
}

impl<V> Default for LinkedList<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the nodes of a `LinkedList`, head to tail.
pub struct Iter<'a, V> {
    nodes: &'a SlotMap<DefaultKey, ListNode<V>>,
    cursor: Option<DefaultKey>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a ListNode<V>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.cursor?)?;
        self.cursor = node.next;
        self.remaining -= 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, V> ExactSizeIterator for Iter<'a, V> {}

impl<V, C> LinkedList<V, C> {
    pub fn with_comparator(compare: C) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: None,
            tail: None,
            compare,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn head(&self) -> Option<&ListNode<V>> {
        self.nodes.get(self.head?)
    }

    pub fn tail(&self) -> Option<&ListNode<V>> {
        self.nodes.get(self.tail?)
    }

    /// `handle` must come from this list; a handle from another list may
    /// resolve to an arbitrary node.
    pub fn get(&self, handle: NodeHandle) -> Option<&ListNode<V>> {
        self.nodes.get(handle.raw_handle())
    }

    /// `handle` must come from this list; a handle from another list may
    /// resolve to an arbitrary node.
    pub fn get_mut(&mut self, handle: NodeHandle) -> Option<&mut ListNode<V>> {
        self.nodes.get_mut(handle.raw_handle())
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
            remaining: self.nodes.len(),
        }
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(ListNode::value)
    }

    /// Arena keys in chain order.
    fn keys(&self) -> impl Iterator<Item = DefaultKey> + '_ {
        core::iter::successors(self.head, move |&k| self.nodes.get(k).and_then(|n| n.next))
    }

    /// Insert at the front. O(1).
    pub fn prepend(&mut self, value: V) -> &mut Self {
        let k = self.nodes.insert(ListNode::new(value, self.head));
        self.head = Some(k);
        if self.tail.is_none() {
            self.tail = Some(k);
        }
        debug_assert!(self.ends_consistent());
        self
    }

    /// Insert at the back. O(1).
    pub fn append(&mut self, value: V) -> &mut Self {
        let k = self.nodes.insert(ListNode::new(value, None));
        match self.tail {
            Some(t) => self.nodes[t].next = Some(k),
            None => self.head = Some(k),
        }
        self.tail = Some(k);
        debug_assert!(self.ends_consistent());
        self
    }

    /// Append every value in order.
    pub fn from_array<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
    {
        for value in values {
            self.append(value);
        }
        self
    }

    /// Snapshot of the nodes, head to tail.
    pub fn to_array(&self) -> Vec<&ListNode<V>> {
        self.iter().collect()
    }

    pub fn find_by_predicate<P>(&self, predicate: P) -> Option<NodeHandle>
    where
        P: Fn(&V) -> bool,
    {
        self.keys()
            .find(|&k| predicate(&self.nodes[k].value))
            .map(NodeHandle)
    }

    pub fn delete_head(&mut self) -> Option<ListNode<V>> {
        let h = self.head?;
        let node = self.nodes.remove(h)?;
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        debug_assert!(self.ends_consistent());
        Some(node.detached())
    }

    /// Remove the last node. O(n): the predecessor is found by walking from
    /// the head.
    pub fn delete_tail(&mut self) -> Option<ListNode<V>> {
        let t = self.tail?;
        if self.head == Some(t) {
            self.head = None;
            self.tail = None;
            let removed = self.nodes.remove(t).map(ListNode::detached);
            debug_assert!(self.ends_consistent());
            return removed;
        }
        let before = self.keys().find(|&k| self.nodes[k].next == Some(t))?;
        self.nodes[before].next = None;
        self.tail = Some(before);
        let removed = self.nodes.remove(t).map(ListNode::detached);
        debug_assert!(self.ends_consistent());
        removed
    }

    /// Unlink the node named by `handle`, leaving every other node in place
    /// regardless of value equality. `None` if the handle is stale.
    ///
    /// `handle` must come from this list. A handle from another list is a
    /// logic error and may unlink an arbitrary node of this one.
    pub fn remove(&mut self, handle: NodeHandle) -> Option<ListNode<V>> {
        let k = handle.raw_handle();
        if !self.nodes.contains_key(k) {
            return None;
        }
        if self.head == Some(k) {
            return self.delete_head();
        }
        let before = self.keys().find(|&p| self.nodes[p].next == Some(k))?;
        let node = self.nodes.remove(k)?;
        self.nodes[before].next = node.next;
        if self.tail == Some(k) {
            self.tail = Some(before);
        }
        debug_assert!(self.ends_consistent());
        Some(node.detached())
    }

    /// Reverse the links in place with a single pass.
    pub fn reverse(&mut self) -> &mut Self {
        let mut prev = None;
        let mut current = self.head;
        while let Some(k) = current {
            let node = &mut self.nodes[k];
            let next = node.next;
            node.next = prev;
            prev = Some(k);
            current = next;
        }
        self.tail = self.head;
        self.head = prev;
        debug_assert!(self.ends_consistent());
        self
    }

    /// Render every node through `render`, joined by `,`.
    pub fn to_string_with<F>(&self, render: F) -> String
    where
        F: Fn(&V) -> String,
    {
        self.iter()
            .map(|n| n.to_string_with(&render))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl<V, C> LinkedList<V, C>
where
    C: Comparator<V>,
{
    pub fn find(&self, search: Search<'_, V>) -> Option<NodeHandle> {
        match search {
            Search::Value(value) => self.find_by_equality(value),
            Search::Predicate(predicate) => self.find_by_predicate(predicate),
        }
    }

    pub fn find_by_equality(&self, value: &V) -> Option<NodeHandle> {
        self.keys()
            .find(|&k| self.compare.equal(&self.nodes[k].value, value))
            .map(NodeHandle)
    }

    /// Remove every node equal to `value` and return the last one removed.
    pub fn delete(&mut self, value: &V) -> Option<ListNode<V>> {
        let mut deleted = None;

        while let Some(h) = self.head {
            if !self.compare.equal(&self.nodes[h].value, value) {
                break;
            }
            let Some(node) = self.nodes.remove(h) else {
                break;
            };
            self.head = node.next;
            deleted = Some(node.detached());
        }

        let mut current = self.head;
        while let Some(k) = current {
            let Some(next) = self.nodes[k].next else {
                break;
            };
            if self.compare.equal(&self.nodes[next].value, value) {
                let Some(node) = self.nodes.remove(next) else {
                    break;
                };
                self.nodes[k].next = node.next;
                deleted = Some(node.detached());
            } else {
                current = Some(next);
            }
        }

        // `current` stopped on the last surviving node, or is None if the
        // list emptied.
        self.tail = current;
        debug_assert!(self.ends_consistent());
        deleted
    }
}

impl<V: fmt::Display, C> fmt::Display for LinkedList<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            fmt::Display::fmt(node, f)?;
        }
        Ok(())
    }
}

impl<V: fmt::Debug, C> fmt::Debug for LinkedList<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl<'a, V, C> IntoIterator for &'a LinkedList<V, C> {
    type Item = &'a ListNode<V>;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> FromIterator<V> for LinkedList<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.from_array(iter);
        list
    }
}

impl<V, C> Extend<V> for LinkedList<V, C> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.from_array(iter);
    }
}
