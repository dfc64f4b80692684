use super::LinkedList;
use slotmap::DefaultKey;
use std::collections::HashSet;

impl<V, C> LinkedList<V, C> {
    /// Check the structural invariants of the chain. Intended for tests and
    /// debug assertions; O(n).
    pub fn invariants(&self) -> bool {
        ends_agree(self) && chain_reaches_tail(self) && chain_covers_arena(self)
    }

    /// O(1) subset of [`LinkedList::invariants`] checked by `debug_assert!`
    /// after every mutation: the ends agree and nothing follows the tail.
    pub(crate) fn ends_consistent(&self) -> bool {
        ends_agree(self)
            && self
                .tail
                .map_or(true, |t| self.nodes.get(t).is_some_and(|n| n.next.is_none()))
    }
}

fn ends_agree<V, C>(l: &LinkedList<V, C>) -> bool {
    l.head.is_none() == l.tail.is_none() && l.head.is_none() == l.nodes.is_empty()
}

fn chain_reaches_tail<V, C>(l: &LinkedList<V, C>) -> bool {
    let mut last: Option<DefaultKey> = None;
    let mut seen = HashSet::new();
    let mut cursor = l.head;
    while let Some(k) = cursor {
        if !seen.insert(k) {
            return false;
        }
        let Some(node) = l.nodes.get(k) else {
            return false;
        };
        last = Some(k);
        cursor = node.next;
    }
    last == l.tail
}

fn chain_covers_arena<V, C>(l: &LinkedList<V, C>) -> bool {
    l.keys().take(l.nodes.len() + 1).count() == l.nodes.len()
}
