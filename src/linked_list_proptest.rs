#![cfg(test)]

// Property tests for LinkedList kept inside the crate so the structural
// `invariants()` walk can see the arena after every step.

use crate::linked_list::LinkedList;
use crate::list_node::ListNode;
use proptest::prelude::*;
use std::cell::Cell;

// Small value domain so deletes and finds actually hit.
#[derive(Clone, Debug)]
enum Op {
    Prepend(u8),
    Append(u8),
    Delete(u8),
    DeleteHead,
    DeleteTail,
    Find(u8),
    Reverse,
    RemoveNth(usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..6).prop_map(Op::Prepend),
        (0u8..6).prop_map(Op::Append),
        (0u8..6).prop_map(Op::Delete),
        Just(Op::DeleteHead),
        Just(Op::DeleteTail),
        (0u8..6).prop_map(Op::Find),
        Just(Op::Reverse),
        (0usize..8).prop_map(Op::RemoveNth),
    ]
}

fn values(list: &LinkedList<u8>) -> Vec<u8> {
    list.values().copied().collect()
}

// Property: State-machine equivalence against a Vec model.
// - Chain order matches the model after every op.
// - `delete` removes every match and reports whether anything matched.
// - `find` returns the first match in head-to-tail order.
// - head/tail/len invariants hold after every op.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine(ops in proptest::collection::vec(arb_op(), 1..80)) {
        let mut sut: LinkedList<u8> = LinkedList::new();
        let mut model: Vec<u8> = Vec::new();

        for op in ops {
            match op {
                Op::Prepend(v) => {
                    sut.prepend(v);
                    model.insert(0, v);
                }
                Op::Append(v) => {
                    sut.append(v);
                    model.push(v);
                }
                Op::Delete(v) => {
                    let had = model.contains(&v);
                    let deleted = sut.delete(&v);
                    prop_assert_eq!(deleted.is_some(), had);
                    if let Some(node) = deleted {
                        prop_assert_eq!(*node.value(), v);
                    }
                    model.retain(|&x| x != v);
                }
                Op::DeleteHead => {
                    let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                    prop_assert_eq!(sut.delete_head().map(ListNode::into_value), expected);
                }
                Op::DeleteTail => {
                    prop_assert_eq!(sut.delete_tail().map(ListNode::into_value), model.pop());
                }
                Op::Find(v) => {
                    let found = sut.find_by_equality(&v);
                    let position = model.iter().position(|&x| x == v);
                    prop_assert_eq!(found.is_some(), position.is_some());
                    if let (Some(h), Some(i)) = (found, position) {
                        let nth = sut.to_array()[i];
                        prop_assert!(core::ptr::eq(h.node(&sut).unwrap(), nth));
                    }
                }
                Op::Reverse => {
                    sut.reverse();
                    model.reverse();
                }
                Op::RemoveNth(n) => {
                    if n < model.len() {
                        let target = model[n];
                        // Predicate that matches the n-th node it is shown.
                        let seen = Cell::new(0usize);
                        let h = sut
                            .find_by_predicate(|_| {
                                let i = seen.get();
                                seen.set(i + 1);
                                i == n
                            })
                            .expect("index in range");
                        let removed = sut.remove(h).expect("live handle");
                        prop_assert_eq!(removed.into_value(), target);
                        model.remove(n);
                    }
                }
            }

            prop_assert_eq!(values(&sut), model.clone());
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.head().map(ListNode::value), model.first());
            prop_assert_eq!(sut.tail().map(ListNode::value), model.last());
            prop_assert!(sut.invariants());
        }
    }
}

proptest! {
    #[test]
    fn prop_from_array_round_trip(xs in proptest::collection::vec(any::<i32>(), 0..40)) {
        let mut list = LinkedList::new();
        list.from_array(xs.clone());
        let back: Vec<i32> = list.to_array().into_iter().map(|n| *n.value()).collect();
        prop_assert_eq!(back, xs);
        prop_assert!(list.invariants());
    }

    #[test]
    fn prop_reverse_involution(xs in proptest::collection::vec(any::<i32>(), 0..40)) {
        let mut list = LinkedList::new();
        list.from_array(xs.clone());
        list.reverse().reverse();
        let back: Vec<i32> = list.values().copied().collect();
        prop_assert_eq!(back, xs);
        prop_assert!(list.invariants());
    }
}
