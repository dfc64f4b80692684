//! Value equality used by `LinkedList` searches and deletes.

/// Decides whether two stored values are equal.
///
/// Closures of the shape `Fn(&V, &V) -> bool` are comparators, so a list
/// can be built with an ad hoc equality without a named type.
pub trait Comparator<V: ?Sized> {
    fn equal(&self, a: &V, b: &V) -> bool;
}

/// Structural equality through `PartialEq`.
///
/// Absent values compare the way `Option` does: two `None`s are equal.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct DefaultComparator;

impl<V> Comparator<V> for DefaultComparator
where
    V: ?Sized + PartialEq,
{
    #[inline]
    fn equal(&self, a: &V, b: &V) -> bool {
        a == b
    }
}

impl<V, F> Comparator<V> for F
where
    V: ?Sized,
    F: Fn(&V, &V) -> bool,
{
    #[inline]
    fn equal(&self, a: &V, b: &V) -> bool {
        self(a, b)
    }
}
