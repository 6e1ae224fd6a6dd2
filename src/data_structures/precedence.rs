/// Ordering strategy for a [`BinaryHeap`](super::BinaryHeap)
///
/// `outranks(a, b)` returns true when `a` should sit closer to the root than `b`.
/// Returning false for both `outranks(a, b)` and `outranks(b, a)` means a tie.
/// The relation must be a strict total order, or extraction order is meaningless.
pub trait Precedence<T> {
    fn outranks(&self, a: &T, b: &T) -> bool;
}

/// Largest value at the root (max-heap)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MaxFirst;

/// Smallest value at the root (min-heap)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MinFirst;

impl<T: Ord> Precedence<T> for MaxFirst {
    fn outranks(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T: Ord> Precedence<T> for MinFirst {
    fn outranks(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T, F> Precedence<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn outranks(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
