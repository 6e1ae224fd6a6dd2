use std::fmt::{self, Debug};

use super::precedence::{MaxFirst, MinFirst, Precedence};

/// Array-backed binary heap with an injected ordering strategy
///
/// Values live in a single `Vec` interpreted as a complete binary tree:
/// - left child of `i` is `2i + 1`
/// - right child of `i` is `2i + 2`
/// - parent of `i > 0` is `(i - 1) / 2`
///
/// After every public mutation no element outranks its parent under the strategy.
/// Elements that tie may come out in any order.
#[derive(Clone)]
pub struct BinaryHeap<T, C> {
    /// Level-order storage of the implicit tree
    values: Vec<T>,

    /// Decides which of two values sits closer to the root
    strategy: C,
}

#[inline]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
fn left_child(index: usize) -> usize {
    2 * index + 1
}

#[inline]
fn right_child(index: usize) -> usize {
    2 * index + 2
}

impl<T: Ord> BinaryHeap<T, MaxFirst> {
    /// Creates an empty max-heap
    pub fn max() -> Self {
        BinaryHeap::new(MaxFirst)
    }
}

impl<T: Ord> BinaryHeap<T, MinFirst> {
    /// Creates an empty min-heap
    pub fn min() -> Self {
        BinaryHeap::new(MinFirst)
    }
}

impl<T, C> BinaryHeap<T, C>
where
    C: Precedence<T>,
{
    /// Creates an empty heap ordered by `strategy`
    pub fn new(strategy: C) -> Self {
        BinaryHeap {
            values: Vec::new(),
            strategy,
        }
    }

    /// Creates an empty heap with room for `capacity` values
    pub fn with_capacity(capacity: usize, strategy: C) -> Self {
        BinaryHeap {
            values: Vec::with_capacity(capacity),
            strategy,
        }
    }

    /// Builds a heap from arbitrary values in O(n) by sinking every inner node
    pub fn from_vec(values: Vec<T>, strategy: C) -> Self {
        let mut heap = BinaryHeap { values, strategy };
        let len = heap.values.len();
        if len > 1 {
            for index in (0..=parent(len - 1)).rev() {
                heap.sink_down(index);
            }
        }
        log::debug!("heapified {} values", len);
        heap
    }

    /// Returns the number of values in the heap
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Checks if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of values the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    /// Returns the ordering strategy
    pub fn strategy(&self) -> &C {
        &self.strategy
    }

    /// Inserts a value and bubbles it up to its place
    pub fn insert(&mut self, value: T) {
        self.values.push(value);
        let last = self.values.len() - 1;
        self.bubble_up(last);
    }

    /// Removes and returns the root, or `None` if the heap is empty
    pub fn extract_root(&mut self) -> Option<T> {
        let end = self.values.pop()?;
        if self.values.is_empty() {
            return Some(end);
        }

        // The old root leaves, the former last value takes its slot
        let root = std::mem::replace(&mut self.values[0], end);
        self.sink_down(0);
        Some(root)
    }

    /// Returns the root without removing it
    pub fn peek(&self) -> Option<&T> {
        self.values.first()
    }

    /// Removes every value, keeping the allocation
    pub fn clear(&mut self) {
        log::debug!("clearing heap of {} values", self.values.len());
        self.values.clear();
    }

    /// Storage in level order
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Iterates in level order, which is not priority order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Consumes the heap, returning its storage in level order
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    /// Consumes the heap, returning its values in extraction order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.values.len());
        while let Some(value) = self.extract_root() {
            sorted.push(value);
        }
        sorted
    }

    /// Extracts values in priority order until the heap is empty
    ///
    /// Values not consumed by the iterator stay in the heap.
    pub fn drain_ordered(&mut self) -> DrainOrdered<'_, T, C> {
        DrainOrdered { heap: self }
    }

    /// Checks that no value outranks its parent
    pub fn satisfies_heap_order(&self) -> bool {
        (1..self.values.len()).all(|index| {
            !self
                .strategy
                .outranks(&self.values[index], &self.values[parent(index)])
        })
    }

    /// Moves the value at `index` towards the root while it outranks its parent
    fn bubble_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent_index = parent(index);
            if !self
                .strategy
                .outranks(&self.values[index], &self.values[parent_index])
            {
                break;
            }
            log::trace!("bubble up: {} -> {}", index, parent_index);
            self.values.swap(index, parent_index);
            index = parent_index;
        }
    }

    /// Moves the value at `index` towards the leaves while a child outranks it
    fn sink_down(&mut self, mut index: usize) {
        let len = self.values.len();
        loop {
            let left = left_child(index);
            let right = right_child(index);

            // The more extreme of the value and its children
            let mut best = index;
            if left < len && self.strategy.outranks(&self.values[left], &self.values[best]) {
                best = left;
            }
            if right < len && self.strategy.outranks(&self.values[right], &self.values[best]) {
                best = right;
            }

            if best == index {
                break;
            }
            log::trace!("sink down: {} -> {}", index, best);
            self.values.swap(index, best);
            index = best;
        }
    }
}

impl<T, C> Default for BinaryHeap<T, C>
where
    C: Precedence<T> + Default,
{
    fn default() -> Self {
        BinaryHeap::new(C::default())
    }
}

impl<T: Debug, C> Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("values", &self.values)
            .finish()
    }
}

impl<T, C> Extend<T> for BinaryHeap<T, C>
where
    C: Precedence<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.values.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C> FromIterator<T> for BinaryHeap<T, C>
where
    C: Precedence<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        BinaryHeap::from_vec(iter.into_iter().collect(), C::default())
    }
}

impl<'a, T, C> IntoIterator for &'a BinaryHeap<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Iterator returned by [`BinaryHeap::drain_ordered`]
pub struct DrainOrdered<'a, T, C>
where
    C: Precedence<T>,
{
    heap: &'a mut BinaryHeap<T, C>,
}

impl<'a, T, C> Iterator for DrainOrdered<'a, T, C>
where
    C: Precedence<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.extract_root()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<'a, T, C> ExactSizeIterator for DrainOrdered<'a, T, C> where C: Precedence<T> {}
