use super::binary_heap::BinaryHeap;
use super::precedence::Precedence;
use super::record::PriorityRecord;

/// Ordering used by [`PriorityQueue`]: the smaller priority sits closer to the root
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ByPriority;

impl<V, P: Ord> Precedence<PriorityRecord<V, P>> for ByPriority {
    fn outranks(&self, a: &PriorityRecord<V, P>, b: &PriorityRecord<V, P>) -> bool {
        a.priority < b.priority
    }
}

/// Priority queue serving the lowest priority value first
///
/// Storage and rebalancing are delegated to [`BinaryHeap`]. Records with equal
/// priority are served in an unspecified order.
/// Priorities must be totally ordered; wrap floats in `OrderedFloat`.
#[derive(Debug, Clone)]
pub struct PriorityQueue<V, P>
where
    P: Ord,
{
    /// The underlying binary heap
    heap: BinaryHeap<PriorityRecord<V, P>, ByPriority>,
}

impl<V, P> PriorityQueue<V, P>
where
    P: Ord,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        PriorityQueue {
            heap: BinaryHeap::new(ByPriority),
        }
    }

    /// Creates a new empty priority queue with room for `capacity` records
    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            heap: BinaryHeap::with_capacity(capacity, ByPriority),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of records in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Adds `value` with the given priority
    pub fn enqueue(&mut self, value: V, priority: P) {
        self.heap.insert(PriorityRecord::new(value, priority));
    }

    /// Removes the most urgent record, or returns `None` if the queue is empty
    pub fn dequeue(&mut self) -> Option<PriorityRecord<V, P>> {
        self.heap.extract_root()
    }

    /// Returns the most urgent record without removing it
    pub fn peek(&self) -> Option<&PriorityRecord<V, P>> {
        self.heap.peek()
    }

    /// Returns the priority of the most urgent record
    pub fn peek_priority(&self) -> Option<&P> {
        self.heap.peek().map(|record| &record.priority)
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Iterates over the records in storage order, not priority order
    pub fn iter(&self) -> std::slice::Iter<'_, PriorityRecord<V, P>> {
        self.heap.iter()
    }

    /// Dequeues records in priority order
    pub fn drain(&mut self) -> impl Iterator<Item = PriorityRecord<V, P>> + '_ {
        self.heap.drain_ordered()
    }

    /// Consumes the queue, returning its records in the order they would be served
    pub fn into_sorted_vec(self) -> Vec<PriorityRecord<V, P>> {
        self.heap.into_sorted_vec()
    }
}

impl<V, P> Default for PriorityQueue<V, P>
where
    P: Ord,
{
    fn default() -> Self {
        PriorityQueue::new()
    }
}

impl<V, P> Extend<(V, P)> for PriorityQueue<V, P>
where
    P: Ord,
{
    fn extend<I: IntoIterator<Item = (V, P)>>(&mut self, iter: I) {
        self.heap.extend(
            iter.into_iter()
                .map(|(value, priority)| PriorityRecord::new(value, priority)),
        );
    }
}

impl<V, P> FromIterator<(V, P)> for PriorityQueue<V, P>
where
    P: Ord,
{
    fn from_iter<I: IntoIterator<Item = (V, P)>>(iter: I) -> Self {
        let records = iter
            .into_iter()
            .map(|(value, priority)| PriorityRecord::new(value, priority))
            .collect();
        PriorityQueue {
            heap: BinaryHeap::from_vec(records, ByPriority),
        }
    }
}
