pub mod binary_heap;
pub mod precedence;
pub mod priority_queue;
pub mod record;

pub use binary_heap::{BinaryHeap, DrainOrdered};
pub use precedence::{MaxFirst, MinFirst, Precedence};
pub use priority_queue::{ByPriority, PriorityQueue};
pub use record::PriorityRecord;
