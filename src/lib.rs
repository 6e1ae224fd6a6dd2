//! prio_heap - Binary heap and min-priority queue
//!
//! The heap is a dense array read as an implicit complete binary tree. Which
//! element sits closest to the root is decided by an ordering strategy passed
//! in at construction, so the same bubble-up/sink-down code serves max-heaps,
//! min-heaps and the priority queue.
//!
//! The priority queue serves the record with the smallest priority first.
//! Records with equal priority come out in an unspecified order.

pub mod data_structures;
pub mod triage;

/// Re-export main types for convenient use
pub use data_structures::{
    BinaryHeap, ByPriority, MaxFirst, MinFirst, Precedence, PriorityQueue, PriorityRecord,
};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Missing priority in record: {0:?}")]
    MissingPriority(String),

    #[error("Empty label in record: {0:?}")]
    EmptyLabel(String),

    #[error("Invalid priority {value:?}: {reason}")]
    InvalidPriority { value: String, reason: String },

    #[error("Line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("Invalid argument {argument:?}: {reason}")]
    InvalidArgument { argument: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
