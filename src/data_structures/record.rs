use std::fmt::{self, Display};
use std::str::FromStr;

use crate::{Error, Result};

/// A payload paired with its priority
///
/// Lower priority values are served first by a [`PriorityQueue`](super::PriorityQueue).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriorityRecord<V, P> {
    /// The payload, never compared
    pub value: V,

    /// Priority key
    pub priority: P,
}

impl<V, P> PriorityRecord<V, P> {
    /// Creates a new record
    pub fn new(value: V, priority: P) -> Self {
        PriorityRecord { value, priority }
    }

    /// Splits the record into `(value, priority)`
    pub fn into_parts(self) -> (V, P) {
        (self.value, self.priority)
    }
}

impl<V: Display, P: Display> Display for PriorityRecord<V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (priority {})", self.value, self.priority)
    }
}

/// Parses `<label>,<priority>`
///
/// The last comma separates label and priority, so labels may contain commas.
impl<P> FromStr for PriorityRecord<String, P>
where
    P: FromStr,
    P::Err: Display,
{
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let (label, priority) = line
            .rsplit_once(',')
            .ok_or_else(|| Error::MissingPriority(line.to_string()))?;

        let label = label.trim();
        if label.is_empty() {
            return Err(Error::EmptyLabel(line.to_string()));
        }

        let priority = priority.trim();
        let priority = priority.parse::<P>().map_err(|e| Error::InvalidPriority {
            value: priority.to_string(),
            reason: e.to_string(),
        })?;

        Ok(PriorityRecord::new(label.to_string(), priority))
    }
}
