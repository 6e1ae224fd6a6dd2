//! Emergency-room triage on top of [`PriorityQueue`]
//!
//! Input is one case per line, `<label>,<urgency>`, where a lower urgency is
//! served first. Blank lines and lines starting with `#` are skipped.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use ordered_float::OrderedFloat;

use crate::data_structures::{PriorityQueue, PriorityRecord};
use crate::{Error, Result};

/// Urgency of a case; fractional values are allowed
pub type Urgency = OrderedFloat<f64>;

/// A single triage case
pub type Case = PriorityRecord<String, Urgency>;

/// Configuration for a triage run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriageConfig {
    /// File to read cases from; stdin when `None`
    pub input: Option<PathBuf>,

    /// Serve at most this many cases
    pub limit: Option<usize>,
}

impl TriageConfig {
    /// Builds a config from command-line arguments (without the program name)
    ///
    /// Accepts `--limit N` (or `-n N`) and at most one input path.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = TriageConfig::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--limit" | "-n" => {
                    let value = args.next().ok_or_else(|| Error::InvalidArgument {
                        argument: arg.clone(),
                        reason: "expected a number".to_string(),
                    })?;
                    let limit = value.parse().map_err(|_| Error::InvalidArgument {
                        argument: arg.clone(),
                        reason: format!("{:?} is not a number", value),
                    })?;
                    config.limit = Some(limit);
                }
                _ if config.input.is_none() && !arg.starts_with('-') => {
                    config.input = Some(PathBuf::from(arg));
                }
                _ => {
                    return Err(Error::InvalidArgument {
                        argument: arg,
                        reason: "unexpected argument".to_string(),
                    });
                }
            }
        }

        Ok(config)
    }
}

/// Reads cases into a queue, reporting parse errors with their 1-based line number
pub fn read_queue<R: BufRead>(reader: R) -> Result<PriorityQueue<String, Urgency>> {
    let mut queue = PriorityQueue::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let case: Case = trimmed.parse().map_err(|e| Error::AtLine {
            line: index + 1,
            source: Box::new(e),
        })?;
        // NaN parses as a float but is not an urgency
        if case.priority.is_nan() {
            let typed = trimmed.rsplit_once(',').map_or(trimmed, |(_, urgency)| urgency.trim());
            return Err(Error::AtLine {
                line: index + 1,
                source: Box::new(Error::InvalidPriority {
                    value: typed.to_string(),
                    reason: "urgency must be a number".to_string(),
                }),
            });
        }

        log::trace!("queued {}", case);
        let (label, urgency) = case.into_parts();
        queue.enqueue(label, urgency);
    }

    log::debug!("read {} cases", queue.len());
    Ok(queue)
}

/// Dequeues up to `limit` cases in the order they are served
pub fn serve(queue: &mut PriorityQueue<String, Urgency>, limit: Option<usize>) -> Vec<Case> {
    let limit = limit.unwrap_or(usize::MAX);
    queue.drain().take(limit).collect()
}

/// Runs a triage: reads the configured input and writes served cases to `out`
///
/// Returns the number of cases still waiting.
pub fn run<W: Write>(config: &TriageConfig, out: &mut W) -> Result<usize> {
    let mut queue = match &config.input {
        Some(path) => {
            log::info!("reading cases from {}", path.display());
            read_queue(BufReader::new(File::open(path)?))?
        }
        None => read_queue(io::stdin().lock())?,
    };

    if queue.is_empty() {
        log::warn!("no cases to serve");
    }

    for (position, case) in serve(&mut queue, config.limit).iter().enumerate() {
        writeln!(out, "{:>3}. {}", position + 1, case)?;
    }

    if !queue.is_empty() {
        log::info!("{} cases still waiting", queue.len());
    }
    Ok(queue.len())
}
