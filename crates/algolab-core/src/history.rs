//! In-memory, append-only log of executions.
//!
//! Records are only ever appended; once the log holds `capacity` records
//! the oldest is evicted. Ids start at 1, increase by one per append, and
//! are never reused, even after eviction.

use std::collections::VecDeque;

use chrono::{SecondsFormat, Utc};
use parking_lot::RwLock;
use serde::Serialize;

use crate::algorithm::Algorithm;
use crate::execution::Execution;
use crate::input::AlgorithmInput;
use crate::listing::Language;

/// One logged execution.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionRecord {
    pub id: u64,
    pub algorithm: Algorithm,
    pub language: Language,
    /// Input serialized as JSON text.
    pub input: String,
    /// Output serialized as JSON text.
    pub output: String,
    /// Milliseconds.
    pub execution_time: f64,
    /// RFC 3339 UTC timestamp.
    pub timestamp: String,
}

/// Record contents before an id and timestamp are assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExecution {
    pub algorithm: Algorithm,
    pub language: Language,
    pub input: String,
    pub output: String,
    pub execution_time: f64,
}

impl NewExecution {
    /// Describes a finished run of `input`.
    #[must_use]
    pub fn from_run(input: &AlgorithmInput, execution: &Execution, language: Language) -> Self {
        Self {
            algorithm: execution.algorithm,
            language,
            input: input.to_json().to_string(),
            output: execution.outcome.to_json().to_string(),
            execution_time: execution.execution_time_ms(),
        }
    }
}

#[derive(Debug)]
struct LogState {
    next_id: u64,
    records: VecDeque<ExecutionRecord>,
}

/// Thread-safe execution log.
#[derive(Debug)]
pub struct ExecutionLog {
    capacity: usize,
    state: RwLock<LogState>,
}

impl ExecutionLog {
    /// Creates a log retaining at most `capacity` records.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            state: RwLock::new(LogState {
                next_id: 1,
                records: VecDeque::with_capacity(capacity.min(1024)),
            }),
        }
    }

    /// Maximum number of retained records.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends a record and returns its id.
    pub fn append(&self, entry: NewExecution) -> u64 {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let mut state = self.state.write();
        let id = state.next_id;
        state.next_id += 1;

        if self.capacity == 0 {
            return id;
        }
        if state.records.len() == self.capacity {
            state.records.pop_front();
        }
        state.records.push_back(ExecutionRecord {
            id,
            algorithm: entry.algorithm,
            language: entry.language,
            input: entry.input,
            output: entry.output,
            execution_time: entry.execution_time,
            timestamp,
        });
        id
    }

    /// Up to `limit` records, newest first.
    #[must_use]
    pub fn recent(&self, limit: usize) -> Vec<ExecutionRecord> {
        self.state
            .read()
            .records
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect()
    }

    /// Looks up a retained record by id.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<ExecutionRecord> {
        let state = self.state.read();
        // Ids are contiguous within the retained window.
        let first = state.records.front()?.id;
        let index = usize::try_from(id.checked_sub(first)?).ok()?;
        state.records.get(index).cloned()
    }

    /// Number of retained records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
