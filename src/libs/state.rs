//! Lifecycle of one fetch, modeled as a three-state machine.
//!
//! The state starts out `Loading` and settles exactly once, into either
//! `Error` or `Ready`. A settled state ignores further outcomes, so a late
//! or duplicate result can never clobber what the user was already shown.

use super::record::AttendanceRecord;

/// Fetch lifecycle: `Loading` until the one allowed settle, then terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Error(String),
    Ready(Vec<AttendanceRecord>),
}

impl FetchState {
    pub fn new() -> Self {
        FetchState::Loading
    }

    /// Applies a fetch outcome. Only a `Loading` state moves; `Error` and
    /// `Ready` are terminal and return themselves unchanged.
    pub fn settle(self, outcome: Result<Vec<AttendanceRecord>, String>) -> Self {
        match self {
            FetchState::Loading => match outcome {
                Ok(records) => FetchState::Ready(records),
                Err(message) => FetchState::Error(message),
            },
            settled => settled,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// The error message, when the fetch settled with one.
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// The fetched records, when the fetch settled successfully.
    pub fn records(&self) -> Option<&[AttendanceRecord]> {
        match self {
            FetchState::Ready(records) => Some(records),
            _ => None,
        }
    }

    /// Consumes the machine, yielding the records of a successful settle.
    pub fn into_records(self) -> Option<Vec<AttendanceRecord>> {
        match self {
            FetchState::Ready(records) => Some(records),
            _ => None,
        }
    }
}

impl Default for FetchState {
    fn default() -> Self {
        Self::new()
    }
}
