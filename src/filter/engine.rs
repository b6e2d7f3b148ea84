//! Filter engine: predicate application over a record store.

use crate::filter::{FilterState, RecordPredicate};
use crate::record::Record;
use crate::store::RecordStore;

/// Outcome of one filter pass.
///
/// `Pending` means the store has not hydrated yet; `Ready` carries the
/// matching subsequence, which may legitimately be empty.
#[derive(Debug, Clone, PartialEq)]
pub enum Filtered<R> {
    Pending,
    Ready(Vec<R>),
}

impl<R> Filtered<R> {
    pub fn records(&self) -> Option<&[R]> {
        match self {
            Filtered::Pending => None,
            Filtered::Ready(records) => Some(records),
        }
    }

    /// True when the pass completed and nothing matched.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Filtered::Ready(records) if records.is_empty())
    }
}

/// Apply the filter state to the store.
///
/// Pure function of its inputs: the output is the subsequence of records
/// satisfying the built predicate, in original relative order. Invoked
/// synchronously on every input change.
pub fn apply<R: Record + Clone>(store: &RecordStore<R>, state: &FilterState) -> Filtered<R> {
    let Some(records) = store.records() else {
        return Filtered::Pending;
    };
    let predicate = RecordPredicate::build(state);
    Filtered::Ready(
        records
            .iter()
            .filter(|record| predicate.matches(*record))
            .cloned()
            .collect(),
    )
}
