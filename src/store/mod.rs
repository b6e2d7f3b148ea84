//! Record Store
//!
//! Exposes each view's dataset as an ordered, read-only sequence.
//! A store is either still hydrating or ready; "ready but empty" and
//! "not yet computed" stay distinguishable for the views.

pub mod hydrate;

pub use hydrate::{hydrate_tours, HttpTourSource, TourSource};

use crate::record::Record;
use crate::types::RecordId;
use std::sync::Arc;

/// Ordered, immutable record collection for one view.
///
/// Insertion order equals declaration order and is preserved by every
/// consumer; the store is never mutated after construction.
#[derive(Debug, Clone)]
pub enum RecordStore<R> {
    /// Hydration has not completed yet.
    Loading,
    /// Hydration finished; the sequence may legitimately be empty.
    Ready(Arc<[R]>),
}

impl<R> RecordStore<R> {
    /// A store whose one-shot fetch is still outstanding.
    pub fn pending() -> Self {
        RecordStore::Loading
    }

    /// A store built from an already-materialized dataset.
    pub fn ready(records: Vec<R>) -> Self {
        RecordStore::Ready(records.into())
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, RecordStore::Ready(_))
    }

    /// The full ordered sequence, or `None` while loading.
    pub fn records(&self) -> Option<&[R]> {
        match self {
            RecordStore::Loading => None,
            RecordStore::Ready(records) => Some(records),
        }
    }

    pub fn len(&self) -> usize {
        self.records().map_or(0, <[R]>::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<R: Record> RecordStore<R> {
    /// Look up a record by id, in store order.
    pub fn get(&self, id: &RecordId) -> Option<&R> {
        self.records()?.iter().find(|r| r.id() == id)
    }
}

impl<R> From<Vec<R>> for RecordStore<R> {
    fn from(records: Vec<R>) -> Self {
        RecordStore::ready(records)
    }
}
