//! Catalog filtering
//!
//! Turns the current search text and category selections into a predicate
//! and applies it to a record store, preserving store order. Recomputed
//! synchronously on every input change; record counts are small enough
//! that no caching is warranted.

pub mod engine;
pub mod predicate;

pub use engine::{apply, Filtered};
pub use predicate::RecordPredicate;

use crate::record::FilterKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Selected value for one filter key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// No constraint; the sentinel shown as "All" in the views.
    #[default]
    All,
    /// Exact-match constraint against the record's field value.
    Only(String),
}

impl Selection {
    /// Parse a view-layer selection string, treating the "All"/"all"
    /// sentinel as no constraint.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("all") {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }
}

/// Per-view filter state: free-text search plus per-key selections.
///
/// Created with all-default values on view mount; mutated only through
/// the owning session; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    search: String,
    selections: BTreeMap<FilterKey, Selection>,
}

impl FilterState {
    pub fn new() -> Self {
        FilterState::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn selection(&self, key: FilterKey) -> &Selection {
        self.selections.get(&key).unwrap_or(&Selection::All)
    }

    pub fn set_selection(&mut self, key: FilterKey, selection: Selection) {
        match selection {
            Selection::All => {
                self.selections.remove(&key);
            }
            other => {
                self.selections.insert(key, other);
            }
        }
    }

    /// Active (non-"All") selections in key order.
    pub fn active_selections(&self) -> impl Iterator<Item = (FilterKey, &str)> {
        self.selections.iter().filter_map(|(key, sel)| match sel {
            Selection::Only(value) => Some((*key, value.as_str())),
            Selection::All => None,
        })
    }

    /// True when no search text and no category constraint is active.
    ///
    /// Views use this to tell "no items found" (non-default state, zero
    /// matches) apart from an untouched view.
    pub fn is_default(&self) -> bool {
        self.search.trim().is_empty() && self.selections.is_empty()
    }
}
