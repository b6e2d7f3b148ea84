//! Predicate construction from filter state.

use crate::filter::FilterState;
use crate::record::{FilterKey, Record};

/// Boolean predicate over a record, built from one snapshot of filter
/// state.
///
/// The predicate is the AND of the search clause and every active
/// category clause. Category clauses match exactly and case-sensitively
/// (values come from the enumerations shown to the user); the search
/// clause is a lower-cased substring test against the record's name,
/// description, and tags. A record lacking a constrained field fails
/// that clause rather than erroring.
#[derive(Debug, Clone)]
pub struct RecordPredicate {
    search: Option<String>,
    clauses: Vec<(FilterKey, String)>,
}

impl RecordPredicate {
    pub fn build(state: &FilterState) -> Self {
        let trimmed = state.search().trim();
        RecordPredicate {
            search: (!trimmed.is_empty()).then(|| trimmed.to_lowercase()),
            clauses: state
                .active_selections()
                .map(|(key, value)| (key, value.to_string()))
                .collect(),
        }
    }

    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.matches_search(record) && self.matches_categories(record)
    }

    fn matches_search<R: Record>(&self, record: &R) -> bool {
        let Some(needle) = &self.search else {
            return true;
        };
        record.name().to_lowercase().contains(needle)
            || record.description().to_lowercase().contains(needle)
            || record
                .tags()
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }

    fn matches_categories<R: Record>(&self, record: &R) -> bool {
        self.clauses
            .iter()
            .all(|(key, value)| record.field(*key) == Some(value.as_str()))
    }
}
