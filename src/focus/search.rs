//! Search-driven focus resolution.

use crate::record::Record;

/// Resolve a search string to the single record the map should focus.
///
/// Prefers an exact case-insensitive name match; otherwise the first
/// record, in store order, whose name contains the term. Empty or
/// whitespace input resolves to nothing.
pub fn resolve_search_focus<'a, R: Record>(records: &'a [R], query: &str) -> Option<&'a R> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return None;
    }
    records
        .iter()
        .find(|r| r.name().to_lowercase() == term)
        .or_else(|| {
            records
                .iter()
                .find(|r| r.name().to_lowercase().contains(&term))
        })
}
