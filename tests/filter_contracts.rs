//! Contract tests for the filter engine over the shipped datasets.

use kora::dataset;
use kora::filter::{apply, FilterState, Filtered, Selection};
use kora::record::{FilterKey, Record};
use kora::store::RecordStore;

#[test]
fn default_state_returns_every_record_in_declaration_order() {
    let store = RecordStore::ready(dataset::archive_items());
    let Filtered::Ready(records) = apply(&store, &FilterState::new()) else {
        panic!("store is loaded");
    };

    assert_eq!(records.len(), 8);
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
}

#[test]
fn search_output_contract_holds_for_every_returned_record() {
    let store = RecordStore::ready(dataset::archive_items());
    let mut state = FilterState::new();
    state.set_search("Tibetan");

    let Filtered::Ready(records) = apply(&store, &state) else {
        panic!("store is loaded");
    };
    assert!(!records.is_empty());
    for record in &records {
        let needle = "tibetan";
        let hit = record.name().to_lowercase().contains(needle)
            || record.description().to_lowercase().contains(needle)
            || record.tags().iter().any(|t| t.to_lowercase().contains(needle));
        assert!(hit, "record {} does not contain '{needle}'", record.id);
    }
}

#[test]
fn category_and_search_clauses_compose_with_and_semantics() {
    let store = RecordStore::ready(dataset::archive_items());
    let mut state = FilterState::new();
    state.set_search("text");
    state.set_selection(FilterKey::Monastery, Selection::parse("Rumtek Monastery"));

    let Filtered::Ready(records) = apply(&store, &state) else {
        panic!("store is loaded");
    };
    // Items 1 and 7 are held at Rumtek; both mention "text"/"Text".
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "7"]);
}

#[test]
fn region_filter_over_sites_uses_exact_match() {
    let store = RecordStore::ready(dataset::heritage_sites());
    let mut state = FilterState::new();
    state.set_selection(FilterKey::Region, Selection::parse("Sikkim"));

    let Filtered::Ready(records) = apply(&store, &state) else {
        panic!("store is loaded");
    };
    assert_eq!(records.len(), 30, "all shipped sites carry the region default");

    state.set_selection(FilterKey::Region, Selection::parse("East Sikkim"));
    let outcome = apply(&store, &state);
    assert!(outcome.is_empty_result());
}

#[test]
fn empty_result_and_pending_store_are_distinguishable() {
    let mut state = FilterState::new();
    state.set_search("no such thing anywhere");

    let pending: RecordStore<kora::record::ArchiveRecord> = RecordStore::pending();
    assert_eq!(apply(&pending, &state), Filtered::Pending);

    let loaded = RecordStore::ready(dataset::archive_items());
    let outcome = apply(&loaded, &state);
    assert!(outcome.is_empty_result());
    assert!(!state.is_default(), "views key 'no results' off this pair");
}
