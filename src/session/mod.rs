//! View session
//!
//! Per-view composition root: owns the record store, filter state, focus
//! controller, and search debouncer for one mounted view, and forwards
//! focus commands to the map link. All state lives here explicitly;
//! there are no module-level singletons. Events are processed strictly
//! in arrival order.

use crate::config::FocusConfig;
use crate::filter::{apply, FilterState, Filtered, Selection};
use crate::focus::{
    resolve_search_focus, FocusController, FocusEvent, MapLink, MapPort, SearchDebouncer,
};
use crate::record::{FilterKey, Record};
use crate::store::RecordStore;
use crate::types::RecordId;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// One view's interaction state.
pub struct ViewSession<R> {
    store: RecordStore<R>,
    filter: FilterState,
    focus: FocusController,
    debouncer: SearchDebouncer,
    map: Arc<MapLink>,
}

impl<R: Record + Clone> ViewSession<R> {
    pub fn new(store: RecordStore<R>, config: &FocusConfig) -> Self {
        ViewSession {
            store,
            filter: FilterState::new(),
            focus: FocusController::new(config.tuning()),
            debouncer: SearchDebouncer::new(config.debounce()),
            map: Arc::new(MapLink::new()),
        }
    }

    pub fn with_defaults(store: RecordStore<R>) -> Self {
        ViewSession::new(store, &FocusConfig::default())
    }

    /// The late-binding map handle; the embedding layer attaches the
    /// concrete collaborator here once its map library has loaded.
    pub fn map_link(&self) -> Arc<MapLink> {
        Arc::clone(&self.map)
    }

    pub fn attach_map(&self, port: Arc<dyn MapPort>) {
        self.map.attach(port);
    }

    pub fn store(&self) -> &RecordStore<R> {
        &self.store
    }

    /// Replace a pending store once its one-shot fetch resolves.
    pub fn hydrate(&mut self, store: RecordStore<R>) {
        self.store = store;
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Current filtered results; pure recomputation over the store.
    pub fn results(&self) -> Filtered<R> {
        apply(&self.store, &self.filter)
    }

    pub fn selected(&self) -> Option<&R> {
        let id = self.focus.state().selected()?;
        self.store.get(id)
    }

    /// Search text changed. The result list narrows immediately; the
    /// focus side effect waits for the debounce quiet period.
    pub fn on_search_input(&mut self, text: &str, now: Instant) {
        self.filter.set_search(text);
        self.debouncer.note(text, now);
    }

    /// A category selection changed.
    pub fn on_filter_change(&mut self, key: FilterKey, selection: Selection) {
        debug!(key = %key, "Filter selection changed");
        self.filter.set_selection(key, selection);
    }

    /// Explicit pick from the result list or a map marker click.
    pub fn on_pick(&mut self, id: RecordId) {
        self.step(FocusEvent::Pick(id));
    }

    /// Dismiss the current selection ("Close").
    pub fn on_dismiss(&mut self) {
        self.step(FocusEvent::Dismiss);
    }

    pub fn on_hover_enter(&mut self, id: RecordId) {
        self.step(FocusEvent::HoverEnter(id));
    }

    pub fn on_hover_leave(&mut self, id: RecordId) {
        self.step(FocusEvent::HoverLeave(id));
    }

    /// Drive the debounce timer; called from the view's event loop.
    ///
    /// When the search input has settled, resolves it to a best match
    /// over the full store and treats that as an implicit selection.
    pub fn poll(&mut self, now: Instant) {
        let Some(query) = self.debouncer.poll(now) else {
            return;
        };
        let Some(records) = self.store.records() else {
            // Store still hydrating; the settled query is simply dropped,
            // matching the collaborator-not-ready policy.
            return;
        };
        if let Some(hit) = resolve_search_focus(records, &query) {
            let id = hit.id().clone();
            debug!(query = %query, record = %id, "Search resolved to focus target");
            self.step(FocusEvent::SearchResolved(id));
        }
    }

    fn step(&mut self, event: FocusEvent) {
        let commands = self.focus.apply(event, &self.store);
        self.map.dispatch(&commands);
    }
}
