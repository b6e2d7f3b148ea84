//! Selection and map focus
//!
//! Tracks which single record is selected and which is transiently
//! hovered, and turns user events into viewport/popup commands for the
//! map collaborator. Every transition is a pure function from
//! (state, event) to (new state, commands); side effects happen only
//! when the commands reach an attached [`MapPort`](port::MapPort).

pub mod debounce;
pub mod port;
pub mod search;

pub use debounce::SearchDebouncer;
pub use port::{MapLink, MapPort};
pub use search::resolve_search_focus;

use crate::geo::GeoPoint;
use crate::record::Record;
use crate::store::RecordStore;
use crate::types::RecordId;
use serde::{Deserialize, Serialize};

/// Command issued to the map collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MapCommand {
    MoveViewport {
        position: GeoPoint,
        zoom: u8,
        duration_ms: u64,
    },
    OpenPopup(RecordId),
    ClosePopup(RecordId),
}

/// User event driving the focus state machine.
///
/// Marker events from the map and pointer events from the result list
/// both arrive here; the controller does not care about the origin.
#[derive(Debug, Clone, PartialEq)]
pub enum FocusEvent {
    /// Explicit pick: click on a list entry or map marker.
    Pick(RecordId),
    /// Explicit dismissal of the current selection.
    Dismiss,
    /// Pointer entered a list entry.
    HoverEnter(RecordId),
    /// Pointer left a list entry.
    HoverLeave(RecordId),
    /// Debounced free-text search resolved to a best match.
    SearchResolved(RecordId),
}

/// Viewport parameters per transition kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocusTuning {
    pub pick_zoom: u8,
    pub pick_duration_ms: u64,
    pub hover_zoom: u8,
    pub hover_duration_ms: u64,
}

impl Default for FocusTuning {
    fn default() -> Self {
        FocusTuning {
            pick_zoom: 12,
            pick_duration_ms: 1200,
            hover_zoom: 9,
            hover_duration_ms: 600,
        }
    }
}

/// Current selection and hover, owned by exactly one view session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FocusState {
    selected: Option<RecordId>,
    hover: Option<RecordId>,
}

impl FocusState {
    pub fn selected(&self) -> Option<&RecordId> {
        self.selected.as_ref()
    }

    pub fn hover(&self) -> Option<&RecordId> {
        self.hover.as_ref()
    }

    pub fn is_idle(&self) -> bool {
        self.selected.is_none() && self.hover.is_none()
    }
}

/// Reducer-style focus controller.
#[derive(Debug, Clone, Default)]
pub struct FocusController {
    state: FocusState,
    tuning: FocusTuning,
}

impl FocusController {
    pub fn new(tuning: FocusTuning) -> Self {
        FocusController {
            state: FocusState::default(),
            tuning,
        }
    }

    pub fn state(&self) -> &FocusState {
        &self.state
    }

    /// Apply one event, returning the commands to forward to the map.
    ///
    /// At most one popup is open at a time; re-focusing the already
    /// focused record is a no-op. Records without a position yield popup
    /// commands only.
    pub fn apply<R: Record>(
        &mut self,
        event: FocusEvent,
        store: &RecordStore<R>,
    ) -> Vec<MapCommand> {
        match event {
            FocusEvent::Pick(id) | FocusEvent::SearchResolved(id) => self.pick(id, store),
            FocusEvent::Dismiss => self.dismiss(),
            FocusEvent::HoverEnter(id) => self.hover_enter(id, store),
            FocusEvent::HoverLeave(id) => self.hover_leave(id),
        }
    }

    fn pick<R: Record>(&mut self, id: RecordId, store: &RecordStore<R>) -> Vec<MapCommand> {
        if self.state.selected.as_ref() == Some(&id) {
            return Vec::new();
        }

        let mut commands = Vec::new();
        if let Some(previous) = self.state.selected.take() {
            commands.push(MapCommand::ClosePopup(previous));
        }
        if let Some(position) = position_of(store, &id) {
            commands.push(MapCommand::MoveViewport {
                position,
                zoom: self.tuning.pick_zoom,
                duration_ms: self.tuning.pick_duration_ms,
            });
        }
        commands.push(MapCommand::OpenPopup(id.clone()));
        self.state.selected = Some(id);
        commands
    }

    fn dismiss(&mut self) -> Vec<MapCommand> {
        match self.state.selected.take() {
            Some(previous) => vec![MapCommand::ClosePopup(previous)],
            None => Vec::new(),
        }
    }

    fn hover_enter<R: Record>(&mut self, id: RecordId, store: &RecordStore<R>) -> Vec<MapCommand> {
        // Hover never replaces the persisted selection; it only requests
        // a transient highlight.
        let already_open =
            self.state.selected.as_ref() == Some(&id) || self.state.hover.as_ref() == Some(&id);
        self.state.hover = Some(id.clone());
        if already_open {
            return Vec::new();
        }

        let mut commands = Vec::new();
        if let Some(position) = position_of(store, &id) {
            commands.push(MapCommand::MoveViewport {
                position,
                zoom: self.tuning.hover_zoom,
                duration_ms: self.tuning.hover_duration_ms,
            });
        }
        commands.push(MapCommand::OpenPopup(id));
        commands
    }

    fn hover_leave(&mut self, id: RecordId) -> Vec<MapCommand> {
        if self.state.hover.as_ref() != Some(&id) {
            return Vec::new();
        }
        self.state.hover = None;
        if self.state.selected.as_ref() == Some(&id) {
            // The popup now belongs to the persisted selection.
            return Vec::new();
        }
        vec![MapCommand::ClosePopup(id)]
    }
}

fn position_of<R: Record>(store: &RecordStore<R>, id: &RecordId) -> Option<GeoPoint> {
    store.get(id).and_then(Record::position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;
    use crate::record::SiteRecord;

    fn site_store() -> RecordStore<SiteRecord> {
        RecordStore::ready(dataset::heritage_sites())
    }

    fn rumtek() -> RecordId {
        RecordId::from("rumtek-monastery")
    }

    fn pemayangtse() -> RecordId {
        RecordId::from("pemayangtse-monastery")
    }

    #[test]
    fn test_pick_moves_viewport_then_opens_popup() {
        let store = site_store();
        let mut controller = FocusController::default();

        let commands = controller.apply(FocusEvent::Pick(rumtek()), &store);
        assert_eq!(commands.len(), 2);
        match &commands[0] {
            MapCommand::MoveViewport {
                position,
                zoom,
                duration_ms,
            } => {
                assert_eq!(position.lat(), 27.338);
                assert_eq!(position.lon(), 88.555);
                assert_eq!(*zoom, 12);
                assert_eq!(*duration_ms, 1200);
            }
            other => panic!("expected viewport move, got {other:?}"),
        }
        assert_eq!(commands[1], MapCommand::OpenPopup(rumtek()));
        assert_eq!(controller.state().selected(), Some(&rumtek()));
    }

    #[test]
    fn test_repicking_same_record_is_a_no_op() {
        let store = site_store();
        let mut controller = FocusController::default();

        controller.apply(FocusEvent::Pick(rumtek()), &store);
        let commands = controller.apply(FocusEvent::Pick(rumtek()), &store);
        assert!(commands.is_empty(), "no duplicate popup for the same pick");
    }

    #[test]
    fn test_switching_selection_closes_previous_popup_first() {
        let store = site_store();
        let mut controller = FocusController::default();

        controller.apply(FocusEvent::Pick(rumtek()), &store);
        let commands = controller.apply(FocusEvent::Pick(pemayangtse()), &store);

        assert_eq!(commands[0], MapCommand::ClosePopup(rumtek()));
        assert!(matches!(commands[1], MapCommand::MoveViewport { .. }));
        assert_eq!(commands[2], MapCommand::OpenPopup(pemayangtse()));
    }

    #[test]
    fn test_dismiss_returns_to_idle_without_viewport_move() {
        let store = site_store();
        let mut controller = FocusController::default();

        controller.apply(FocusEvent::Pick(rumtek()), &store);
        let commands = controller.apply(FocusEvent::Dismiss, &store);
        assert_eq!(commands, vec![MapCommand::ClosePopup(rumtek())]);
        assert!(controller.state().is_idle());

        // No further viewport command until another selection occurs.
        let commands = controller.apply(FocusEvent::Dismiss, &store);
        assert!(commands.is_empty());
    }

    #[test]
    fn test_hover_issues_transient_focus_and_leave_closes_only() {
        let store = site_store();
        let mut controller = FocusController::default();

        let commands = controller.apply(FocusEvent::HoverEnter(rumtek()), &store);
        match &commands[0] {
            MapCommand::MoveViewport {
                position,
                zoom,
                duration_ms,
            } => {
                assert_eq!((position.lat(), position.lon()), (27.338, 88.555));
                assert_eq!(*zoom, 9);
                assert_eq!(*duration_ms, 600);
            }
            other => panic!("expected viewport move, got {other:?}"),
        }
        assert_eq!(commands[1], MapCommand::OpenPopup(rumtek()));

        let commands = controller.apply(FocusEvent::HoverLeave(rumtek()), &store);
        assert_eq!(commands, vec![MapCommand::ClosePopup(rumtek())]);
    }

    #[test]
    fn test_hover_does_not_replace_selection() {
        let store = site_store();
        let mut controller = FocusController::default();

        controller.apply(FocusEvent::Pick(rumtek()), &store);
        controller.apply(FocusEvent::HoverEnter(pemayangtse()), &store);
        assert_eq!(controller.state().selected(), Some(&rumtek()));

        let commands = controller.apply(FocusEvent::HoverLeave(pemayangtse()), &store);
        assert_eq!(commands, vec![MapCommand::ClosePopup(pemayangtse())]);
        assert_eq!(controller.state().selected(), Some(&rumtek()));
    }

    #[test]
    fn test_hovering_the_selected_record_reissues_nothing() {
        let store = site_store();
        let mut controller = FocusController::default();

        controller.apply(FocusEvent::Pick(rumtek()), &store);
        let commands = controller.apply(FocusEvent::HoverEnter(rumtek()), &store);
        assert!(commands.is_empty());

        // Leaving must not close the selection's popup.
        let commands = controller.apply(FocusEvent::HoverLeave(rumtek()), &store);
        assert!(commands.is_empty());
    }

    #[test]
    fn test_record_without_position_opens_popup_only() {
        let store = RecordStore::ready(dataset::archive_items());
        let mut controller = FocusController::default();

        let commands = controller.apply(FocusEvent::Pick(RecordId::from("1")), &store);
        assert_eq!(commands, vec![MapCommand::OpenPopup(RecordId::from("1"))]);
    }

    #[test]
    fn test_search_resolved_behaves_like_pick() {
        let store = site_store();
        let mut controller = FocusController::default();

        let commands = controller.apply(FocusEvent::SearchResolved(rumtek()), &store);
        assert_eq!(commands.len(), 2);
        assert_eq!(controller.state().selected(), Some(&rumtek()));
    }
}
