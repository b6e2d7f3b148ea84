//! Map collaborator port and command dispatch.

use crate::focus::MapCommand;
use crate::geo::GeoPoint;
use crate::types::RecordId;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// External map collaborator.
///
/// Implementations adapt a concrete map widget; kora only ever issues
/// these three commands and never reads anything back.
pub trait MapPort: Send + Sync {
    fn move_viewport(&self, position: GeoPoint, zoom: u8, duration_ms: u64);
    fn open_popup(&self, id: &RecordId);
    fn close_popup(&self, id: &RecordId);
}

/// Late-binding handle to the map collaborator.
///
/// Map libraries load asynchronously; commands dispatched before
/// [`MapLink::attach`] are dropped silently and the next transition
/// re-issues against the attached port. No retry, no surfaced error.
#[derive(Default)]
pub struct MapLink {
    port: RwLock<Option<Arc<dyn MapPort>>>,
}

impl MapLink {
    pub fn new() -> Self {
        MapLink::default()
    }

    pub fn attach(&self, port: Arc<dyn MapPort>) {
        *self.port.write() = Some(port);
    }

    pub fn detach(&self) {
        *self.port.write() = None;
    }

    pub fn is_attached(&self) -> bool {
        self.port.read().is_some()
    }

    /// Forward commands to the attached port, dropping them when none is
    /// attached yet.
    pub fn dispatch(&self, commands: &[MapCommand]) {
        let guard = self.port.read();
        let Some(port) = guard.as_ref() else {
            if !commands.is_empty() {
                debug!(
                    dropped = commands.len(),
                    "Map collaborator not attached, dropping commands"
                );
            }
            return;
        };
        for command in commands {
            match command {
                MapCommand::MoveViewport {
                    position,
                    zoom,
                    duration_ms,
                } => port.move_viewport(*position, *zoom, *duration_ms),
                MapCommand::OpenPopup(id) => port.open_popup(id),
                MapCommand::ClosePopup(id) => port.close_popup(id),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingPort {
        log: Mutex<Vec<String>>,
    }

    impl MapPort for RecordingPort {
        fn move_viewport(&self, position: GeoPoint, zoom: u8, _duration_ms: u64) {
            self.log
                .lock()
                .push(format!("move {} {} z{zoom}", position.lat(), position.lon()));
        }

        fn open_popup(&self, id: &RecordId) {
            self.log.lock().push(format!("open {id}"));
        }

        fn close_popup(&self, id: &RecordId) {
            self.log.lock().push(format!("close {id}"));
        }
    }

    #[test]
    fn test_unattached_link_drops_commands_silently() {
        let link = MapLink::new();
        link.dispatch(&[MapCommand::OpenPopup(RecordId::from("x"))]);
        assert!(!link.is_attached());
    }

    #[test]
    fn test_attached_link_forwards_in_order() {
        let link = MapLink::new();
        let port = Arc::new(RecordingPort::default());
        link.attach(port.clone());

        link.dispatch(&[
            MapCommand::ClosePopup(RecordId::from("a")),
            MapCommand::OpenPopup(RecordId::from("b")),
        ]);
        assert_eq!(*port.log.lock(), vec!["close a", "open b"]);
    }
}
