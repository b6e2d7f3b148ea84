//! Calendar event records.

use crate::record::{FilterKey, Record};
use crate::types::RecordId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Event classification used by the calendar kind filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Festival,
    Religious,
    Cultural,
    Retreat,
    Tour,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Festival => "Festival",
            EventKind::Religious => "Religious",
            EventKind::Cultural => "Cultural",
            EventKind::Retreat => "Retreat",
            EventKind::Tour => "Tour",
        }
    }
}

/// A scheduled monastery event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: RecordId,
    pub title: String,
    pub monastery: String,
    pub date: NaiveDate,
    /// Local start time as displayed (e.g. "06:00 AM").
    pub time: String,
    pub duration: String,
    pub kind: EventKind,
    pub description: String,
    pub attendees: String,
    pub booking: bool,
    pub featured: bool,
}

impl Record for EventRecord {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn field(&self, key: FilterKey) -> Option<&str> {
        match key {
            FilterKey::Kind => Some(self.kind.as_str()),
            FilterKey::Monastery => Some(&self.monastery),
            FilterKey::Century | FilterKey::Region => None,
        }
    }
}
