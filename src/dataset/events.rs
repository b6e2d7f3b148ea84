//! Calendar event collection: 6 scheduled monastery events.

use crate::record::{EventKind, EventRecord};
use crate::types::RecordId;
use chrono::NaiveDate;

/// Literal calendar date; the dataset tests re-validate every entry.
fn day(year: i32, month: u32, dom: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, dom).expect("calendar literal within range")
}

/// The event collection, in declaration order.
pub fn calendar_events() -> Vec<EventRecord> {
    vec![
        EventRecord {
            id: RecordId::from(1u32),
            title: "Losar Festival".to_string(),
            monastery: "Rumtek Monastery".to_string(),
            date: day(2025, 2, 15),
            time: "06:00 AM".to_string(),
            duration: "3 days".to_string(),
            kind: EventKind::Festival,
            description:
                "Tibetan New Year celebration with traditional dances, prayers, and cultural performances"
                    .to_string(),
            attendees: "500+ expected".to_string(),
            booking: true,
            featured: true,
        },
        EventRecord {
            id: RecordId::from(2u32),
            title: "Buddha Purnima".to_string(),
            monastery: "Multiple Locations".to_string(),
            date: day(2025, 5, 12),
            time: "05:30 AM".to_string(),
            duration: "Full day".to_string(),
            kind: EventKind::Religious,
            description:
                "Celebration of Buddha's birth, enlightenment, and death with special prayers and offerings"
                    .to_string(),
            attendees: "1000+ expected".to_string(),
            booking: true,
            featured: true,
        },
        EventRecord {
            id: RecordId::from(3u32),
            title: "Chaam Dance Performance".to_string(),
            monastery: "Pemayangtse Monastery".to_string(),
            date: day(2025, 3, 8),
            time: "10:00 AM".to_string(),
            duration: "4 hours".to_string(),
            kind: EventKind::Cultural,
            description:
                "Sacred mask dance performed by monks depicting the victory of good over evil"
                    .to_string(),
            attendees: "200+ expected".to_string(),
            booking: true,
            featured: false,
        },
        EventRecord {
            id: RecordId::from(4u32),
            title: "Meditation Retreat".to_string(),
            monastery: "Tashiding Monastery".to_string(),
            date: day(2025, 4, 20),
            time: "07:00 AM".to_string(),
            duration: "7 days".to_string(),
            kind: EventKind::Retreat,
            description: "Silent meditation retreat for spiritual seekers and practitioners"
                .to_string(),
            attendees: "50 participants".to_string(),
            booking: true,
            featured: false,
        },
        EventRecord {
            id: RecordId::from(5u32),
            title: "Saga Dawa Festival".to_string(),
            monastery: "Enchey Monastery".to_string(),
            date: day(2025, 6, 2),
            time: "06:00 AM".to_string(),
            duration: "Full day".to_string(),
            kind: EventKind::Festival,
            description: "Celebration of Buddha's enlightenment with prayer flag ceremonies"
                .to_string(),
            attendees: "300+ expected".to_string(),
            booking: true,
            featured: false,
        },
        EventRecord {
            id: RecordId::from(6u32),
            title: "Monastery Architecture Tour".to_string(),
            monastery: "Dubdi Monastery".to_string(),
            date: day(2025, 3, 25),
            time: "09:00 AM".to_string(),
            duration: "3 hours".to_string(),
            kind: EventKind::Tour,
            description:
                "Guided tour focusing on traditional Tibetan architecture and construction techniques"
                    .to_string(),
            attendees: "30 participants".to_string(),
            booking: true,
            featured: false,
        },
    ]
}
