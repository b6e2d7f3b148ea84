//! Domain records
//!
//! The catalog holds a closed set of record kinds (heritage sites,
//! archive items, calendar events, tour stops), each with its own
//! attribute schema. The [`Record`] trait exposes the shared surface the
//! filter engine and focus controller operate on.

pub mod archive;
pub mod event;
pub mod site;
pub mod tour;

pub use archive::{ArchiveDetail, ArchiveRecord};
pub use event::{EventKind, EventRecord};
pub use site::SiteRecord;
pub use tour::{Narration, TourStop};

use crate::geo::GeoPoint;
use crate::types::RecordId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Enumerable classification attributes used as exact-match filter keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FilterKey {
    /// Geographic region of a site (e.g. "East Sikkim").
    Region,
    /// Century attribution (e.g. "17th Century").
    Century,
    /// Holding or hosting monastery.
    Monastery,
    /// Record kind within its collection (archive type, event type).
    Kind,
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FilterKey::Region => "region",
            FilterKey::Century => "century",
            FilterKey::Monastery => "monastery",
            FilterKey::Kind => "kind",
        };
        f.write_str(label)
    }
}

/// Shared surface over all catalog record kinds.
///
/// `field` returns the record's value for a classification key, or `None`
/// when the kind does not carry that attribute; an active filter on a
/// missing attribute simply never matches.
pub trait Record {
    fn id(&self) -> &RecordId;

    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn tags(&self) -> &[String] {
        &[]
    }

    fn field(&self, key: FilterKey) -> Option<&str>;

    /// Spatial position, present for sites only.
    fn position(&self) -> Option<GeoPoint> {
        None
    }
}
