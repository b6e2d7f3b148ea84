//! Heritage site records.

use crate::geo::GeoPoint;
use crate::record::{FilterKey, Record};
use crate::types::RecordId;
use serde::{Deserialize, Serialize};

/// A heritage site: monastery, sacred lake, ruin, or pilgrimage complex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteRecord {
    pub id: RecordId,
    pub name: String,
    pub position: GeoPoint,
    /// Geographic region, defaulted to "Sikkim" where the source data
    /// carries no finer attribution.
    pub region: String,
    pub century: String,
    pub info: String,
    pub speciality: String,
    pub festival: String,
    /// Festivals shown on the detail view; at minimum the primary one.
    pub festivals: Vec<String>,
    pub rating: f32,
    pub visitors: String,
    pub featured: bool,
}

impl Record for SiteRecord {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.info
    }

    fn tags(&self) -> &[String] {
        &self.festivals
    }

    fn field(&self, key: FilterKey) -> Option<&str> {
        match key {
            FilterKey::Region => Some(&self.region),
            FilterKey::Century => Some(&self.century),
            FilterKey::Monastery | FilterKey::Kind => None,
        }
    }

    fn position(&self) -> Option<GeoPoint> {
        Some(self.position)
    }
}
