//! Digital-archive records.

use crate::record::{FilterKey, Record};
use crate::types::RecordId;
use serde::{Deserialize, Serialize};

/// Kind-specific attributes of an archive item.
///
/// The source data spread these across optional fields that varied by
/// item type; here each kind carries exactly its own schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArchiveDetail {
    Manuscript { pages: u32, language: String },
    Mural { dimensions: String, medium: String },
    Artifact { material: String, quantity: u32 },
    Document { material: String, sheets: u32 },
    Artwork { dimensions: Option<String>, medium: String },
}

impl ArchiveDetail {
    /// Display label, doubling as the exact-match value for the kind filter.
    pub fn kind(&self) -> &'static str {
        match self {
            ArchiveDetail::Manuscript { .. } => "Manuscript",
            ArchiveDetail::Mural { .. } => "Mural",
            ArchiveDetail::Artifact { .. } => "Artifact",
            ArchiveDetail::Document { .. } => "Document",
            ArchiveDetail::Artwork { .. } => "Artwork",
        }
    }
}

/// A digitized archive item: manuscript, mural, artifact, document, or artwork.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveRecord {
    pub id: RecordId,
    pub title: String,
    pub century: String,
    pub monastery: String,
    pub description: String,
    pub resolution: String,
    pub condition: String,
    pub featured: bool,
    pub tags: Vec<String>,
    pub detail: ArchiveDetail,
}

impl Record for ArchiveRecord {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn field(&self, key: FilterKey) -> Option<&str> {
        match key {
            FilterKey::Kind => Some(self.detail.kind()),
            FilterKey::Century => Some(&self.century),
            FilterKey::Monastery => Some(&self.monastery),
            FilterKey::Region => None,
        }
    }
}
