//! Virtual-tour stop records, hydrated from a one-shot fetch.

use crate::record::{FilterKey, Record};
use crate::types::RecordId;
use serde::{Deserialize, Serialize};

/// Narration text per supported language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Narration {
    pub en: Option<String>,
    pub hi: Option<String>,
    pub ne: Option<String>,
}

impl Narration {
    /// Narration for a language code, falling back to English, then to
    /// whichever translation exists.
    pub fn text_for(&self, code: &str) -> Option<&str> {
        let requested = match code {
            "hi" => self.hi.as_deref(),
            "ne" => self.ne.as_deref(),
            _ => self.en.as_deref(),
        };
        requested
            .or(self.en.as_deref())
            .or(self.hi.as_deref())
            .or(self.ne.as_deref())
    }
}

/// One stop of a 360° virtual tour.
///
/// Fetched payloads may omit any field; [`TourStop::normalize`] fills the
/// gaps the way the views expect before the stop enters the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TourStop {
    pub id: Option<RecordId>,
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub narration: Narration,
}

/// A tour stop with all display fields resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourScene {
    pub id: RecordId,
    pub title: String,
    pub image_url: String,
    pub thumbnail_url: String,
    pub narration: Narration,
}

impl TourStop {
    /// Resolve missing fields from the stop's position in the payload:
    /// id falls back to `index + 1`, title to "Stop N", the thumbnail to
    /// the full image.
    pub fn normalize(self, index: usize) -> TourScene {
        let ordinal = index as u32 + 1;
        let image_url = self.image_url.unwrap_or_default();
        let thumbnail_url = self
            .thumbnail_url
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| image_url.clone());
        TourScene {
            id: self.id.unwrap_or_else(|| RecordId::from(ordinal)),
            title: self
                .title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| format!("Stop {ordinal}")),
            image_url,
            thumbnail_url,
            narration: self.narration,
        }
    }
}

impl Record for TourScene {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        self.narration.text_for("en").unwrap_or_default()
    }

    fn field(&self, _key: FilterKey) -> Option<&str> {
        None
    }
}
