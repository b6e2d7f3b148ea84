//! One-shot store hydration from a tour-stop source.
//!
//! Fetch failure and malformed payloads both degrade to a ready-but-empty
//! store; no error reaches the view layer.

use crate::error::Result;
use crate::record::tour::{TourScene, TourStop};
use crate::store::RecordStore;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Source of tour-stop metadata, fetched once per view mount.
#[async_trait]
pub trait TourSource: Send + Sync {
    async fn fetch_stops(&self) -> Result<Vec<TourStop>>;
}

/// HTTP tour source reading an ordered JSON array of stops.
pub struct HttpTourSource {
    client: reqwest::Client,
    url: String,
}

impl HttpTourSource {
    pub fn new(url: impl Into<String>) -> Self {
        HttpTourSource {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl TourSource for HttpTourSource {
    async fn fetch_stops(&self) -> Result<Vec<TourStop>> {
        let stops = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<TourStop>>()
            .await?;
        Ok(stops)
    }
}

/// Run the one-shot fetch and build the tour store.
///
/// Any failure yields `Ready(empty)` rather than propagating; a pending
/// store only exists before this call resolves.
pub async fn hydrate_tours(source: &dyn TourSource) -> RecordStore<TourScene> {
    match source.fetch_stops().await {
        Ok(stops) => {
            let scenes: Vec<TourScene> = stops
                .into_iter()
                .enumerate()
                .map(|(index, stop)| stop.normalize(index))
                .collect();
            debug!(stop_count = scenes.len(), "Hydrated tour store");
            RecordStore::ready(scenes)
        }
        Err(err) => {
            warn!(error = %err, "Tour fetch failed, serving empty store");
            RecordStore::ready(Vec::new())
        }
    }
}
