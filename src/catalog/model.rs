use serde::{Deserialize, Serialize};

/// Which storage tier a catalog record lives in.
///
/// Durable records survive restarts; session records live only as long as
/// the session store the host provides.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageTier {
    Durable,
    Session,
}

/// A catalog entry, render-ready: `duration_display` is already formatted
/// and `source_uri` is whatever the playback engine can load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub label: String,
    pub duration_display: String,
    pub source_uri: String,
    pub country: String,
    pub tier: StorageTier,
}
