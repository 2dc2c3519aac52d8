use tracing::warn;

use super::model::{StorageTier, TrackRecord};
use super::store::{KeyValueStore, StoreError};

/// Key of the single durable-tier record.
pub const DURABLE_TRACK_KEY: &str = "track_primary";
/// Namespace prefix of session-tier records.
pub const SESSION_TRACK_PREFIX: &str = "track_";

/// The catalog as the rest of the crate sees it: one durable backend, one
/// session backend, merged by concatenation (durable record first, then the
/// session records in the session store's enumeration order).
pub struct CatalogRepository {
    durable: Box<dyn KeyValueStore>,
    session: Box<dyn KeyValueStore>,
}

impl CatalogRepository {
    pub fn new(durable: Box<dyn KeyValueStore>, session: Box<dyn KeyValueStore>) -> Self {
        Self { durable, session }
    }

    /// Ensure the seed records exist: one durable track plus two session
    /// tracks. Overwrites the same keys with the same values on every call,
    /// so repeated invocation is safe but never additive.
    pub fn seed(&mut self) -> Result<(), StoreError> {
        let durable = durable_seed();
        self.durable
            .set(DURABLE_TRACK_KEY, &serde_json::to_string(&durable)?)?;

        for record in session_seeds() {
            self.session.set(
                &session_key(record.id),
                &serde_json::to_string(&record)?,
            )?;
        }
        Ok(())
    }

    /// All records across both tiers. Entries that fail to decode are
    /// skipped with a warning; a corrupt value must never break the list.
    pub fn list_all(&self) -> Vec<TrackRecord> {
        let mut records = Vec::new();

        if let Some(raw) = self.durable.get(DURABLE_TRACK_KEY) {
            match serde_json::from_str::<TrackRecord>(&raw) {
                Ok(record) => records.push(record),
                Err(e) => warn!(key = DURABLE_TRACK_KEY, "skipping corrupt durable record: {e}"),
            }
        }

        for key in self.session.keys_with_prefix(SESSION_TRACK_PREFIX) {
            let Some(raw) = self.session.get(&key) else {
                continue;
            };
            match serde_json::from_str::<TrackRecord>(&raw) {
                Ok(record) => records.push(record),
                Err(e) => warn!(key = key.as_str(), "skipping corrupt session record: {e}"),
            }
        }

        records
    }

    /// Write a record into the session tier under its id-derived key.
    pub fn add_session_record(&mut self, record: &TrackRecord) -> Result<(), StoreError> {
        self.session
            .set(&session_key(record.id), &serde_json::to_string(record)?)
    }
}

pub(super) fn session_key(id: i64) -> String {
    format!("{SESSION_TRACK_PREFIX}{id}")
}

fn durable_seed() -> TrackRecord {
    TrackRecord {
        id: 1,
        title: "Courtesy Call".to_string(),
        artist: "Thousand Foot Krutch".to_string(),
        label: "TFK Music".to_string(),
        duration_display: "3 minutos 45 segundos".to_string(),
        source_uri: "assets/audio/CourtesyCall.mp3".to_string(),
        country: "Canadiense".to_string(),
        tier: StorageTier::Durable,
    }
}

fn session_seeds() -> [TrackRecord; 2] {
    [
        TrackRecord {
            id: 2,
            title: "Crossfaded".to_string(),
            artist: "Becko".to_string(),
            label: "Electronic Records".to_string(),
            duration_display: "4 minutos 20 segundos".to_string(),
            source_uri: "assets/audio/Crossfaded.mp3".to_string(),
            country: "Americana".to_string(),
            tier: StorageTier::Session,
        },
        TrackRecord {
            id: 3,
            title: "My Demons".to_string(),
            artist: "Starset".to_string(),
            label: "Razor & Tie".to_string(),
            duration_display: "4 minutos 5 segundos".to_string(),
            source_uri: "assets/audio/MyDemons.mp3".to_string(),
            country: "Americana".to_string(),
            tier: StorageTier::Session,
        },
    ]
}
