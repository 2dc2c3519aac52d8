use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;
use tracing::info;

use crate::config::UploadSettings;

use super::display::DURATION_UNAVAILABLE;
use super::label::detect_label;
use super::model::{StorageTier, TrackRecord};
use super::repository::CatalogRepository;
use super::store::StoreError;

/// The text fields of the submission form, as the host read them.
#[derive(Debug, Clone)]
pub struct TrackSubmission {
    pub title: String,
    pub artist: String,
    /// May be empty; the label is then auto-detected from the artist.
    pub label: String,
    /// May be empty; then marked as unavailable.
    pub duration_display: String,
    pub country: String,
}

/// The audio file the host selected, already placed somewhere the playback
/// engine can load it from (`uri`).
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub uri: String,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("no audio file was provided")]
    MissingFile,
    #[error("unsupported audio format: {mime_type}")]
    UnsupportedType { mime_type: String },
    #[error("file too large: {size_bytes} bytes (limit {limit})")]
    TooLarge { size_bytes: u64, limit: u64 },
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CatalogRepository {
    /// Validate a submission and, when it passes, derive a session-tier
    /// record with a timestamp id and write it.
    ///
    /// Any validation failure returns a distinct error without writing.
    pub fn submit_new_track(
        &mut self,
        submission: &TrackSubmission,
        file: Option<&UploadedFile>,
        rules: &UploadSettings,
    ) -> Result<TrackRecord, SubmitError> {
        let file = file.ok_or(SubmitError::MissingFile)?;

        if !rules
            .allowed_mime_types
            .iter()
            .any(|t| t == &file.mime_type)
        {
            return Err(SubmitError::UnsupportedType {
                mime_type: file.mime_type.clone(),
            });
        }

        if file.size_bytes > rules.max_file_bytes {
            return Err(SubmitError::TooLarge {
                size_bytes: file.size_bytes,
                limit: rules.max_file_bytes,
            });
        }

        let label = if submission.label.trim().is_empty() {
            detect_label(&submission.artist).to_string()
        } else {
            submission.label.clone()
        };
        let duration_display = if submission.duration_display.trim().is_empty() {
            DURATION_UNAVAILABLE.to_string()
        } else {
            submission.duration_display.clone()
        };

        let record = TrackRecord {
            id: timestamp_id(),
            title: submission.title.clone(),
            artist: submission.artist.clone(),
            label,
            duration_display,
            source_uri: file.uri.clone(),
            country: submission.country.clone(),
            tier: StorageTier::Session,
        };

        self.add_session_record(&record)?;
        info!(id = record.id, title = record.title.as_str(), "track added to session tier");
        Ok(record)
    }
}

fn timestamp_id() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}
