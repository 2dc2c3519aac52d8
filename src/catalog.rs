//! Two-tier music catalog.
//!
//! Records live in two key-value backends with different lifetimes
//! (durable file store, session memory store) and are merged into one
//! render-ready list. Submission validation and the label/duration
//! display helpers live here too.

mod display;
mod label;
mod model;
mod repository;
mod store;
mod submit;

pub use display::{format_file_size, format_track_duration, DURATION_UNAVAILABLE};
pub use label::{detect_label, FALLBACK_LABEL};
pub use model::{StorageTier, TrackRecord};
pub use repository::{CatalogRepository, DURABLE_TRACK_KEY, SESSION_TRACK_PREFIX};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use submit::{SubmitError, TrackSubmission, UploadedFile};
