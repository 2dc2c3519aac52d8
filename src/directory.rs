//! Remote user directory.
//!
//! An in-memory mirror of a REST collection plus the controller that
//! keeps it synchronized with user-initiated create/update/delete.

mod api;
mod controller;
mod model;

pub use api::{ApiError, RestDirectoryApi, UserDirectoryApi};
pub use controller::{DirectoryController, DirectoryView, RefreshTicket};
pub use model::{Address, User, UserDraft};
