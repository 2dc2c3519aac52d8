//! fonoteca: headless controllers for three small client applications.
//!
//! - [`player`] drives a single audio engine over a music catalog merged
//!   from two storage tiers ([`catalog`]): a durable file-backed store and
//!   a session-scoped in-memory store.
//! - [`directory`] mirrors a remote REST user collection and keeps the
//!   mirror in sync with user-initiated create/update/delete.
//! - [`quote`] computes travel-combo prices from static catalogs.
//!
//! Rendering is not this crate's concern: each controller exposes a plain
//! view-model snapshot (`view()`) and transient [`notice`]s; binding those
//! to a UI is the host's job. Controllers are constructed with their
//! collaborators injected ([`config::Settings`] carries the defaults) and
//! live for the application's lifetime.

pub mod catalog;
pub mod config;
pub mod directory;
pub mod notice;
pub mod player;
pub mod quote;
