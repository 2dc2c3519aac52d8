use tracing::{error, warn};

use crate::notice::{Notice, NoticeBoard, NoticeKind};

use super::api::{ApiError, UserDirectoryApi};
use super::model::{User, UserDraft};

const LOAD_ERROR_TEXT: &str = "Error al cargar los usuarios. Verifica la conexión.";
const SAVE_ERROR_TEXT: &str = "Error al guardar el usuario";
const SAVE_IN_FLIGHT_TEXT: &str = "Hay un guardado en curso";
const DELETE_ERROR_TEXT: &str = "Error al eliminar el usuario";
const LOADING_TEXT: &str = "Cargando usuarios...";
const EMPTY_TEXT: &str = "No hay usuarios registrados";

/// Version ticket for one mirror fetch. A completed fetch only replaces
/// the mirror when no newer completion has been applied, so a slow early
/// response can never overwrite a later one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RefreshTicket(u64);

/// Render-ready snapshot of the directory.
#[derive(Debug, Clone)]
pub struct DirectoryView {
    pub rows: Vec<User>,
    pub total: usize,
    /// The record loaded into the edit surface, if any.
    pub editing: Option<User>,
    /// The id awaiting delete confirmation, if the gate is open.
    pub confirming_delete: Option<i64>,
    /// True while a create/update is in flight; hosts disable submit.
    pub saving: bool,
    /// Placeholder text while nothing can be listed yet.
    pub placeholder: Option<String>,
    pub notices: Vec<Notice>,
}

/// Keeps an in-memory mirror of the remote collection in sync with
/// user-initiated mutations. The mirror only ever changes from a full
/// re-fetch, never optimistically.
pub struct DirectoryController<A: UserDirectoryApi> {
    api: A,
    mirror: Vec<User>,
    loaded: bool,
    edit_target: Option<i64>,
    pending_delete: Option<i64>,
    pub(super) saving: bool,
    form_reset_pending: bool,
    next_ticket: u64,
    applied_ticket: u64,
    notices: NoticeBoard,
}

impl<A: UserDirectoryApi> DirectoryController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            mirror: Vec::new(),
            loaded: false,
            edit_target: None,
            pending_delete: None,
            saving: false,
            form_reset_pending: false,
            next_ticket: 0,
            applied_ticket: 0,
            notices: NoticeBoard::new(),
        }
    }

    /// Fetch the whole collection and replace the mirror. On failure the
    /// prior mirror stays untouched and a retryable error is posted.
    pub async fn refresh(&mut self) {
        let ticket = self.begin_refresh();
        let result = self.api.list().await;
        self.apply_refresh(ticket, result);
    }

    /// Take a version ticket for a fetch the host drives itself.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.next_ticket += 1;
        RefreshTicket(self.next_ticket)
    }

    /// Apply a completed fetch. A stale success (an earlier ticket
    /// completing after a later one was applied) is discarded.
    pub fn apply_refresh(&mut self, ticket: RefreshTicket, result: Result<Vec<User>, ApiError>) {
        match result {
            Ok(users) => {
                if ticket.0 <= self.applied_ticket {
                    warn!(ticket = ticket.0, "discarding stale refresh result");
                    return;
                }
                self.applied_ticket = ticket.0;
                self.mirror = users;
                self.loaded = true;
            }
            Err(e) => {
                error!("failed to load users: {e}");
                self.notices.push(NoticeKind::Error, LOAD_ERROR_TEXT);
            }
        }
    }

    /// Create, or update when an edit target is set. Success clears the
    /// edit target, signals a form reset and re-fetches; failure posts a
    /// generic save error and changes nothing. A submission already in
    /// flight rejects further ones up front.
    pub async fn submit(&mut self, draft: UserDraft) {
        if self.saving {
            self.notices.push(NoticeKind::Warning, SAVE_IN_FLIGHT_TEXT);
            return;
        }
        self.saving = true;
        let (result, success_text) = match self.edit_target {
            Some(id) => (
                self.api.update(id, &draft).await.map(|_| ()),
                "Usuario actualizado exitosamente",
            ),
            None => (
                self.api.create(&draft).await.map(|_| ()),
                "Usuario creado exitosamente",
            ),
        };
        self.saving = false;

        match result {
            Ok(()) => {
                self.edit_target = None;
                self.form_reset_pending = true;
                self.notices.push(NoticeKind::Success, success_text);
                self.refresh().await;
            }
            Err(e) => {
                error!("failed to save user: {e}");
                self.notices.push(NoticeKind::Error, SAVE_ERROR_TEXT);
            }
        }
    }

    /// Load a mirror record into the edit slot. An id the mirror does not
    /// hold (it may be stale) is a silent no-op.
    pub fn begin_edit(&mut self, id: i64) {
        if self.mirror.iter().any(|u| u.id == id) {
            self.edit_target = Some(id);
        }
    }

    /// Leave edit mode and reset the form, no confirmation asked.
    pub fn cancel_edit(&mut self) {
        self.edit_target = None;
        self.form_reset_pending = true;
    }

    /// First phase of deletion: remember the candidate and open the
    /// confirmation gate.
    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    /// Second phase: issue the delete for the stored candidate, if one is
    /// stored. The gate closes and the candidate clears regardless of the
    /// outcome, so a failure never leaves the UI stuck confirming.
    pub async fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        match self.api.delete(id).await {
            Ok(()) => {
                self.notices
                    .push(NoticeKind::Success, "Usuario eliminado exitosamente");
                self.refresh().await;
            }
            Err(e) => {
                error!("failed to delete user {id}: {e}");
                self.notices.push(NoticeKind::Error, DELETE_ERROR_TEXT);
            }
        }
    }

    /// Close the confirmation gate without issuing anything.
    pub fn cancel_deletion(&mut self) {
        self.pending_delete = None;
    }

    /// Consume the pending form-reset signal.
    pub fn take_form_reset(&mut self) -> bool {
        std::mem::take(&mut self.form_reset_pending)
    }

    pub fn mirror(&self) -> &[User] {
        &self.mirror
    }

    pub fn view(&mut self) -> DirectoryView {
        let placeholder = if !self.loaded {
            Some(LOADING_TEXT.to_string())
        } else if self.mirror.is_empty() {
            Some(EMPTY_TEXT.to_string())
        } else {
            None
        };

        DirectoryView {
            rows: self.mirror.clone(),
            total: self.mirror.len(),
            editing: self
                .edit_target
                .and_then(|id| self.mirror.iter().find(|u| u.id == id).cloned()),
            confirming_delete: self.pending_delete,
            saving: self.saving,
            placeholder,
            notices: self.notices.active(),
        }
    }
}
