use crate::model::{Movie, MovieDraft, MovieId};

/// Requested mutation emitted by a card or the editor.
#[derive(Debug, Clone, PartialEq)]
pub enum IntentEvent {
    /// New movie from the editor; the store assigns the id.
    Create(MovieDraft),
    /// Whole-record replacement of an existing movie.
    Update(Movie),
    /// Remove by id. Always goes through a confirmation step.
    Delete { id: MovieId },
    /// Open the editor on this movie. Not a mutation.
    Edit(Movie),
}

impl IntentEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create(_) => "create",
            Self::Update(_) => "update",
            Self::Delete { .. } => "delete",
            Self::Edit(_) => "edit",
        }
    }
}

/// Delete that is waiting on the user.
///
/// Only the controller mints these; a removal can only be applied by
/// handing one back through `resolve_delete`. Each request carries its own
/// serial, so a copy kept from an earlier request for the same movie no
/// longer matches once that request is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    id: MovieId,
    serial: u64,
}

impl PendingDelete {
    pub(crate) fn new(id: MovieId, serial: u64) -> Self {
        Self { id, serial }
    }

    pub fn id(&self) -> MovieId {
        self.id
    }
}

/// User answer to a delete confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Decline,
}

/// What the controller did with an intent.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// List mutated, persisted and re-rendered.
    Applied,
    /// Dropped without effect (unknown id, stale confirmation).
    Ignored,
    /// Delete is parked until the user answers.
    ConfirmationRequired(PendingDelete),
    /// User declined a delete; nothing changed.
    Cancelled,
    /// Rejected because a confirmation is still open.
    Blocked,
    /// Caller should open the editor on this movie.
    EditRequested(Movie),
}
