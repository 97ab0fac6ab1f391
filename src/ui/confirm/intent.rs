use crate::catalog::PendingDelete;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ConfirmIntent {
    /// Show the prompt for a parked delete.
    Ask { pending: PendingDelete, title: String },
    /// Prompt answered either way.
    Dismiss,
}

impl Intent for ConfirmIntent {}
