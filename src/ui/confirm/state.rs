use crate::catalog::PendingDelete;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConfirmState {
    #[default]
    Hidden,
    Visible {
        pending: PendingDelete,
        /// Title of the movie about to be removed.
        title: String,
    },
}

impl UiState for ConfirmState {}

impl ConfirmState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}
