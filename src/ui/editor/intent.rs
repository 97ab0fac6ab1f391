use crate::model::Movie;
use crate::ui::editor::state::FormError;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum EditorIntent {
    /// `None` opens a blank form, `Some` prefills it for editing.
    Open(Option<Movie>),
    /// Hide and drop the form, including any edit context.
    Close,
    FocusNext,
    FocusPrev,
    /// Typed character for the focused text field.
    Input(char),
    Backspace,
    /// Right arrow: rating up a step, or next category.
    Increase,
    /// Left arrow: rating down a step, or previous category.
    Decrease,
    /// Submission failed validation; keep the form open with the message.
    Reject(FormError),
}

impl Intent for EditorIntent {}
