use crate::model::Category;
use crate::ui::editor::intent::EditorIntent;
use crate::ui::editor::state::{EditorMode, EditorState, FormError, FormField, MovieForm};
use crate::ui::mvi::Reducer;

pub struct EditorReducer;

impl Reducer for EditorReducer {
    type State = EditorState;
    type Intent = EditorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditorIntent::Open(movie) => {
                let (mode, form) = match movie {
                    Some(movie) => (EditorMode::Edit { id: movie.id }, MovieForm::from_movie(&movie)),
                    None => (EditorMode::Create, MovieForm::default()),
                };
                EditorState::Open {
                    mode,
                    form,
                    focused: FormField::Title,
                    error: None,
                }
            }
            EditorIntent::Close => EditorState::Hidden,
            EditorIntent::FocusNext => map_open(state, |_, focused, _| *focused = focused.next()),
            EditorIntent::FocusPrev => map_open(state, |_, focused, _| *focused = focused.prev()),
            EditorIntent::Input(ch) => map_open(state, |form, focused, error| {
                if let Some(text) = form.text_mut(*focused) {
                    text.push(ch);
                    *error = None;
                }
            }),
            EditorIntent::Backspace => map_open(state, |form, focused, _| {
                if let Some(text) = form.text_mut(*focused) {
                    text.pop();
                }
            }),
            EditorIntent::Increase => map_open(state, |form, focused, error| match focused {
                FormField::Rating => form.rating = form.rating.step_up(),
                FormField::Category => {
                    form.category = Some(Category::cycle_forward(form.category));
                    *error = None;
                }
                _ => {}
            }),
            EditorIntent::Decrease => map_open(state, |form, focused, error| match focused {
                FormField::Rating => form.rating = form.rating.step_down(),
                FormField::Category => {
                    form.category = Some(Category::cycle_backward(form.category));
                    *error = None;
                }
                _ => {}
            }),
            EditorIntent::Reject(reason) => map_open(state, |_, focused, error| {
                *focused = match reason {
                    FormError::MissingTitle => FormField::Title,
                    FormError::MissingImageUrl => FormField::ImageUrl,
                    FormError::MissingCategory => FormField::Category,
                };
                *error = Some(reason);
            }),
        }
    }
}

/// Apply `edit` to an open form; a hidden editor stays hidden.
fn map_open<F>(state: EditorState, edit: F) -> EditorState
where
    F: FnOnce(&mut MovieForm, &mut FormField, &mut Option<FormError>),
{
    match state {
        EditorState::Open {
            mode,
            mut form,
            mut focused,
            mut error,
        } => {
            edit(&mut form, &mut focused, &mut error);
            EditorState::Open {
                mode,
                form,
                focused,
                error,
            }
        }
        hidden => hidden,
    }
}
