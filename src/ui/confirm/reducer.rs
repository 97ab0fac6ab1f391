use crate::ui::confirm::intent::ConfirmIntent;
use crate::ui::confirm::state::ConfirmState;
use crate::ui::mvi::Reducer;

pub struct ConfirmReducer;

impl Reducer for ConfirmReducer {
    type State = ConfirmState;
    type Intent = ConfirmIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // A second prompt never replaces the first; the controller
            // refuses new deletes while one is parked anyway.
            ConfirmIntent::Ask { pending, title } => match state {
                ConfirmState::Hidden => ConfirmState::Visible { pending, title },
                visible => visible,
            },
            ConfirmIntent::Dismiss => ConfirmState::Hidden,
        }
    }
}
