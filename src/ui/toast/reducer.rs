use crate::ui::mvi::Reducer;
use crate::ui::toast::intent::ToastIntent;
use crate::ui::toast::state::ToastState;

pub struct ToastReducer;

impl Reducer for ToastReducer {
    type State = ToastState;
    type Intent = ToastIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ToastIntent::Show {
                message,
                kind,
                ticks,
            } => ToastState::Visible {
                message,
                kind,
                remaining_ticks: ticks.max(1),
            },
            ToastIntent::Tick => match state {
                ToastState::Visible {
                    remaining_ticks: 0 | 1,
                    ..
                } => ToastState::Hidden,
                ToastState::Visible {
                    message,
                    kind,
                    remaining_ticks,
                } => ToastState::Visible {
                    message,
                    kind,
                    remaining_ticks: remaining_ticks - 1,
                },
                ToastState::Hidden => ToastState::Hidden,
            },
        }
    }
}
