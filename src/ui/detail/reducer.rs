use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::state::DetailState;
use crate::ui::mvi::Reducer;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Open {
                post_id,
                generation,
            } => DetailState::Loading {
                post_id,
                generation,
            },
            DetailIntent::Loaded {
                generation,
                post,
                comments,
            } => match state {
                DetailState::Loading {
                    post_id,
                    generation: current,
                } if current == generation => DetailState::Ready {
                    post_id,
                    generation,
                    post,
                    comments,
                },
                other => other,
            },
            DetailIntent::Failed { generation } => match state {
                DetailState::Loading {
                    post_id,
                    generation: current,
                } if current == generation => DetailState::LoadedEmpty {
                    post_id,
                    generation,
                },
                other => other,
            },
            DetailIntent::Reset => DetailState::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_from_idle_starts_loading() {
        let state = DetailReducer::reduce(
            DetailState::Idle,
            DetailIntent::Open {
                post_id: 3,
                generation: 1,
            },
        );
        assert!(state.is_loading());
        assert_eq!(state.post_id(), Some(3));
    }

    #[test]
    fn failed_with_current_generation_is_empty() {
        let state = DetailState::Loading {
            post_id: 3,
            generation: 1,
        };
        let state = DetailReducer::reduce(state, DetailIntent::Failed { generation: 1 });
        assert_eq!(
            state,
            DetailState::LoadedEmpty {
                post_id: 3,
                generation: 1
            }
        );
        assert!(state.post().is_none());
        assert!(state.comments().is_empty());
    }

    #[test]
    fn outcome_after_reset_is_dropped() {
        let state = DetailReducer::reduce(DetailState::Idle, DetailIntent::Failed { generation: 1 });
        assert_eq!(state, DetailState::Idle);
    }
}
