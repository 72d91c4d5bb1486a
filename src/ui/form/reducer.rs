use crate::ui::form::intent::{EditIntent, FormIntent};
use crate::ui::form::state::{EditDialogState, FormField, PostFormState};
use crate::ui::mvi::Reducer;
use crate::validation;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = PostFormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut state = state;
        match intent {
            FormIntent::Insert(ch) => match state.focused {
                FormField::Title => state.title.push(ch),
                FormField::Body => state.body.push(ch),
            },
            FormIntent::Backspace => {
                match state.focused {
                    FormField::Title => state.title.pop(),
                    FormField::Body => state.body.pop(),
                };
            }
            FormIntent::FocusNext => state.focused = state.focused.next(),
            FormIntent::Validate => {
                state.errors = validation::validate_post(&state.title, &state.body);
            }
            FormIntent::Clear => state = PostFormState::default(),
        }
        state
    }
}

pub struct EditReducer;

impl Reducer for EditReducer {
    type State = EditDialogState;
    type Intent = EditIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditIntent::Open { post } => EditDialogState::Visible {
                post_id: post.id,
                form: PostFormState::with_values(post.title, post.body),
            },
            EditIntent::Close => EditDialogState::Hidden,
            EditIntent::Form(form_intent) => match state {
                EditDialogState::Visible { post_id, form } => EditDialogState::Visible {
                    post_id,
                    form: FormReducer::reduce(form, form_intent),
                },
                other => other,
            },
        }
    }
}
