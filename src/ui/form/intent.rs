use crate::model::Post;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Append a character to the focused field.
    Insert(char),
    /// Remove the last character of the focused field.
    Backspace,
    FocusNext,
    /// Run validation and store the per-field messages.
    Validate,
    /// Back to an empty draft.
    Clear,
}

impl Intent for FormIntent {}

#[derive(Debug, Clone)]
pub enum EditIntent {
    /// Open the modal pre-filled with the post's current values.
    Open { post: Post },
    Form(FormIntent),
    Close,
}

impl Intent for EditIntent {}
