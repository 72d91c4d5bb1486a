use crate::model::{NewPost, PostId, PostPatch};
use crate::ui::mvi::UiState;
use crate::validation::{self, ValidationErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Body,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Body,
            FormField::Body => FormField::Title,
        }
    }
}

/// Editable post draft with the messages from its last validation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostFormState {
    pub title: String,
    pub body: String,
    pub focused: FormField,
    /// Set on submit; editing does not clear them.
    pub errors: ValidationErrors,
}

impl UiState for PostFormState {}

impl PostFormState {
    pub fn with_values(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            ..Self::default()
        }
    }

    /// Derived flag for the create button.
    pub fn is_submit_disabled(&self) -> bool {
        validation::is_create_disabled(&self.title, &self.body)
    }

    pub fn to_new_post(&self) -> NewPost {
        NewPost {
            title: self.title.clone(),
            body: self.body.clone(),
        }
    }

    pub fn to_patch(&self) -> PostPatch {
        PostPatch::full(self.title.clone(), self.body.clone())
    }
}

/// Update modal.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditDialogState {
    #[default]
    Hidden,
    Visible {
        post_id: PostId,
        form: PostFormState,
    },
}

impl UiState for EditDialogState {}

impl EditDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn form(&self) -> Option<&PostFormState> {
        match self {
            Self::Visible { form, .. } => Some(form),
            Self::Hidden => None,
        }
    }

    pub fn post_id(&self) -> Option<PostId> {
        match self {
            Self::Visible { post_id, .. } => Some(*post_id),
            Self::Hidden => None,
        }
    }
}
