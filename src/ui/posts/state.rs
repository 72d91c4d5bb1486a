use crate::model::{Post, PostId};
use crate::ui::mvi::UiState;

/// Cached copy of the remote post list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostsState {
    /// Server order, then append order for creates.
    pub posts: Vec<Post>,
    /// True only while the list fetch is outstanding.
    pub loading: bool,
    /// Message from the last failed list fetch.
    pub error: Option<String>,
}

impl UiState for PostsState {}

impl PostsState {
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn find(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }
}
