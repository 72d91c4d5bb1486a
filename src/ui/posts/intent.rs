use crate::model::{Post, PostId};
use crate::ui::mvi::Intent;

/// Transitions of the post store, one per gateway outcome.
#[derive(Debug, Clone)]
pub enum PostsIntent {
    /// List fetch sent.
    ListStarted,
    ListSucceeded { posts: Vec<Post> },
    ListFailed { message: String },
    CreateSucceeded { post: Post },
    /// Replaces the post with the same id. Unknown ids leave the store untouched.
    UpdateSucceeded { post: Post },
    DeleteSucceeded { id: PostId },
}

impl Intent for PostsIntent {}
