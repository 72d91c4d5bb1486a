//! Boundary trait for every network call the UI makes.

use async_trait::async_trait;

use crate::api::error::ApiError;
use crate::model::{Comment, NewPost, Post, PostId, PostPatch};

/// Remote data gateway for posts and comments.
///
/// Each method performs a single request and hands back the decoded body.
/// Failures are returned as-is: there is no retry or fallback here.
#[async_trait]
pub trait PostsGateway: Send + Sync {
    /// `GET /posts`
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError>;

    /// `POST /posts`. The returned post carries the id assigned remotely.
    async fn create_post(&self, post: NewPost) -> Result<Post, ApiError>;

    /// `PATCH /posts/{id}`
    async fn update_post(&self, id: PostId, patch: PostPatch) -> Result<Post, ApiError>;

    /// `DELETE /posts/{id}`. Resolves to the id that was deleted.
    async fn delete_post(&self, id: PostId) -> Result<PostId, ApiError>;

    /// `GET /posts/{id}`
    async fn get_post(&self, id: PostId) -> Result<Post, ApiError>;

    /// `GET /comments?postId={id}`
    async fn list_comments(&self, post_id: PostId) -> Result<Vec<Comment>, ApiError>;
}
