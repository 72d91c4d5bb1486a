//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use parking_lot::Mutex;
use postboard::api::{ApiError, PostsGateway};
use postboard::model::{Comment, NewPost, Post, PostId, PostPatch};
use postboard::ui::app::{App, UiCommand};
use tokio::sync::mpsc;

pub fn post(id: PostId) -> Post {
    Post {
        id,
        title: format!("Post number {id} title"),
        body: format!("Body of post {id}, long enough to be rendered as a paragraph."),
        user_id: Some(1),
    }
}

pub fn comment(id: u64, post_id: PostId) -> Comment {
    Comment {
        id,
        post_id,
        name: format!("comment {id}"),
        body: "nice post".to_string(),
        email: format!("user{id}@example.com"),
    }
}

/// App wired to a command channel the test can drain.
pub fn app_with_commands() -> (App, mpsc::Receiver<UiCommand>) {
    let (tx, rx) = mpsc::channel(32);
    let mut app = App::new(3);
    app.set_command_sender(tx);
    (app, rx)
}

/// App whose worker is gone: every command send fails.
pub fn app_without_worker() -> App {
    let (tx, rx) = mpsc::channel(1);
    drop(rx);
    let mut app = App::new(3);
    app.set_command_sender(tx);
    app
}

pub fn drain(rx: &mut mpsc::Receiver<UiCommand>) -> Vec<UiCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = rx.try_recv() {
        commands.push(command);
    }
    commands
}

/// Status error without a network round trip.
pub fn status_error(operation: &'static str, status: u16) -> ApiError {
    ApiError::Status { operation, status }
}

/// In-memory gateway recording every call.
#[derive(Default)]
pub struct FakeGateway {
    pub posts: Mutex<Vec<Post>>,
    pub comments: Mutex<Vec<Comment>>,
    pub calls: Mutex<Vec<String>>,
    /// Operations that should answer with HTTP 500.
    pub failing: Mutex<Vec<&'static str>>,
}

impl FakeGateway {
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let gateway = Self::default();
        *gateway.posts.lock() = posts;
        gateway
    }

    pub fn fail(&self, operation: &'static str) {
        self.failing.lock().push(operation);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn record(&self, operation: &'static str, call: String) -> Result<(), ApiError> {
        self.calls.lock().push(call);
        if self.failing.lock().contains(&operation) {
            return Err(status_error(operation, 500));
        }
        Ok(())
    }
}

#[async_trait]
impl PostsGateway for FakeGateway {
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.record("list posts", "GET /posts".to_string())?;
        Ok(self.posts.lock().clone())
    }

    async fn create_post(&self, new_post: NewPost) -> Result<Post, ApiError> {
        self.record("create post", "POST /posts".to_string())?;
        Ok(Post {
            id: 101,
            title: new_post.title,
            body: new_post.body,
            user_id: None,
        })
    }

    async fn update_post(&self, id: PostId, patch: PostPatch) -> Result<Post, ApiError> {
        self.record("update post", format!("PATCH /posts/{id}"))?;
        let mut updated = post(id);
        if let Some(title) = patch.title {
            updated.title = title;
        }
        if let Some(body) = patch.body {
            updated.body = body;
        }
        Ok(updated)
    }

    async fn delete_post(&self, id: PostId) -> Result<PostId, ApiError> {
        self.record("delete post", format!("DELETE /posts/{id}"))?;
        Ok(id)
    }

    async fn get_post(&self, id: PostId) -> Result<Post, ApiError> {
        self.record("get post", format!("GET /posts/{id}"))?;
        Ok(post(id))
    }

    async fn list_comments(&self, post_id: PostId) -> Result<Vec<Comment>, ApiError> {
        self.record("list comments", format!("GET /comments?postId={post_id}"))?;
        Ok(self
            .comments
            .lock()
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }
}
