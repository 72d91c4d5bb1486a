use crate::model::{Comment, Post, PostId};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    /// Navigation to `/post/{post_id}` started a new fetch.
    Open { post_id: PostId, generation: u64 },
    /// Both reads resolved.
    Loaded {
        generation: u64,
        post: Post,
        comments: Vec<Comment>,
    },
    /// Either read failed.
    Failed { generation: u64 },
    /// Left the detail route.
    Reset,
}

impl Intent for DetailIntent {}
