//! Records exchanged with the posts API.

use serde::{Deserialize, Serialize};

/// Identifier assigned to a post by the remote service.
pub type PostId = u64;

/// A post as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
    /// Author reference. Present on server records, absent on locally built ones.
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}

/// Payload for creating a post. The id is assigned remotely.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub body: String,
}

/// Partial update for an existing post. Absent fields are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PostPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl PostPatch {
    /// Patch replacing both title and body.
    pub fn full(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: Some(body.into()),
        }
    }
}

/// Read-only reply attached to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    #[serde(rename = "postId")]
    pub post_id: PostId,
    pub name: String,
    pub body: String,
    pub email: String,
}
