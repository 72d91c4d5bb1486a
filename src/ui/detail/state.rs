use crate::model::{Comment, Post, PostId};
use crate::ui::mvi::UiState;

/// Detail view lifecycle: Idle → Loading → (Ready | LoadedEmpty).
///
/// Every navigation gets a fresh `generation`. Outcomes carrying any other
/// generation belong to a superseded navigation and are dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    #[default]
    Idle,
    Loading {
        post_id: PostId,
        generation: u64,
    },
    Ready {
        post_id: PostId,
        generation: u64,
        post: Post,
        comments: Vec<Comment>,
    },
    /// A fetch failed. Content stays empty and no error is shown.
    LoadedEmpty {
        post_id: PostId,
        generation: u64,
    },
}

impl UiState for DetailState {}

impl DetailState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn post_id(&self) -> Option<PostId> {
        match self {
            Self::Idle => None,
            Self::Loading { post_id, .. }
            | Self::Ready { post_id, .. }
            | Self::LoadedEmpty { post_id, .. } => Some(*post_id),
        }
    }

    pub fn generation(&self) -> Option<u64> {
        match self {
            Self::Idle => None,
            Self::Loading { generation, .. }
            | Self::Ready { generation, .. }
            | Self::LoadedEmpty { generation, .. } => Some(*generation),
        }
    }

    pub fn post(&self) -> Option<&Post> {
        match self {
            Self::Ready { post, .. } => Some(post),
            _ => None,
        }
    }

    pub fn comments(&self) -> &[Comment] {
        match self {
            Self::Ready { comments, .. } => comments,
            _ => &[],
        }
    }
}
