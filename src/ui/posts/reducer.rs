use crate::ui::mvi::Reducer;
use crate::ui::posts::intent::PostsIntent;
use crate::ui::posts::state::PostsState;

pub struct PostsReducer;

impl Reducer for PostsReducer {
    type State = PostsState;
    type Intent = PostsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PostsIntent::ListStarted => PostsState {
                loading: true,
                error: None,
                ..state
            },
            PostsIntent::ListSucceeded { posts } => PostsState {
                posts,
                loading: false,
                ..state
            },
            PostsIntent::ListFailed { message } => PostsState {
                loading: false,
                error: Some(message),
                ..state
            },
            PostsIntent::CreateSucceeded { post } => {
                let mut posts = state.posts;
                posts.push(post);
                PostsState { posts, ..state }
            }
            PostsIntent::UpdateSucceeded { post } => {
                let mut posts = state.posts;
                if let Some(slot) = posts.iter_mut().find(|p| p.id == post.id) {
                    *slot = post;
                }
                PostsState { posts, ..state }
            }
            PostsIntent::DeleteSucceeded { id } => {
                let mut posts = state.posts;
                posts.retain(|p| p.id != id);
                PostsState { posts, ..state }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Post;

    fn post(id: u64) -> Post {
        Post {
            id,
            title: format!("title {id}"),
            body: format!("body {id}"),
            user_id: Some(1),
        }
    }

    #[test]
    fn list_started_sets_loading_and_clears_error() {
        let state = PostsState {
            error: Some("boom".to_string()),
            ..PostsState::default()
        };
        let state = PostsReducer::reduce(state, PostsIntent::ListStarted);
        assert!(state.loading);
        assert!(!state.has_error());
    }

    #[test]
    fn create_does_not_touch_loading() {
        let state = PostsState {
            loading: true,
            ..PostsState::default()
        };
        let state = PostsReducer::reduce(state, PostsIntent::CreateSucceeded { post: post(1) });
        assert!(state.loading);
        assert_eq!(state.posts.len(), 1);
    }

    #[test]
    fn list_failed_keeps_posts() {
        let state = PostsState {
            posts: vec![post(1)],
            loading: true,
            error: None,
        };
        let state = PostsReducer::reduce(
            state,
            PostsIntent::ListFailed {
                message: "offline".to_string(),
            },
        );
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("offline"));
        assert_eq!(state.posts, vec![post(1)]);
    }
}
