mod common;

use common::post;
use postboard::model::Post;
use postboard::ui::mvi::Reducer;
use postboard::ui::posts::{PostsIntent, PostsReducer, PostsState};

fn loaded(ids: &[u64]) -> PostsState {
    PostsReducer::reduce(
        PostsState::default(),
        PostsIntent::ListSucceeded {
            posts: ids.iter().copied().map(post).collect(),
        },
    )
}

fn ids(state: &PostsState) -> Vec<u64> {
    state.posts.iter().map(|p| p.id).collect()
}

#[test]
fn default_state_is_empty_and_idle() {
    let state = PostsState::default();
    assert!(state.is_empty());
    assert!(!state.loading);
    assert!(!state.has_error());
}

#[test]
fn list_started_then_succeeded() {
    let state = PostsReducer::reduce(PostsState::default(), PostsIntent::ListStarted);
    assert!(state.loading);

    let state = PostsReducer::reduce(
        state,
        PostsIntent::ListSucceeded {
            posts: vec![post(3), post(1), post(2)],
        },
    );
    assert!(!state.loading);
    // Server order is kept.
    assert_eq!(ids(&state), vec![3, 1, 2]);
}

#[test]
fn list_failed_ends_loading() {
    let state = PostsReducer::reduce(PostsState::default(), PostsIntent::ListStarted);
    let state = PostsReducer::reduce(
        state,
        PostsIntent::ListFailed {
            message: "list posts failed".to_string(),
        },
    );
    assert!(!state.loading);
    assert!(state.has_error());
}

#[test]
fn create_appends_exactly_one() {
    let state = loaded(&[1, 2]);
    let created = Post {
        id: 101,
        title: "Brand new title".to_string(),
        body: "b".repeat(60),
        user_id: None,
    };

    let next = PostsReducer::reduce(
        state.clone(),
        PostsIntent::CreateSucceeded {
            post: created.clone(),
        },
    );

    assert_eq!(next.posts.len(), state.posts.len() + 1);
    assert_eq!(next.posts.last(), Some(&created));
}

#[test]
fn create_does_not_deduplicate() {
    let state = loaded(&[1]);
    let next = PostsReducer::reduce(state, PostsIntent::CreateSucceeded { post: post(1) });
    assert_eq!(ids(&next), vec![1, 1]);
}

#[test]
fn update_changes_exactly_one_entry() {
    let state = loaded(&[1, 2, 3]);
    let mut changed = post(2);
    changed.title = "Updated title for two".to_string();

    let next = PostsReducer::reduce(
        state.clone(),
        PostsIntent::UpdateSucceeded {
            post: changed.clone(),
        },
    );

    assert_eq!(next.posts.len(), 3);
    assert_eq!(next.posts[0], state.posts[0]);
    assert_eq!(next.posts[1], changed);
    assert_eq!(next.posts[2], state.posts[2]);
}

#[test]
fn update_for_unknown_id_is_silent_noop() {
    let state = loaded(&[1, 2, 3]);
    let next = PostsReducer::reduce(
        state.clone(),
        PostsIntent::UpdateSucceeded { post: post(42) },
    );
    assert_eq!(next, state);
}

#[test]
fn delete_removes_id() {
    let state = loaded(&[1, 2, 3]);
    let next = PostsReducer::reduce(state, PostsIntent::DeleteSucceeded { id: 2 });
    assert_eq!(ids(&next), vec![1, 3]);
    assert!(next.find(2).is_none());
}

#[test]
fn delete_absent_id_keeps_length() {
    let state = loaded(&[1, 2, 3]);
    let next = PostsReducer::reduce(state.clone(), PostsIntent::DeleteSucceeded { id: 99 });
    assert_eq!(next, state);
}

#[test]
fn mutations_never_touch_loading_flag() {
    let state = PostsReducer::reduce(loaded(&[1]), PostsIntent::ListStarted);
    let state = PostsReducer::reduce(state, PostsIntent::CreateSucceeded { post: post(5) });
    let state = PostsReducer::reduce(state, PostsIntent::UpdateSucceeded { post: post(5) });
    let state = PostsReducer::reduce(state, PostsIntent::DeleteSucceeded { id: 5 });
    assert!(state.loading);

    let idle = PostsReducer::reduce(loaded(&[1]), PostsIntent::DeleteSucceeded { id: 1 });
    assert!(!idle.loading);
}

#[test]
fn created_post_after_list_keeps_append_order() {
    let state = loaded(&[1, 2]);
    let state = PostsReducer::reduce(state, PostsIntent::CreateSucceeded { post: post(101) });
    let state = PostsReducer::reduce(state, PostsIntent::CreateSucceeded { post: post(101) });
    assert_eq!(ids(&state), vec![1, 2, 101, 101]);
}
