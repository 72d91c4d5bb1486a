use crate::model::{NewPost, Post, PostId, PostPatch};
use crate::ui::detail::{DetailIntent, DetailReducer, DetailState};
use crate::ui::form::{EditDialogState, EditIntent, EditReducer, FormField, FormIntent, FormReducer, PostFormState};
use crate::ui::mvi::Reducer;
use crate::ui::posts::{PostsIntent, PostsReducer, PostsState};
use crate::ui::route::Route;
use crate::ui::toast::{ToastIntent, ToastKind, ToastReducer, ToastState};
use crate::ui::worker::ApiEvent;
use tokio::sync::mpsc;

pub const ADDED_MESSAGE: &str = "Your post has been added successfully";
pub const UPDATED_MESSAGE: &str = "Your post has been updated successfully";
pub const DELETED_MESSAGE: &str = "Your post has been deleted successfully";

/// Which part of the list route receives typed keys.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum Focus {
    #[default]
    Posts,
    Form,
}

/// Work the UI hands to the API worker.
#[derive(Debug)]
pub enum UiCommand {
    FetchPosts,
    CreatePost { post: NewPost },
    UpdatePost { id: PostId, patch: PostPatch },
    DeletePost { id: PostId },
    LoadDetail { post_id: PostId, generation: u64 },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    route: Route,
    focus: Focus,
    /// Post store (MVI pattern).
    posts: PostsState,
    selected: usize,
    create_form: PostFormState,
    edit_dialog: EditDialogState,
    /// Detail view state, independent of the store.
    detail: DetailState,
    /// Bumped on every navigation; detail results carry the value they were issued with.
    generation: u64,
    toast: ToastState,
    notification_ticks: u32,
    command_sender: Option<UiCommandSender>,
    last_command_error: Option<String>,
}

impl App {
    pub fn new(notification_ticks: u32) -> Self {
        Self {
            should_quit: false,
            route: Route::List,
            focus: Focus::Posts,
            posts: PostsState::default(),
            selected: 0,
            create_form: PostFormState::default(),
            edit_dialog: EditDialogState::default(),
            detail: DetailState::default(),
            generation: 0,
            toast: ToastState::default(),
            notification_ticks,
            command_sender: None,
            last_command_error: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn posts(&self) -> &PostsState {
        &self.posts
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.posts.posts.get(self.selected)
    }

    pub fn create_form(&self) -> &PostFormState {
        &self.create_form
    }

    pub fn is_create_disabled(&self) -> bool {
        self.create_form.is_submit_disabled()
    }

    pub fn edit_dialog(&self) -> &EditDialogState {
        &self.edit_dialog
    }

    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn toast(&self) -> &ToastState {
        &self.toast
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    // -- Navigation ----------------------------------------------------------

    /// Switch routes and run the target view's mount logic.
    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(from = %self.route, to = %route, "Navigate");
        self.route = route;
        self.generation += 1;
        dispatch_mvi!(self, edit_dialog, EditReducer, EditIntent::Close);

        match route {
            Route::List => {
                dispatch_mvi!(self, detail, DetailReducer, DetailIntent::Reset);
                self.mount_list();
            }
            Route::Detail(post_id) => {
                let generation = self.generation;
                dispatch_mvi!(
                    self,
                    detail,
                    DetailReducer,
                    DetailIntent::Open {
                        post_id,
                        generation
                    }
                );
                self.send_command(UiCommand::LoadDetail {
                    post_id,
                    generation,
                });
            }
        }
    }

    /// List view mount: fetch only when the store has nothing yet.
    pub fn mount_list(&mut self) {
        if !self.posts.is_empty() || self.posts.loading {
            return;
        }
        self.start_list_fetch();
    }

    /// Fetch the list again after a failure.
    pub fn reload(&mut self) {
        if self.posts.loading {
            return;
        }
        self.start_list_fetch();
    }

    fn start_list_fetch(&mut self) {
        dispatch_mvi!(self, posts, PostsReducer, PostsIntent::ListStarted);
        if !self.send_command(UiCommand::FetchPosts) {
            let message = self.command_failure();
            dispatch_mvi!(self, posts, PostsReducer, PostsIntent::ListFailed { message });
        }
    }

    pub fn open_selected(&mut self) {
        if let Some(id) = self.selected_post().map(|post| post.id) {
            self.navigate(Route::Detail(id));
        }
    }

    // -- List view -----------------------------------------------------------

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.posts.posts.len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let next = self.selected as isize + delta;
        self.selected = next.clamp(0, len as isize - 1) as usize;
    }

    /// Posts → title → body → posts.
    pub fn focus_next(&mut self) {
        match (self.focus, self.create_form.focused) {
            (Focus::Posts, _) => {
                self.focus = Focus::Form;
                if self.create_form.focused != FormField::Title {
                    dispatch_mvi!(self, create_form, FormReducer, FormIntent::FocusNext);
                }
            }
            (Focus::Form, FormField::Title) => {
                dispatch_mvi!(self, create_form, FormReducer, FormIntent::FocusNext);
            }
            (Focus::Form, FormField::Body) => {
                dispatch_mvi!(self, create_form, FormReducer, FormIntent::FocusNext);
                self.focus = Focus::Posts;
            }
        }
    }

    pub fn edit_create_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, create_form, FormReducer, intent);
    }

    /// Validate the draft and send it. Returns whether a request went out.
    pub fn submit_create(&mut self) -> bool {
        dispatch_mvi!(self, create_form, FormReducer, FormIntent::Validate);
        if !self.create_form.errors.is_empty() {
            return false;
        }
        let post = self.create_form.to_new_post();
        self.send_or_notify(UiCommand::CreatePost { post }, "add")
    }

    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.selected_post().map(|post| post.id) else {
            return false;
        };
        self.send_or_notify(UiCommand::DeletePost { id }, "delete")
    }

    // -- Update modal --------------------------------------------------------

    pub fn open_edit(&mut self) {
        if let Some(post) = self.selected_post().cloned() {
            dispatch_mvi!(self, edit_dialog, EditReducer, EditIntent::Open { post });
        }
    }

    pub fn close_edit(&mut self) {
        dispatch_mvi!(self, edit_dialog, EditReducer, EditIntent::Close);
    }

    pub fn edit_update_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, edit_dialog, EditReducer, EditIntent::Form(intent));
    }

    /// Validate at submit time only; the modal has no disabled state.
    pub fn submit_update(&mut self) -> bool {
        self.edit_update_form(FormIntent::Validate);
        let EditDialogState::Visible { post_id, form } = &self.edit_dialog else {
            return false;
        };
        if !form.errors.is_empty() {
            return false;
        }
        let command = UiCommand::UpdatePost {
            id: *post_id,
            patch: form.to_patch(),
        };
        self.send_or_notify(command, "update")
    }

    // -- Events --------------------------------------------------------------

    pub fn on_tick(&mut self) {
        dispatch_mvi!(self, toast, ToastReducer, ToastIntent::Tick);
    }

    pub fn on_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::ListLoaded { result } => match result {
                Ok(posts) => {
                    tracing::info!(count = posts.len(), "Posts loaded");
                    dispatch_mvi!(self, posts, PostsReducer, PostsIntent::ListSucceeded { posts });
                    self.move_selection(0);
                }
                Err(err) => {
                    tracing::warn!(error = %err, kind = err.kind(), "Failed to load posts");
                    let message = err.to_string();
                    dispatch_mvi!(self, posts, PostsReducer, PostsIntent::ListFailed { message });
                }
            },
            ApiEvent::Created { result } => match result {
                Ok(post) => {
                    tracing::info!(id = post.id, "Post created");
                    dispatch_mvi!(self, posts, PostsReducer, PostsIntent::CreateSucceeded { post });
                    dispatch_mvi!(self, create_form, FormReducer, FormIntent::Clear);
                    self.notify(ADDED_MESSAGE.to_string(), ToastKind::Success);
                }
                Err(err) => {
                    tracing::warn!(error = %err, kind = err.kind(), "Failed to create post");
                    self.notify(format!("Failed to add post: {err}"), ToastKind::Error);
                }
            },
            ApiEvent::Updated { id, result } => {
                // The modal may have been reopened for another post meanwhile.
                if self.edit_dialog.post_id() == Some(id) {
                    self.close_edit();
                }
                match result {
                    Ok(post) => {
                        if self.posts.find(post.id).is_none() {
                            tracing::warn!(id = post.id, "Updated post is not in the store");
                        }
                        dispatch_mvi!(self, posts, PostsReducer, PostsIntent::UpdateSucceeded { post });
                        self.notify(UPDATED_MESSAGE.to_string(), ToastKind::Success);
                    }
                    Err(err) => {
                        tracing::warn!(id, error = %err, kind = err.kind(), "Failed to update post");
                        self.notify(format!("Failed to update post: {err}"), ToastKind::Error);
                    }
                }
            }
            ApiEvent::Deleted { id, result } => match result {
                Ok(id) => {
                    tracing::info!(id, "Post deleted");
                    dispatch_mvi!(self, posts, PostsReducer, PostsIntent::DeleteSucceeded { id });
                    self.move_selection(0);
                    self.notify(DELETED_MESSAGE.to_string(), ToastKind::Success);
                }
                Err(err) => {
                    tracing::warn!(id, error = %err, kind = err.kind(), "Failed to delete post");
                    self.notify(format!("Failed to delete post: {err}"), ToastKind::Error);
                }
            },
            ApiEvent::DetailLoaded {
                post_id,
                generation,
                result,
            } => {
                if generation != self.generation {
                    tracing::debug!(post_id, generation, current = self.generation, "Dropping stale detail result");
                    return;
                }
                let intent = match result {
                    Ok((post, comments)) => DetailIntent::Loaded {
                        generation,
                        post,
                        comments,
                    },
                    Err(err) => {
                        tracing::warn!(post_id, error = %err, "Error fetching post details");
                        DetailIntent::Failed { generation }
                    }
                };
                dispatch_mvi!(self, detail, DetailReducer, intent);
            }
        }
    }

    fn notify(&mut self, message: String, kind: ToastKind) {
        let ticks = self.notification_ticks;
        dispatch_mvi!(
            self,
            toast,
            ToastReducer,
            ToastIntent::Show {
                message,
                kind,
                ticks
            }
        );
    }

    /// Send a mutation; an error toast replaces it when the worker cannot take it.
    fn send_or_notify(&mut self, command: UiCommand, action: &str) -> bool {
        if self.send_command(command) {
            return true;
        }
        let reason = self.command_failure();
        self.notify(format!("Failed to {action} post: {reason}"), ToastKind::Error);
        false
    }

    fn command_failure(&self) -> String {
        self.last_command_error
            .clone()
            .unwrap_or_else(|| "Command send failed".to_string())
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            tracing::warn!(?command, "No API worker attached");
            self.last_command_error = Some("API worker not running".to_string());
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "Command send failed");
                self.last_command_error = Some(format!("Command send failed: {}", err));
                false
            }
        }
    }
}
