//! Runs UI commands against the gateway on the tokio runtime.
//!
//! Every command becomes its own task, so outcomes come back in completion
//! order. Nothing here touches view state: results are forwarded to the UI
//! thread as [`AppEvent::Api`].

use std::sync::mpsc;
use std::sync::Arc;

use tokio::sync::mpsc as async_mpsc;

use crate::api::{ApiError, PostsGateway};
use crate::model::{Comment, Post, PostId};
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;

/// Outcome of a single command.
#[derive(Debug)]
pub enum ApiEvent {
    ListLoaded {
        result: Result<Vec<Post>, ApiError>,
    },
    Created {
        result: Result<Post, ApiError>,
    },
    Updated {
        id: PostId,
        result: Result<Post, ApiError>,
    },
    Deleted {
        id: PostId,
        result: Result<PostId, ApiError>,
    },
    DetailLoaded {
        post_id: PostId,
        generation: u64,
        result: Result<(Post, Vec<Comment>), ApiError>,
    },
}

/// Perform the gateway call(s) behind one command.
pub async fn execute(gateway: &dyn PostsGateway, command: UiCommand) -> ApiEvent {
    match command {
        UiCommand::FetchPosts => ApiEvent::ListLoaded {
            result: gateway.list_posts().await,
        },
        UiCommand::CreatePost { post } => ApiEvent::Created {
            result: gateway.create_post(post).await,
        },
        UiCommand::UpdatePost { id, patch } => ApiEvent::Updated {
            id,
            result: gateway.update_post(id, patch).await,
        },
        UiCommand::DeletePost { id } => ApiEvent::Deleted {
            id,
            result: gateway.delete_post(id).await,
        },
        UiCommand::LoadDetail {
            post_id,
            generation,
        } => {
            let result = tokio::try_join!(
                gateway.get_post(post_id),
                gateway.list_comments(post_id)
            );
            ApiEvent::DetailLoaded {
                post_id,
                generation,
                result,
            }
        }
    }
}

/// Receive commands until the UI drops its sender.
pub async fn run(
    gateway: Arc<dyn PostsGateway>,
    mut commands: async_mpsc::Receiver<UiCommand>,
    events: mpsc::Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        tracing::debug!(?command, "Dispatching command");
        let gateway = Arc::clone(&gateway);
        let events = events.clone();
        tokio::spawn(async move {
            let event = execute(gateway.as_ref(), command).await;
            if events.send(AppEvent::Api(event)).is_err() {
                tracing::trace!("API result dropped (UI gone)");
            }
        });
    }
    tracing::debug!("Command channel closed, worker exiting");
}
