//! Post store: the list view's cache of remote posts.
//!
//! - `state.rs` - posts plus loading/error flags
//! - `intent.rs` - one intent per gateway outcome
//! - `reducer.rs` - pure transitions

mod intent;
mod reducer;
mod state;

pub use intent::PostsIntent;
pub use reducer::PostsReducer;
pub use state::PostsState;
