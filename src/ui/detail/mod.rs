//! Post detail view.
//!
//! Reads the post and its comments straight from the gateway into view-local
//! state. Nothing here touches the post store.
//!
//! - `state.rs` - Idle → Loading → (Ready | LoadedEmpty), tagged by generation
//! - `intent.rs` - navigation and fetch outcomes
//! - `reducer.rs` - transitions, dropping outcomes from superseded navigations
//! - `view.rs` - rendering

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::DetailIntent;
pub use reducer::DetailReducer;
pub use state::DetailState;
pub use view::{render_detail, NO_COMMENTS};
