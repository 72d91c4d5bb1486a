//! Transient success/error notifications.

mod intent;
mod reducer;
mod state;

pub use intent::ToastIntent;
pub use reducer::ToastReducer;
pub use state::{ToastKind, ToastState};
