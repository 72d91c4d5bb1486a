//! Post draft editing, shared by the create form and the update modal.

mod intent;
mod reducer;
mod state;

pub use intent::{EditIntent, FormIntent};
pub use reducer::{EditReducer, FormReducer};
pub use state::{EditDialogState, FormField, PostFormState};
