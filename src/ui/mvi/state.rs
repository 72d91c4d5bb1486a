//! Marker trait for view state snapshots.

/// View state is an owned snapshot: cloned to produce the next one,
/// compared to detect changes, defaulted for the initial render.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
