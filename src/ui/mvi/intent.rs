//! Marker trait for intents.

/// A discrete event fed to a reducer: a key action, an API outcome, a tick.
pub trait Intent: Send + 'static {}
