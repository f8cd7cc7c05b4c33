//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are user actions (toggle button, key press) or system events
/// (pointer pressed outside a panel) fed to a [`Reducer`](super::Reducer).
pub trait Intent: Send + 'static {}
