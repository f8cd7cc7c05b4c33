//! Base trait for UI state.

/// Marker trait for UI state objects.
///
/// States are plain values: cloned to produce new states, compared to
/// detect changes, and defaulted to their initial variant.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
