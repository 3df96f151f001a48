//! Base trait for state in the MVI loop.

/// Marker trait for state objects.
///
/// States are cloned to produce the next state, never mutated in place
/// while shared, and compared to detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
