//! Base trait for intents in the MVI loop.

/// Marker trait for intent objects.
///
/// Intents are produced by the dispatcher once an effect knows what happened
/// (a load started, the server answered, the user moved to another screen)
/// and are folded into state by a [`Reducer`](super::Reducer).
pub trait Intent: Send + 'static {}
