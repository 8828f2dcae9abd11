//! Base trait for intents in the MVI layer.

/// Marker trait for intent objects.
///
/// Intents are derived from one frame's button snapshot or from an explicit
/// call by the embedding application (push/pop of a screen).
pub trait Intent: Send + 'static {}
