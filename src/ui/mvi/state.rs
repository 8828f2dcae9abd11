//! Base trait for UI state in the MVI layer.

/// Marker trait for UI state objects.
///
/// States are cheap to clone, comparable (so tests can assert on whole
/// states) and have a well-defined initial value.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
