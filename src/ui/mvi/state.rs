/// Marker for dialog state.
///
/// `Default` is the hidden dialog, which lets the app take the state out
/// with `std::mem::take` while the reducer runs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
