/// Marker for dialog intents: key presses translated into form actions.
pub trait Intent: Send + 'static {}
