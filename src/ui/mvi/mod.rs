//! Model-View-Intent primitives for the dialogs.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Dialog state (editor, delete confirmation) only changes inside a
//! reducer. Catalog mutations are a separate channel: dialogs hand
//! `IntentEvent`s to the page controller.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
