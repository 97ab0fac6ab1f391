//! Modal form for adding and editing movies.

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_editor_dialog;
pub use intent::EditorIntent;
pub use reducer::EditorReducer;
pub use state::{EditorMode, EditorState, FormError, FormField, MovieForm};
