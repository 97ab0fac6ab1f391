//! Movie list synchronization and rendering.
//!
//! ```text
//! MovieStore ──load──→ PageController ──mount/update──→ TopRatedView, GridView
//!                          ↑     │
//!          IntentEvent ────┘     └──save──→ KeyValueStore
//! ```
//!
//! The controller owns the list; persisted storage is a cache of it,
//! rewritten in full after every mutation.

pub mod card;
pub mod carousel;
pub mod controller;
pub mod fallback;
pub mod intent;
pub mod store;
pub mod view;

pub use card::MovieCard;
pub use carousel::CarouselDriver;
pub use controller::{PageController, PageKind, SlideshowSettings};
pub use fallback::{FallbackSource, FetchError};
pub use intent::{Decision, IntentEvent, Outcome, PendingDelete};
pub use store::{IdGenerator, MovieStore};
pub use view::{top_rated, GridView, MovieView, TopRatedView};
