//! Terminal front end: two pages (home, dashboard) over one page session.
//!
//! Dialogs follow an MVI layout (intent, reducer, state) under `mvi`;
//! everything catalog-related is delegated to [`crate::catalog`].

pub mod app;
pub mod card;
pub mod confirm;
pub mod editor;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod popup;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
