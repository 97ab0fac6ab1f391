//! Catalog domain types.
//!
//! A [`Movie`] is the only entity. Its JSON shape (`id`, `title`,
//! `imageUrl`, `description`, `rating`, `category`) is shared by the
//! persisted snapshot and the fallback dataset.

mod category;
mod rating;

pub use category::Category;
pub use rating::{render_stars, Rating, RatingError};

use serde::{Deserialize, Serialize};

/// Unique movie identifier within one catalog.
pub type MovieId = i64;

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub image_url: String,
    #[serde(default)]
    pub description: String,
    pub rating: Rating,
    pub category: Category,
}

impl Movie {
    /// Attach an id to a draft.
    pub fn from_draft(id: MovieId, draft: MovieDraft) -> Self {
        Self {
            id,
            title: draft.title,
            image_url: draft.image_url,
            description: draft.description,
            rating: draft.rating,
            category: draft.category,
        }
    }

    /// Everything but the id.
    pub fn to_draft(&self) -> MovieDraft {
        MovieDraft {
            title: self.title.clone(),
            image_url: self.image_url.clone(),
            description: self.description.clone(),
            rating: self.rating,
            category: self.category,
        }
    }
}

/// A movie that has not been assigned an id yet (create-intent payload).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDraft {
    pub title: String,
    pub image_url: String,
    #[serde(default)]
    pub description: String,
    pub rating: Rating,
    pub category: Category,
}
