use crate::catalog::intent::IntentEvent;
use crate::model::{render_stars, Movie};

/// One rendered movie.
///
/// In management contexts the card exposes edit and delete affordances,
/// each producing an intent for the page controller.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieCard {
    movie: Movie,
    management: bool,
}

impl MovieCard {
    pub fn new(movie: Movie, management: bool) -> Self {
        Self { movie, management }
    }

    pub fn movie(&self) -> &Movie {
        &self.movie
    }

    pub fn has_actions(&self) -> bool {
        self.management
    }

    pub fn stars(&self) -> String {
        render_stars(self.movie.rating)
    }

    /// Edit affordance: carries the full current movie.
    pub fn edit_intent(&self) -> Option<IntentEvent> {
        self.management.then(|| IntentEvent::Edit(self.movie.clone()))
    }

    /// Delete affordance: carries only the id.
    pub fn delete_intent(&self) -> Option<IntentEvent> {
        self.management
            .then_some(IntentEvent::Delete { id: self.movie.id })
    }
}
