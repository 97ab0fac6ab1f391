use crate::catalog::intent::{Decision, IntentEvent, Outcome, PendingDelete};
use crate::catalog::store::MovieStore;
use crate::catalog::view::{GridView, MovieView, TopRatedView};
use crate::model::{Movie, MovieDraft, MovieId};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Which page a controller drives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    /// Top-rated slideshow plus a read-only grid.
    #[default]
    Home,
    /// Management grid with edit and delete affordances.
    Dashboard,
}

impl PageKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Dashboard => "Dashboard",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Home => Self::Dashboard,
            Self::Dashboard => Self::Home,
        }
    }
}

/// Slideshow sizing for the home page.
#[derive(Debug, Clone, Copy)]
pub struct SlideshowSettings {
    pub top_n: usize,
    pub interval: Duration,
}

impl Default for SlideshowSettings {
    fn default() -> Self {
        Self {
            top_n: 5,
            interval: crate::catalog::carousel::DEFAULT_INTERVAL,
        }
    }
}

/// Sole owner of the movie list for one page session.
///
/// Components never touch the list; they hand intents to [`dispatch`],
/// which mutates, persists the full list and re-renders every live view.
///
/// [`dispatch`]: PageController::dispatch
pub struct PageController {
    kind: PageKind,
    store: MovieStore,
    movies: Vec<Movie>,
    top_rated: Option<TopRatedView>,
    grid: GridView,
    pending: Option<PendingDelete>,
    next_serial: u64,
}

impl PageController {
    /// Load the list and mount the page's views.
    pub async fn start(kind: PageKind, store: MovieStore, slideshow: SlideshowSettings) -> Self {
        let movies = store.load().await;
        Self::with_movies(kind, store, slideshow, movies)
    }

    /// Mount views over an already loaded list.
    pub fn with_movies(
        kind: PageKind,
        store: MovieStore,
        slideshow: SlideshowSettings,
        movies: Vec<Movie>,
    ) -> Self {
        let top_rated = match kind {
            PageKind::Home => Some(TopRatedView::new(slideshow.top_n, slideshow.interval)),
            PageKind::Dashboard => None,
        };
        let mut controller = Self {
            kind,
            store,
            movies,
            top_rated,
            grid: GridView::new(kind == PageKind::Dashboard),
            pending: None,
            next_serial: 0,
        };
        if let Some(view) = controller.top_rated.as_mut() {
            view.mount(&controller.movies);
        }
        controller.grid.mount(&controller.movies);
        controller
    }

    pub fn kind(&self) -> PageKind {
        self.kind
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn grid(&self) -> &GridView {
        &self.grid
    }

    pub fn top_rated(&self) -> Option<&TopRatedView> {
        self.top_rated.as_ref()
    }

    pub fn top_rated_mut(&mut self) -> Option<&mut TopRatedView> {
        self.top_rated.as_mut()
    }

    /// Id waiting on a delete confirmation, if any.
    pub fn pending_delete(&self) -> Option<MovieId> {
        self.pending.as_ref().map(PendingDelete::id)
    }

    /// Handle one intent to completion.
    pub fn dispatch(&mut self, intent: IntentEvent) -> Outcome {
        tracing::debug!(intent = intent.name(), page = self.kind.label(), "Intent received");

        if let Some(pending) = &self.pending {
            tracing::debug!(pending = pending.id(), intent = intent.name(), "Intent blocked by open confirmation");
            return Outcome::Blocked;
        }

        match intent {
            IntentEvent::Create(draft) => self.create(draft),
            IntentEvent::Update(movie) => self.update(movie),
            IntentEvent::Delete { id } => {
                self.next_serial += 1;
                let pending = PendingDelete::new(id, self.next_serial);
                self.pending = Some(pending.clone());
                Outcome::ConfirmationRequired(pending)
            }
            IntentEvent::Edit(movie) => Outcome::EditRequested(movie),
        }
    }

    /// Apply or drop a parked delete.
    pub fn resolve_delete(&mut self, pending: PendingDelete, decision: Decision) -> Outcome {
        if self.pending.as_ref() != Some(&pending) {
            return Outcome::Ignored;
        }
        self.pending = None;

        match decision {
            Decision::Decline => {
                tracing::debug!(id = pending.id(), "Delete declined");
                Outcome::Cancelled
            }
            Decision::Accept => {
                let before = self.movies.len();
                self.movies.retain(|m| m.id != pending.id());
                tracing::info!(
                    id = pending.id(),
                    removed = before - self.movies.len(),
                    "Deleted movie"
                );
                self.commit();
                Outcome::Applied
            }
        }
    }

    /// Feed the slideshow timer.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        self.top_rated
            .as_mut()
            .map(|view| view.carousel_mut().on_tick(now))
            .unwrap_or(false)
    }

    fn create(&mut self, draft: MovieDraft) -> Outcome {
        let id = self.store.next_id(&self.movies);
        tracing::info!(id, title = %draft.title, "Created movie");
        self.movies.push(Movie::from_draft(id, draft));
        self.commit();
        Outcome::Applied
    }

    fn update(&mut self, movie: Movie) -> Outcome {
        let Some(slot) = self.movies.iter_mut().find(|m| m.id == movie.id) else {
            tracing::warn!(id = movie.id, "Update for unknown movie ignored");
            return Outcome::Ignored;
        };
        tracing::info!(id = movie.id, "Updated movie");
        *slot = movie;
        self.commit();
        Outcome::Applied
    }

    /// Persist the full list, then rebuild every live view.
    fn commit(&mut self) {
        self.store.save(&self.movies);
        if let Some(view) = self.top_rated.as_mut() {
            view.update(&self.movies);
        }
        self.grid.update(&self.movies);
    }
}
