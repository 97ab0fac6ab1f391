//! Render targets derived from the canonical list.
//!
//! Both views rebuild their cards from scratch on every update. Lists are a
//! few dozen entries, so there is no diffing.

use crate::catalog::card::MovieCard;
use crate::catalog::carousel::CarouselDriver;
use crate::model::Movie;
use std::time::{Duration, Instant};

/// A region that renders from a snapshot of the movie list.
pub trait MovieView {
    /// Build children from `snapshot`.
    fn mount(&mut self, snapshot: &[Movie]);

    /// Drop all children.
    fn unmount(&mut self);

    /// Full replace.
    fn update(&mut self, snapshot: &[Movie]) {
        self.unmount();
        self.mount(snapshot);
    }
}

/// Top `limit` movies by rating, highest first. Stable, so equal ratings
/// keep list order. Never touches the input order.
pub fn top_rated(movies: &[Movie], limit: usize) -> Vec<Movie> {
    let mut sorted = movies.to_vec();
    sorted.sort_by(|a, b| a.rating.cmp_desc(&b.rating));
    sorted.truncate(limit);
    sorted
}

/// Every movie in list order.
#[derive(Debug, Clone)]
pub struct GridView {
    cards: Vec<MovieCard>,
    management: bool,
    renders: u64,
}

impl GridView {
    pub fn new(management: bool) -> Self {
        Self {
            cards: Vec::new(),
            management,
            renders: 0,
        }
    }

    pub fn cards(&self) -> &[MovieCard] {
        &self.cards
    }

    pub fn is_management(&self) -> bool {
        self.management
    }

    /// How many times the children were rebuilt.
    pub fn render_count(&self) -> u64 {
        self.renders
    }
}

impl MovieView for GridView {
    fn mount(&mut self, snapshot: &[Movie]) {
        self.cards = snapshot
            .iter()
            .cloned()
            .map(|movie| MovieCard::new(movie, self.management))
            .collect();
        self.renders += 1;
    }

    fn unmount(&mut self) {
        self.cards.clear();
    }
}

/// Rotating slideshow over the highest-rated movies.
#[derive(Debug, Clone)]
pub struct TopRatedView {
    cards: Vec<MovieCard>,
    carousel: CarouselDriver,
    limit: usize,
    interval: Duration,
    renders: u64,
}

impl TopRatedView {
    pub fn new(limit: usize, interval: Duration) -> Self {
        Self {
            cards: Vec::new(),
            carousel: CarouselDriver::start(0, interval, 0, Instant::now()),
            limit,
            interval,
            renders: 0,
        }
    }

    pub fn cards(&self) -> &[MovieCard] {
        &self.cards
    }

    /// Card the carousel is showing, `None` when empty.
    pub fn current(&self) -> Option<&MovieCard> {
        self.cards.get(self.carousel.current_index())
    }

    pub fn carousel(&self) -> &CarouselDriver {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut CarouselDriver {
        &mut self.carousel
    }

    pub fn render_count(&self) -> u64 {
        self.renders
    }
}

impl MovieView for TopRatedView {
    /// Rebuilds the cards and the carousel; the track width carries over.
    fn mount(&mut self, snapshot: &[Movie]) {
        self.cards = top_rated(snapshot, self.limit)
            .into_iter()
            .map(|movie| MovieCard::new(movie, false))
            .collect();
        let window = self.carousel.window_size();
        self.carousel =
            CarouselDriver::start(self.cards.len(), self.interval, window, Instant::now());
        self.renders += 1;
    }

    fn unmount(&mut self) {
        self.cards.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, MovieId, Rating};

    fn movie(id: MovieId, rating: f64) -> Movie {
        Movie {
            id,
            title: format!("M{id}"),
            image_url: "p.jpg".to_string(),
            description: String::new(),
            rating: Rating::new(rating).unwrap(),
            category: Category::Action,
        }
    }

    fn ids(movies: &[Movie]) -> Vec<MovieId> {
        movies.iter().map(|m| m.id).collect()
    }

    #[test]
    fn top_rated_sorts_and_truncates() {
        let list: Vec<Movie> = [1.0, 4.5, 3.0, 5.0, 2.0, 4.0, 0.5]
            .iter()
            .enumerate()
            .map(|(i, r)| movie(i as MovieId, *r))
            .collect();
        assert_eq!(ids(&top_rated(&list, 5)), vec![3, 1, 5, 2, 4]);
        // Canonical order untouched.
        assert_eq!(ids(&list), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn ties_at_the_cutoff_keep_list_order() {
        let list: Vec<Movie> = [5.0, 4.0, 4.0, 4.0, 4.0, 4.0, 1.0]
            .iter()
            .enumerate()
            .map(|(i, r)| movie(i as MovieId, *r))
            .collect();
        let top = top_rated(&list, 5);
        assert_eq!(ids(&top), vec![0, 1, 2, 3, 4]);
        assert!(top.iter().all(|m| m.id != 6));

        // Same ratings, shuffled: equal entries still come out in list order.
        let list: Vec<Movie> = [4.0, 1.0, 4.0, 5.0, 4.0, 4.0, 4.0]
            .iter()
            .enumerate()
            .map(|(i, r)| movie(i as MovieId, *r))
            .collect();
        assert_eq!(ids(&top_rated(&list, 5)), vec![3, 0, 2, 4, 5]);
    }

    #[test]
    fn top_rated_with_short_list_keeps_everything() {
        let list = vec![movie(1, 2.0), movie(2, 2.0)];
        assert_eq!(ids(&top_rated(&list, 5)), vec![1, 2]);
        assert!(top_rated(&[], 5).is_empty());
    }

    #[test]
    fn grid_update_replaces_cards() {
        let mut grid = GridView::new(true);
        grid.mount(&[movie(1, 1.0), movie(2, 2.0)]);
        grid.update(&[movie(3, 3.0)]);
        assert_eq!(grid.cards().len(), 1);
        assert_eq!(grid.cards()[0].movie().id, 3);
        assert!(grid.cards()[0].has_actions());
        assert_eq!(grid.render_count(), 2);
    }

    #[test]
    fn top_rated_remount_rebuilds_carousel() {
        let mut view = TopRatedView::new(5, Duration::from_millis(4000));
        view.carousel_mut().set_window_size(60);
        view.mount(&[movie(1, 1.0), movie(2, 5.0)]);
        let now = Instant::now();
        view.carousel_mut().next(now);
        assert_eq!(view.current().map(|c| c.movie().id), Some(1));

        view.update(&[movie(1, 1.0), movie(2, 5.0), movie(3, 3.0)]);
        assert_eq!(view.carousel().current_index(), 0);
        assert_eq!(view.carousel().count(), 3);
        assert_eq!(view.carousel().window_size(), 60);
        assert_eq!(view.current().map(|c| c.movie().id), Some(2));
    }

    #[test]
    fn empty_top_rated_has_no_current() {
        let mut view = TopRatedView::new(5, Duration::from_millis(4000));
        view.mount(&[]);
        assert!(view.current().is_none());
        assert_eq!(view.carousel().count(), 0);
    }
}
