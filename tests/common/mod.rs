//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use flickflow::catalog::{FallbackSource, MovieStore, PageController, PageKind, SlideshowSettings};
use flickflow::model::{Category, Movie, Rating};
use flickflow::storage::{KeyValueStore, MemoryKvStore};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub const KEY: &str = "movies";

// -- Fixtures -----------------------------------------------------------------

pub fn movie(id: i64, title: &str, rating: f64) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        image_url: format!("https://img.example/{id}.jpg"),
        description: format!("{title} description"),
        rating: Rating::new(rating).expect("valid rating"),
        category: Category::Drama,
    }
}

/// Two-movie dataset used across scenarios: A (4.5) and B (3.0).
pub fn sample_movies() -> Vec<Movie> {
    vec![movie(1, "A", 4.5), movie(2, "B", 3.0)]
}

pub fn to_json(movies: &[Movie]) -> String {
    serde_json::to_string(movies).expect("encode movies")
}

/// Write a fallback dataset file into a fresh temp dir.
pub fn fallback_file(movies: &[Movie]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("movies.json");
    std::fs::write(&path, to_json(movies)).expect("Failed to write fallback");
    (temp_dir, path)
}

/// Fallback pointing at a file that does not exist.
pub fn missing_fallback() -> FallbackSource {
    FallbackSource::File(PathBuf::from("/nonexistent/flickflow/movies.json"))
}

// -- Store helpers ------------------------------------------------------------

pub fn store_over(kv: &MemoryKvStore, fallback: FallbackSource) -> MovieStore {
    MovieStore::new(Arc::new(kv.clone()), KEY, fallback)
}

/// Decode whatever the catalog last persisted.
pub fn persisted(kv: &MemoryKvStore) -> Option<Vec<Movie>> {
    kv.get(KEY)
        .expect("memory store read")
        .map(|raw| serde_json::from_str(&raw).expect("persisted list decodes"))
}

/// Storage seeded with `movies` and a controller started over it.
pub async fn seeded_controller(kind: PageKind, movies: &[Movie]) -> (PageController, MemoryKvStore) {
    let kv = MemoryKvStore::with_entry(KEY, &to_json(movies));
    let store = store_over(&kv, missing_fallback());
    let controller = PageController::start(kind, store, SlideshowSettings::default()).await;
    (controller, kv)
}
