//! Canonical load/save of the movie list.

use crate::catalog::fallback::FallbackSource;
use crate::model::{Movie, MovieId};
use crate::storage::KeyValueStore;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// What was found under the snapshot key.
enum Snapshot {
    Absent,
    Corrupt,
    Valid(Vec<Movie>),
}

/// Reads and writes the persisted snapshot and assigns ids.
///
/// Clones share the underlying storage, so each page session can own one.
#[derive(Clone)]
pub struct MovieStore {
    kv: Arc<dyn KeyValueStore>,
    key: String,
    fallback: FallbackSource,
    http: reqwest::Client,
    ids: IdGenerator,
}

impl MovieStore {
    pub fn new(kv: Arc<dyn KeyValueStore>, key: impl Into<String>, fallback: FallbackSource) -> Self {
        Self {
            kv,
            key: key.into(),
            fallback,
            http: reqwest::Client::new(),
            ids: IdGenerator::default(),
        }
    }

    /// Persisted snapshot if readable, else the fallback dataset (which is
    /// then persisted), else an empty list.
    pub async fn load(&self) -> Vec<Movie> {
        match self.read_snapshot() {
            Snapshot::Valid(movies) => {
                tracing::info!(count = movies.len(), "Loaded movies from storage");
                return dedupe_ids(movies);
            }
            Snapshot::Absent => {}
            Snapshot::Corrupt => {
                if let Err(err) = self.kv.remove(&self.key) {
                    tracing::error!(error = %err, "Failed to discard corrupt snapshot");
                }
            }
        }

        match self.fallback.fetch(&self.http).await {
            Ok(movies) => {
                let movies = dedupe_ids(movies);
                tracing::info!(count = movies.len(), source = %self.fallback, "Loaded fallback dataset");
                self.save(&movies);
                movies
            }
            Err(err) => {
                tracing::error!(source = %self.fallback, error = %err, "Failed to load fallback dataset");
                Vec::new()
            }
        }
    }

    /// Overwrite the snapshot with the full list. Failures are logged only.
    pub fn save(&self, movies: &[Movie]) {
        let encoded = match serde_json::to_string(movies) {
            Ok(encoded) => encoded,
            Err(err) => {
                tracing::error!(error = %err, "Failed to encode movie list");
                return;
            }
        };
        if let Err(err) = self.kv.set(&self.key, &encoded) {
            tracing::error!(error = %err, "Failed to persist movie list");
        }
    }

    /// Fresh id, distinct from everything in `existing` and from every id
    /// this store has handed out before.
    pub fn next_id(&mut self, existing: &[Movie]) -> MovieId {
        self.ids.next(existing)
    }

    fn read_snapshot(&self) -> Snapshot {
        let raw = match self.kv.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Snapshot::Absent,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read snapshot, using fallback");
                return Snapshot::Absent;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(movies) => Snapshot::Valid(movies),
            Err(err) => {
                tracing::warn!(error = %err, "Stored snapshot is corrupt, falling back");
                Snapshot::Corrupt
            }
        }
    }
}

/// Wall-clock millisecond ids, bumped forward on collision.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: MovieId,
}

impl IdGenerator {
    pub fn next(&mut self, existing: &[Movie]) -> MovieId {
        let taken: HashSet<MovieId> = existing.iter().map(|m| m.id).collect();
        let mut candidate = now_millis().max(self.last + 1);
        while taken.contains(&candidate) {
            candidate += 1;
        }
        self.last = candidate;
        candidate
    }
}

fn now_millis() -> MovieId {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as MovieId)
        .unwrap_or_default()
}

/// Keep the first movie for each id.
fn dedupe_ids(movies: Vec<Movie>) -> Vec<Movie> {
    let mut seen = HashSet::new();
    let before = movies.len();
    let unique: Vec<Movie> = movies.into_iter().filter(|m| seen.insert(m.id)).collect();
    if unique.len() != before {
        tracing::warn!(dropped = before - unique.len(), "Dropped movies with duplicate ids");
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Rating};

    fn movie(id: MovieId) -> Movie {
        Movie {
            id,
            title: format!("Movie {id}"),
            image_url: "poster.jpg".to_string(),
            description: String::new(),
            rating: Rating::new(3.0).unwrap(),
            category: Category::Drama,
        }
    }

    #[test]
    fn ids_are_unique_within_one_millisecond() {
        let mut ids = IdGenerator::default();
        let mut list = Vec::new();
        for _ in 0..50 {
            let id = ids.next(&list);
            list.push(movie(id));
        }
        let unique: HashSet<_> = list.iter().map(|m| m.id).collect();
        assert_eq!(unique.len(), 50);
    }

    #[test]
    fn ids_skip_existing_entries() {
        let mut ids = IdGenerator::default();
        let first = ids.next(&[]);
        let existing = vec![movie(first + 1), movie(first + 2)];
        let next = ids.next(&existing);
        assert!(next > first + 2);
    }

    #[test]
    fn dedupe_keeps_first_occurrence() {
        let mut duplicate = movie(1);
        duplicate.title = "Second".to_string();
        let result = dedupe_ids(vec![movie(1), movie(2), duplicate]);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].title, "Movie 1");
    }
}
