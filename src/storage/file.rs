use super::{KeyValueStore, StorageError};
use fs2::FileExt;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

/// JSON-file store holding a flat object of string values.
///
/// The whole file is rewritten (temp file + rename) on every mutation. An
/// exclusive lock on `<path>.lock` is held while the store is alive so only
/// one process writes the catalog.
#[derive(Debug)]
pub struct FileKvStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
    _lock: File,
}

impl FileKvStore {
    /// Open (or create) the store at `path` and take the writer lock.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let lock_path = lock_path_for(&path);
        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|source| StorageError::Io {
                path: lock_path.clone(),
                source,
            })?;
        if let Err(err) = FileExt::try_lock_exclusive(&lock) {
            if err.kind() == fs2::lock_contended_error().kind() {
                return Err(StorageError::Locked { path });
            }
            return Err(StorageError::Io {
                path: lock_path,
                source: err,
            });
        }

        let entries = read_entries(&path)?;
        tracing::debug!(path = %path.display(), keys = entries.len(), "Opened storage");

        Ok(Self {
            path,
            entries: Mutex::new(entries),
            _lock: lock,
        })
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(entries).map_err(|source| StorageError::Encode {
            path: self.path.clone(),
            source,
        })?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(|source| StorageError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl KeyValueStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock();
        let mut next = entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.flush(&next)?;
        *entries = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock();
        if !entries.contains_key(key) {
            return Ok(());
        }
        let mut next = entries.clone();
        next.remove(key);
        self.flush(&next)?;
        *entries = next;
        Ok(())
    }
}

fn lock_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".lock");
    PathBuf::from(name)
}

/// Missing file is an empty store. An unreadable object is logged and
/// treated as empty; the next write replaces it.
fn read_entries(path: &Path) -> Result<BTreeMap<String, String>, StorageError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(source) => {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    match serde_json::from_str(&content) {
        Ok(entries) => Ok(entries),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Storage file is not a string map, starting empty");
            Ok(BTreeMap::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        {
            let store = FileKvStore::open(&path).unwrap();
            store.set("movies", "[1,2]").unwrap();
        }
        let store = FileKvStore::open(&path).unwrap();
        assert_eq!(store.get("movies").unwrap().as_deref(), Some("[1,2]"));
    }

    #[test]
    fn second_open_is_locked_out() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        let _first = FileKvStore::open(&path).unwrap();
        let second = FileKvStore::open(&path);
        assert!(matches!(second, Err(StorageError::Locked { .. })));
    }

    #[test]
    fn garbage_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "definitely not json").unwrap();
        let store = FileKvStore::open(&path).unwrap();
        assert_eq!(store.get("movies").unwrap(), None);
    }

    #[test]
    fn creates_missing_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("storage.json");
        let store = FileKvStore::open(&path).unwrap();
        store.set("k", "v").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn remove_rewrites_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        let store = FileKvStore::open(&path).unwrap();
        store.set("movies", "[]").unwrap();
        store.remove("movies").unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("movies"));
    }

    #[test]
    fn failed_write_leaves_entries_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        let store = FileKvStore::open(&path).unwrap();
        store.set("movies", "[1]").unwrap();

        // A non-empty directory in place of the file makes the rename fail.
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();
        fs::write(path.join("occupied"), "x").unwrap();

        assert!(store.set("movies", "[1,2]").is_err());
        assert_eq!(store.get("movies").unwrap().as_deref(), Some("[1]"));
        assert!(store.remove("movies").is_err());
        assert_eq!(store.get("movies").unwrap().as_deref(), Some("[1]"));
    }
}
