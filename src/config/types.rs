use crate::catalog::PageKind;
use crate::ui::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub fallback: FallbackConfig,
    #[serde(default)]
    pub slideshow: SlideshowConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where the catalog snapshot lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage file. Defaults to `<data_dir>/flickflow/storage.json`.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Key holding the serialized movie list.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

/// Seed dataset used when no snapshot exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// `http(s)://` URL or a filesystem path.
    #[serde(default = "default_fallback_source")]
    pub source: String,
}

/// Top-rated carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideshowConfig {
    /// Auto-advance period in milliseconds (default: 4000).
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// How many top-rated movies rotate (default: 5).
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default)]
    pub start_page: PageKind,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: None,
            key: default_storage_key(),
        }
    }
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            source: default_fallback_source(),
        }
    }
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            top_n: default_top_n(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            theme: ThemeMode::default(),
            start_page: PageKind::default(),
        }
    }
}

impl StorageConfig {
    /// Configured path, or the per-user data directory.
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| data_dir().join("storage.json"))
    }
}

/// `<data_dir>/flickflow`, falling back to the current directory.
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("flickflow")
}

fn default_storage_key() -> String {
    "movies".to_string()
}

fn default_fallback_source() -> String {
    "movies.json".to_string()
}

fn default_interval_ms() -> u64 {
    4000
}

fn default_top_n() -> usize {
    5
}

fn default_tick_ms() -> u64 {
    250
}
