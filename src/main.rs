use anyhow::Context;
use clap::{Parser, ValueEnum};
use flickflow::catalog::{FallbackSource, MovieStore, PageKind};
use flickflow::config::{data_dir, Config};
use flickflow::storage::{FileKvStore, KeyValueStore, MemoryKvStore};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

/// Terminal movie catalog with a top-rated slideshow and a management dashboard.
#[derive(Debug, Parser)]
#[command(name = "flickflow", version)]
struct Cli {
    /// Config file (default: <config_dir>/flickflow/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Storage file holding the catalog
    #[arg(long, value_name = "PATH")]
    storage: Option<PathBuf>,

    /// Seed dataset: an http(s) URL or a file path
    #[arg(long, value_name = "SOURCE")]
    fallback: Option<String>,

    /// Page to open first
    #[arg(long, value_enum)]
    page: Option<PageArg>,

    /// Keep the catalog in memory only; nothing is written to disk
    #[arg(long)]
    ephemeral: bool,

    /// Log file (default: <data_dir>/flickflow/flickflow.log)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PageArg {
    Home,
    Dashboard,
}

impl From<PageArg> for PageKind {
    fn from(page: PageArg) -> Self {
        match page {
            PageArg::Home => PageKind::Home,
            PageArg::Dashboard => PageKind::Dashboard,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    apply_overrides(&mut config, &cli);
    config.validate()?;

    let log_path = cli
        .log_file
        .clone()
        .unwrap_or_else(|| data_dir().join("flickflow.log"));
    init_tracing(&log_path)?;

    let kv: Arc<dyn KeyValueStore> = if cli.ephemeral {
        tracing::info!("using in-memory storage");
        Arc::new(MemoryKvStore::new())
    } else {
        let path = config.storage.resolved_path();
        tracing::info!(path = %path.display(), "opening storage");
        Arc::new(FileKvStore::open(path)?)
    };
    let fallback = FallbackSource::parse(&config.fallback.source);
    let store = MovieStore::new(kv, config.storage.key.clone(), fallback);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    flickflow::ui::run(&config, store, &runtime).context("terminal session failed")?;
    tracing::info!("exiting");
    Ok(())
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(path) = &cli.storage {
        config.storage.path = Some(path.clone());
    }
    if let Some(source) = &cli.fallback {
        config.fallback.source = source.clone();
    }
    if let Some(page) = cli.page {
        config.ui.start_page = page.into();
    }
}

/// The TUI owns stdout, so logs go to a file.
fn init_tracing(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory '{}'", parent.display()))?;
    }
    let file: File = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file '{}'", path.display()))?;

    let filter =
        EnvFilter::try_from_env("FLICKFLOW_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "flickflow",
            "--storage",
            "/tmp/s.json",
            "--fallback",
            "https://example.com/movies.json",
            "--page",
            "dashboard",
        ]);
        let mut config = Config::default();
        apply_overrides(&mut config, &cli);
        assert_eq!(config.storage.path, Some(PathBuf::from("/tmp/s.json")));
        assert_eq!(config.fallback.source, "https://example.com/movies.json");
        assert_eq!(config.ui.start_page, PageKind::Dashboard);
    }

    #[test]
    fn no_flags_keep_config() {
        let cli = Cli::parse_from(["flickflow"]);
        let mut config = Config::default();
        apply_overrides(&mut config, &cli);
        assert_eq!(config.storage.path, None);
        assert_eq!(config.ui.start_page, PageKind::Home);
    }
}
