use super::types::{History, HISTORY_VERSION};
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::cell::RefCell;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Where recent results are kept between runs
pub trait ResultStore {
    fn load(&self) -> Result<History>;
    fn save(&self, history: &History) -> Result<()>;
}

/// Get the default history file path (~/.config/lovecalc/recent.json)
pub fn get_history_path() -> Result<PathBuf> {
    Ok(crate::config::get_config_dir()?.join("recent.json"))
}

/// Load history from a JSON file
///
/// If the file doesn't exist, returns a new empty history.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_history(path: &Path) -> Result<History> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no history file, starting empty");
        return Ok(History::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open history file at {}", path.display()))?;

    let history: History = serde_json::from_reader(file).context("Failed to load history")?;

    if history.version != HISTORY_VERSION {
        anyhow::bail!("Unsupported history version: {}", history.version);
    }

    tracing::debug!(entries = history.len(), "loaded history");
    Ok(history)
}

/// Save history to a JSON file atomically
///
/// Creates the parent directory if it doesn't exist.
pub fn save_history(path: &Path, history: &History) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory at {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, history).context("Failed to serialize history")?;

    file.commit().context("Failed to save history")?;

    tracing::debug!(entries = history.len(), path = %path.display(), "saved history");
    Ok(())
}

/// History kept in a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ResultStore for JsonFileStore {
    fn load(&self) -> Result<History> {
        load_history(&self.path)
    }

    fn save(&self, history: &History) -> Result<()> {
        save_history(&self.path, history)
    }
}

/// History kept in memory, for tests and `--no-save` runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    history: RefCell<History>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(history: History) -> Self {
        Self {
            history: RefCell::new(history),
        }
    }

    pub fn snapshot(&self) -> History {
        self.history.borrow().clone()
    }
}

impl ResultStore for MemoryStore {
    fn load(&self) -> Result<History> {
        Ok(self.history.borrow().clone())
    }

    fn save(&self, history: &History) -> Result<()> {
        *self.history.borrow_mut() = history.clone();
        Ok(())
    }
}
