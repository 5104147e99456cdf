//! Persistence for the saved-palettes list.
//!
//! The list is read once at startup and rewritten wholesale on every change.
//! There is no schema version. Anything unreadable is treated as an empty list.

use anyhow::{Context, Result};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::models::RgbColor;

/// Backend for the saved-palettes list.
pub trait SavedPaletteStore {
    /// Returns every saved palette. Never fails: bad data yields an empty list.
    fn load(&self) -> Vec<Vec<RgbColor>>;

    /// Replaces the stored list with `palettes`.
    fn persist(&self, palettes: &[Vec<RgbColor>]) -> Result<()>;
}

impl<S: SavedPaletteStore + ?Sized> SavedPaletteStore for &S {
    fn load(&self) -> Vec<Vec<RgbColor>> {
        (**self).load()
    }

    fn persist(&self, palettes: &[Vec<RgbColor>]) -> Result<()> {
        (**self).persist(palettes)
    }
}

/// JSON file holding an array of arrays of `#RRGGBB` strings.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by `path`. The file is created on first save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SavedPaletteStore for FileStore {
    fn load(&self) -> Vec<Vec<RgbColor>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No saved palettes yet");
            return Vec::new();
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Could not read saved palettes; starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Vec<RgbColor>>>(&content) {
            Ok(palettes) => {
                debug!(count = palettes.len(), "Loaded saved palettes");
                palettes
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Saved palettes are malformed; starting empty");
                Vec::new()
            }
        }
    }

    /// Writes atomically using a temp file and rename.
    fn persist(&self, palettes: &[Vec<RgbColor>]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
        }

        let content =
            serde_json::to_string(palettes).context("Failed to serialize saved palettes")?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;
        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename temp file to: {}",
                self.path.display()
            )
        })?;

        debug!(count = palettes.len(), path = %self.path.display(), "Persisted saved palettes");
        Ok(())
    }
}

/// In-memory store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    palettes: RefCell<Vec<Vec<RgbColor>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that starts with `palettes`.
    #[must_use]
    pub fn with_palettes(palettes: Vec<Vec<RgbColor>>) -> Self {
        Self {
            palettes: RefCell::new(palettes),
        }
    }

    /// Snapshot of the stored list.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Vec<RgbColor>> {
        self.palettes.borrow().clone()
    }
}

impl SavedPaletteStore for MemoryStore {
    fn load(&self) -> Vec<Vec<RgbColor>> {
        self.snapshot()
    }

    fn persist(&self, palettes: &[Vec<RgbColor>]) -> Result<()> {
        *self.palettes.borrow_mut() = palettes.to_vec();
        Ok(())
    }
}
