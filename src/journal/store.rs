use std::fs;
use std::path::{Path, PathBuf};

use super::types::GenerationEntry;
use crate::error::JournalError;

pub const DEFAULT_CAPACITY: usize = 100;

pub trait GenerationJournal {
    /// Appends one entry, dropping the oldest beyond capacity.
    fn append(&self, entry: GenerationEntry) -> Result<(), JournalError>;
    /// Every retained entry, oldest first.
    fn entries(&self) -> Result<Vec<GenerationEntry>, JournalError>;
}

/// Journal stored as a single JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileJournal {
    path: PathBuf,
    capacity: usize,
}

impl JsonFileJournal {
    pub fn new(path: impl Into<PathBuf>, capacity: usize) -> Self {
        Self {
            path: path.into(),
            capacity,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn load(&self) -> Result<Vec<GenerationEntry>, JournalError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&contents).map_err(|error| JournalError::Corrupt {
            path: self.path.display().to_string(),
            message: error.to_string(),
        })
    }

    fn store(&self, entries: &[GenerationEntry]) -> Result<(), JournalError> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl GenerationJournal for JsonFileJournal {
    fn append(&self, entry: GenerationEntry) -> Result<(), JournalError> {
        let mut entries = self.load()?;
        entries.push(entry);
        let overflow = entries.len().saturating_sub(self.capacity);
        entries.drain(..overflow);
        self.store(&entries)
    }

    fn entries(&self) -> Result<Vec<GenerationEntry>, JournalError> {
        self.load()
    }
}

/// Appends `entry`, logging and discarding any failure.
pub fn record_best_effort(journal: &dyn GenerationJournal, entry: GenerationEntry) {
    if let Err(error) = journal.append(entry) {
        tracing::warn!(%error, "failed to record generation; continuing");
    }
}
