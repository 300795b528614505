/// JSON-file implementation of the habit store
///
/// The habit is kept as one JSON document at a fixed path, wrapped in an
/// envelope carrying a schema version for future migrations. Saves go
/// through a sibling temp file and an atomic rename, so a failed write
/// leaves the previous record intact on disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::Habit;
use crate::storage::{HabitStore, StorageError};

/// Current on-disk schema version
const SCHEMA_VERSION: u32 = 1;

/// On-disk envelope around the habit record
#[derive(Debug, Serialize, Deserialize)]
struct StoredRecord {
    schema_version: u32,
    habit: Habit,
}

/// File-backed single-record store
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store over the given file path
    ///
    /// Parent directories are created eagerly so the first save cannot fail
    /// on a missing directory.
    pub fn new(path: PathBuf) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        tracing::debug!("JSON store initialized at: {}", path.display());
        Ok(Self { path })
    }

    /// The path this store reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl HabitStore for JsonFileStore {
    fn load(&self) -> Result<Option<Habit>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&self.path)?;
        let record: StoredRecord =
            serde_json::from_slice(&bytes).map_err(|e| StorageError::Corrupt {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        if record.schema_version > SCHEMA_VERSION {
            return Err(StorageError::Corrupt {
                path: self.path.display().to_string(),
                reason: format!(
                    "schema version {} is newer than supported version {}",
                    record.schema_version, SCHEMA_VERSION
                ),
            });
        }

        tracing::debug!("Loaded habit record: {}", record.habit.id);
        Ok(Some(record.habit))
    }

    fn save(&self, habit: &Habit) -> Result<(), StorageError> {
        let record = StoredRecord {
            schema_version: SCHEMA_VERSION,
            habit: habit.clone(),
        };
        let bytes = serde_json::to_vec_pretty(&record)?;

        // Write-then-rename keeps the old record readable if this fails
        let tmp = self.temp_path();
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!("Saved habit record: {}", habit.id);
        Ok(())
    }

    fn erase(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!("Erased habit record at {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
