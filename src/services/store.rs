//! Snapshot store — write-through persistence for the board.
//!
//! DESIGN
//! ======
//! The board's sole durable representation is one JSON snapshot file. Every
//! mutation writes the whole snapshot through; there is no per-entity backing
//! store. Writes go to a temp file in the same directory and are renamed over
//! the target, so the file on disk is always a complete snapshot — a crash
//! mid-write never leaves a torn record behind.
//!
//! ERROR HANDLING
//! ==============
//! A missing file is a fresh board, not an error. A file that cannot be read
//! or parsed is reported as corrupt; the caller discards it and starts empty.
//! Save failures are surfaced to the caller, which logs and keeps the
//! in-memory board authoritative for the rest of the session.

use std::path::{Path, PathBuf};

use crate::snapshot::BoardSnapshot;

const DEFAULT_STORE_PATH: &str = "data/board.json";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt snapshot json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Filesystem-backed snapshot store.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Build a store from `BOARD_STORE_PATH`, falling back to the default.
    #[must_use]
    pub fn from_env() -> Self {
        let path = std::env::var("BOARD_STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORE_PATH));
        Self::new(path)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted snapshot, if one exists.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file exists but cannot be read, and
    /// `StoreError::Json` if its contents fail to parse as a snapshot.
    pub async fn load(&self) -> Result<Option<BoardSnapshot>, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let snapshot: BoardSnapshot = serde_json::from_str(&raw)?;
        Ok(Some(snapshot))
    }

    /// Write the snapshot through to disk, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory, temp file, or rename fails.
    pub async fn save(&self, snapshot: &BoardSnapshot) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let bytes = serde_json::to_vec_pretty(snapshot)?;
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &bytes).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
