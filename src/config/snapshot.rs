//! Session snapshot persistence
//!
//! Stores the running session so a restart can resume where the user left off.
//! The snapshot is overwritten on every rating and removed on completion.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::Config;
use crate::session::{SessionConfig, SessionState};

/// File name of the single stored snapshot
pub const SNAPSHOT_FILE: &str = "session.json";

/// Full session configuration and state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub config: SessionConfig,
    pub state: SessionState,
}

impl Snapshot {
    /// Whether the stored session still has cards to review
    pub fn is_resumable(&self) -> bool {
        !self.state.is_complete(&self.config)
    }
}

/// Port for persisting the active session
pub trait SnapshotStore {
    /// Load the stored snapshot, if any
    fn load(&self) -> Result<Option<Snapshot>>;

    /// Overwrite the stored snapshot
    fn save(&self, snapshot: &Snapshot) -> Result<()>;

    /// Remove the stored snapshot
    fn clear(&self) -> Result<()>;
}

/// Snapshot stored as a JSON file
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    /// Store at an explicit path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the application data directory
    pub fn in_data_dir() -> Result<Self> {
        Ok(Self::new(Config::data_dir()?.join(SNAPSHOT_FILE)))
    }

    /// Path of the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> Result<Option<Snapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read session from {:?}", self.path))?;
        let snapshot =
            serde_json::from_str(&contents).with_context(|| "Failed to parse session.json")?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string(snapshot).with_context(|| "Failed to serialize session")?;

        std::fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write session to {:?}", self.path))?;

        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to remove session {:?}", self.path))
            }
        }
    }
}

/// Snapshot held in memory
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    snapshot: std::cell::RefCell<Option<Snapshot>>,
}

#[cfg(test)]
impl MemorySnapshotStore {
    /// Start with an existing snapshot
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self { snapshot: std::cell::RefCell::new(Some(snapshot)) }
    }

    /// Currently stored snapshot
    pub fn get(&self) -> Option<Snapshot> {
        self.snapshot.borrow().clone()
    }
}

#[cfg(test)]
impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> Result<Option<Snapshot>> {
        Ok(self.get())
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        self.snapshot.replace(Some(snapshot.clone()));
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.snapshot.replace(None);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Card;
    use crate::session::{HistoryEntry, Rating};
    use tempfile::TempDir;

    fn snapshot() -> Snapshot {
        let cards = vec![
            Card::new(1u64, "What is 2+2?", "4", &["math"]),
            Card::new(2u64, "What is 3*3?", "9", &["math"]),
        ];
        Snapshot {
            config: SessionConfig::fixed(["math"], 2),
            state: SessionState {
                history: vec![HistoryEntry { card_id: cards[0].id.clone(), rating: Rating::Easy }],
                queue: cards,
                position: 1,
                easy_count: 1,
            },
        }
    }

    #[test]
    fn file_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = FileSnapshotStore::new(dir.path().join("data").join(SNAPSHOT_FILE));

        assert!(store.load().unwrap().is_none());
        store.save(&snapshot()).unwrap();
        assert_eq!(store.load().unwrap(), Some(snapshot()));
    }

    #[test]
    fn file_store_save_overwrites() {
        let dir = TempDir::new().unwrap();
        let store = FileSnapshotStore::new(dir.path().join(SNAPSHOT_FILE));

        store.save(&snapshot()).unwrap();
        let mut later = snapshot();
        later.state.position = 2;
        store.save(&later).unwrap();

        assert_eq!(store.load().unwrap().unwrap().state.position, 2);
    }

    #[test]
    fn file_store_clear_removes_file() {
        let dir = TempDir::new().unwrap();
        let store = FileSnapshotStore::new(dir.path().join(SNAPSHOT_FILE));

        store.save(&snapshot()).unwrap();
        store.clear().unwrap();

        assert!(!store.path().exists());
        assert!(store.clear().is_ok());
    }

    #[test]
    fn file_store_reports_corrupt_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SNAPSHOT_FILE);
        std::fs::write(&path, "not json").unwrap();

        assert!(FileSnapshotStore::new(path).load().is_err());
    }

    #[test]
    fn resumable_until_complete() {
        let mut snap = snapshot();
        assert!(snap.is_resumable());
        snap.state.position = 2;
        assert!(!snap.is_resumable());
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemorySnapshotStore::default();
        store.save(&snapshot()).unwrap();
        assert_eq!(store.load().unwrap(), Some(snapshot()));
        store.clear().unwrap();
        assert!(store.get().is_none());
    }
}
