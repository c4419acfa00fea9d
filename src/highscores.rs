//! Best-score persistence
//!
//! Fire-and-forget: a missing or corrupt record means "no record", a failed
//! write is logged and forgotten. Nothing here may stall or fail the tick
//! loop.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Where the session's best score comes from and goes to
pub trait ScoreStore {
    /// Best score on record, or `None` if there is none (or it is unreadable)
    fn load(&mut self) -> Option<u32>;
    /// Persist a new best score, best-effort
    fn save(&mut self, score: u32);
}

/// JSON envelope written to disk
#[derive(Debug, Serialize, Deserialize)]
struct BestScoreRecord {
    best: u32,
}

/// File-backed best-score store
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&mut self) -> Option<u32> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                log::warn!("failed to read best score from {:?}: {err}", self.path);
                return None;
            }
        };

        match serde_json::from_str::<BestScoreRecord>(&json) {
            Ok(record) => {
                log::info!("loaded best score {} from {:?}", record.best, self.path);
                Some(record.best)
            }
            Err(err) => {
                log::warn!("corrupt best-score file {:?}: {err}", self.path);
                None
            }
        }
    }

    fn save(&mut self, score: u32) {
        let record = BestScoreRecord { best: score };
        let json = match serde_json::to_string(&record) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("failed to encode best score: {err}");
                return;
            }
        };

        if let Err(err) = std::fs::write(&self.path, json) {
            log::warn!("failed to save best score to {:?}: {err}", self.path);
        } else {
            log::info!("best score {score} saved");
        }
    }
}

/// Store with no record that discards saves (tests, ephemeral sessions)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullScoreStore;

impl ScoreStore for NullScoreStore {
    fn load(&mut self) -> Option<u32> {
        None
    }

    fn save(&mut self, _score: u32) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_no_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileScoreStore::new(dir.path().join("highscore.json"));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.json");
        let mut store = FileScoreStore::new(&path);
        store.save(12);
        assert_eq!(store.load(), Some(12));

        // A later save overwrites
        store.save(15);
        assert_eq!(FileScoreStore::new(&path).load(), Some(15));
    }

    #[test]
    fn test_corrupt_file_is_no_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.json");
        std::fs::write(&path, "not json at all").unwrap();
        let mut store = FileScoreStore::new(&path);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_unwritable_path_is_swallowed() {
        let mut store = FileScoreStore::new("/definitely/not/a/real/dir/highscore.json");
        // Must not panic
        store.save(7);
        assert_eq!(store.load(), None);
    }
}
