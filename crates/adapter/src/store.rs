//! Local score store: one JSON object keyed by player.
//!
//! ```json
//! {
//!   "snake_user_alice": { "games_played": 12, "best_score": 48 }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

const KEY_PREFIX: &str = "snake_user_";

/// Per-player record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub best_score: u32,
}

impl Profile {
    /// Fold one finished game into the record.
    pub fn record(&mut self, score: u32) {
        self.games_played = self.games_played.saturating_add(1);
        self.best_score = self.best_score.max(score);
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("score store {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("score store {path} could not be encoded: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

type Records = BTreeMap<String, Profile>;

/// File-backed profile store. Records of other players in the same file are
/// preserved on write.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
    key: String,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>, user_id: &str) -> Self {
        Self {
            path: path.into(),
            key: user_key(user_id),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current record; a missing file or key reads as an empty profile.
    pub fn profile(&self) -> Result<Profile, StoreError> {
        Ok(self.load()?.get(&self.key).copied().unwrap_or_default())
    }

    /// Record a finished game and return the updated profile.
    pub fn record(&self, score: u32) -> Result<Profile, StoreError> {
        let mut records = self.load()?;
        let profile = records.entry(self.key.clone()).or_default();
        profile.record(score);
        let updated = *profile;
        self.save(&records)?;
        Ok(updated)
    }

    fn load(&self) -> Result<Records, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Records::new()),
            Err(source) => return Err(self.io_err(source)),
        };
        if text.trim().is_empty() {
            return Ok(Records::new());
        }
        match serde_json::from_str(&text) {
            Ok(records) => Ok(records),
            Err(err) => {
                // Keep the unreadable file for inspection and start over, so one
                // bad write does not lose every later score.
                let bad = self.quarantine_path();
                warn!(path = %self.path.display(), moved_to = %bad.display(), %err, "score store unreadable; starting fresh");
                fs::rename(&self.path, &bad).map_err(|e| self.io_err(e))?;
                Ok(Records::new())
            }
        }
    }

    /// Where an unreadable store is moved aside.
    pub fn quarantine_path(&self) -> PathBuf {
        self.path.with_extension("json.bad")
    }

    // Write a sibling file and rename over the target so a crash mid-write
    // never leaves a truncated store.
    fn save(&self, records: &Records) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records).map_err(|source| StoreError::Encode {
            path: self.path.clone(),
            source,
        })?;
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| self.io_err(e))?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| self.io_err(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_err(e))
    }

    fn io_err(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Storage key for a player id.
pub fn user_key(user_id: &str) -> String {
    format!("{KEY_PREFIX}{user_id}")
}
