//! Persisted high score.
//!
//! A single small JSON file under the user's data directory. Loading is
//! tolerant: a missing, unreadable, or corrupt file reads as "no score yet"
//! so the game always starts.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
struct HighScore {
    /// Best (lowest) completed-game move count; 0 means none recorded.
    best_moves: u32,
}

/// File-backed store for the session high score.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    /// Store at the default per-user location
    /// (`$XDG_DATA_HOME`/`~/.local/share`, overridable via
    /// `TUI_FIFTEEN_DATA_DIR`).
    pub fn new() -> Self {
        Self {
            path: default_data_dir().join("high_score.json"),
        }
    }

    /// Store at an explicit path (tests, portable installs).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted high score; 0 when there is none.
    pub fn load(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str::<HighScore>(&contents) {
                Ok(score) => score.best_moves,
                Err(err) => {
                    warn!("ignoring corrupt high score file {}: {err}", self.path.display());
                    0
                }
            },
            Err(_) => 0,
        }
    }

    /// Persist a new best score.
    pub fn save(&self, best_moves: u32) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating data dir {}", dir.display()))?;
        }
        let contents = serde_json::to_string_pretty(&HighScore { best_moves })?;
        fs::write(&self.path, contents)
            .with_context(|| format!("writing high score to {}", self.path.display()))
    }
}

impl Default for HighScoreStore {
    fn default() -> Self {
        Self::new()
    }
}

fn default_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TUI_FIFTEEN_DATA_DIR") {
        return PathBuf::from(dir);
    }
    let base = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|_| std::env::var("HOME").map(|home| PathBuf::from(home).join(".local/share")))
        .unwrap_or_else(|_| PathBuf::from("."));
    base.join("tui-fifteen")
}
