//! Data file and store configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default location of the JSON data file.
pub const DEFAULT_DATA_PATH: &str = "out/todos.json";

/// Directory that bare file names are placed under.
const DATA_DIR: &str = "out";

const fn default_queue_capacity() -> usize {
    64
}

const fn default_close_timeout_ms() -> u64 {
    250
}

fn default_path() -> String {
    DEFAULT_DATA_PATH.to_string()
}

/// Which `Store` implementation to open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    /// Single-owner worker serializing every load and save.
    #[default]
    Actor,
    /// Call-through store that reads/writes the file on every operation.
    File,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Path of the JSON data file.
    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default)]
    pub kind: StoreKind,

    /// Bound of each worker request queue (actor store only).
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,

    /// How long `close()` waits for the worker to acknowledge shutdown.
    #[serde(default = "default_close_timeout_ms")]
    pub close_timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            kind: StoreKind::default(),
            queue_capacity: default_queue_capacity(),
            close_timeout_ms: default_close_timeout_ms(),
        }
    }
}

impl StoreConfig {
    /// The data file path after normalization.
    ///
    /// An empty path becomes [`DEFAULT_DATA_PATH`]; a bare file name with no
    /// directory component is placed under `out/`; anything else is kept.
    #[must_use]
    pub fn resolved_path(&self) -> PathBuf {
        let raw = self.path.trim();
        if raw.is_empty() {
            return PathBuf::from(DEFAULT_DATA_PATH);
        }
        if raw.contains('/') || raw.contains('\\') {
            return PathBuf::from(raw);
        }
        Path::new(DATA_DIR).join(raw)
    }
}
