//! JSON file snapshot store.
//!
//! One pretty-printed file per key under the data directory:
//!
//! ```json
//! { "savedAt": "2025-06-15T10:30:00Z", "fields": { ... } }
//! ```

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::infrastructure::ports::{SnapshotError, SnapshotStore, StoredSnapshot};

pub struct JsonFileSnapshotStore {
    dir: PathBuf,
}

impl JsonFileSnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl SnapshotStore for JsonFileSnapshotStore {
    fn load(&self, key: &str) -> Result<Option<StoredSnapshot>, SnapshotError> {
        let content = match std::fs::read_to_string(self.path(key)) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SnapshotError::io("load", key, e)),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| SnapshotError::serialization(key, e))
    }

    fn save(&self, key: &str, snapshot: &StoredSnapshot) -> Result<(), SnapshotError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| SnapshotError::io("save", key, e))?;

        let content = serde_json::to_string_pretty(snapshot)
            .map_err(|e| SnapshotError::serialization(key, e))?;

        // Write then rename: readers never see a partial file.
        let path = self.path(key);
        let tmp = path.with_extension("tmp");
        std::fs::write(&tmp, content).map_err(|e| SnapshotError::io("save", key, e))?;
        std::fs::rename(&tmp, &path).map_err(|e| SnapshotError::io("save", key, e))?;

        tracing::debug!(path = %path.display(), "Snapshot written");
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), SnapshotError> {
        match std::fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SnapshotError::io("clear", key, e)),
        }
    }
}
