//! Best-effort form autosave.
//!
//! Snapshot failures are logged and swallowed: they never reach the
//! calculation path, and a failed restore yields the default form.

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::infrastructure::ports::{ClockPort, SnapshotStore, StoredSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutosaveOutcome {
    Saved,
    /// Same fields already stored, and the snapshot is younger than the interval.
    UpToDate,
    Failed,
}

/// When a recalculation persists its form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SaveMode {
    /// Only when the fields changed or the snapshot is stale.
    #[default]
    IfDue,
    /// Unconditionally, as when leaving the page.
    Now,
}

pub struct Autosave<T> {
    store: Arc<dyn SnapshotStore>,
    clock: Arc<dyn ClockPort>,
    key: String,
    interval: Duration,
    _form: PhantomData<fn() -> T>,
}

impl<T> Autosave<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    pub fn new(
        store: Arc<dyn SnapshotStore>,
        clock: Arc<dyn ClockPort>,
        key: impl Into<String>,
        interval: Duration,
    ) -> Self {
        Self {
            store,
            clock,
            key: key.into(),
            interval,
            _form: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn save(&self, form: &T, mode: SaveMode) -> AutosaveOutcome {
        match mode {
            SaveMode::IfDue => self.save_if_due(form),
            SaveMode::Now => self.save_now(form),
        }
    }

    /// Write unconditionally (the "on exit" save).
    pub fn save_now(&self, form: &T) -> AutosaveOutcome {
        match serde_json::to_value(form) {
            Ok(fields) => self.write(fields),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Could not serialize form snapshot");
                AutosaveOutcome::Failed
            }
        }
    }

    /// Write when the fields changed or the stored snapshot is older than the interval.
    pub fn save_if_due(&self, form: &T) -> AutosaveOutcome {
        let fields = match serde_json::to_value(form) {
            Ok(fields) => fields,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Could not serialize form snapshot");
                return AutosaveOutcome::Failed;
            }
        };

        match self.store.load(&self.key) {
            Ok(Some(existing)) if existing.fields == fields && !self.is_stale(&existing) => {
                tracing::debug!(key = %self.key, "Snapshot up to date");
                AutosaveOutcome::UpToDate
            }
            Ok(_) => self.write(fields),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Unreadable snapshot, overwriting");
                self.write(fields)
            }
        }
    }

    /// The stored form, or the default form when nothing usable is stored.
    pub fn restore(&self) -> T {
        self.restore_snapshot()
            .and_then(|snapshot| match serde_json::from_value(snapshot.fields) {
                Ok(form) => Some(form),
                Err(e) => {
                    tracing::warn!(
                        key = %self.key,
                        error = %e,
                        "Snapshot does not match form, ignoring"
                    );
                    None
                }
            })
            .unwrap_or_default()
    }

    /// The raw stored snapshot, if any could be read.
    pub fn restore_snapshot(&self) -> Option<StoredSnapshot> {
        match self.store.load(&self.key) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Could not load snapshot");
                None
            }
        }
    }

    pub fn clear(&self) -> bool {
        match self.store.clear(&self.key) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Could not clear snapshot");
                false
            }
        }
    }

    fn is_stale(&self, snapshot: &StoredSnapshot) -> bool {
        // A snapshot dated in the future counts as fresh.
        let age = (self.clock.now() - snapshot.saved_at)
            .to_std()
            .unwrap_or_default();
        age >= self.interval
    }

    fn write(&self, fields: serde_json::Value) -> AutosaveOutcome {
        let snapshot = StoredSnapshot {
            saved_at: self.clock.now(),
            fields,
        };
        match self.store.save(&self.key, &snapshot) {
            Ok(()) => AutosaveOutcome::Saved,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Could not save snapshot");
                AutosaveOutcome::Failed
            }
        }
    }
}
