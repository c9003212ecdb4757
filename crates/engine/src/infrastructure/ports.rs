//! Port traits for infrastructure boundaries.
//!
//! These are the only abstractions in the engine. Ports exist for:
//! - Snapshot storage (could swap JSON files -> anything key/value)
//! - Clock (for testing)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Errors
// =============================================================================

/// Snapshot storage errors with enough context to log them.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Filesystem operation failed.
    #[error("I/O error in {operation} for {key}: {message}")]
    Io {
        operation: &'static str,
        key: String,
        message: String,
    },

    /// Snapshot content is not valid JSON or does not match the expected shape.
    #[error("Serialization error for {key}: {message}")]
    Serialization { key: String, message: String },
}

impl SnapshotError {
    pub fn io(operation: &'static str, key: impl ToString, message: impl ToString) -> Self {
        Self::Io {
            operation,
            key: key.to_string(),
            message: message.to_string(),
        }
    }

    pub fn serialization(key: impl ToString, message: impl ToString) -> Self {
        Self::Serialization {
            key: key.to_string(),
            message: message.to_string(),
        }
    }
}

// =============================================================================
// Snapshot Storage
// =============================================================================

/// A schema-less bag of form fields plus the time it was written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSnapshot {
    pub saved_at: DateTime<Utc>,
    pub fields: serde_json::Value,
}

/// Best-effort persistence of form snapshots, one per key.
#[cfg_attr(test, mockall::automock)]
pub trait SnapshotStore: Send + Sync {
    /// `Ok(None)` when nothing was saved under `key`.
    fn load(&self, key: &str) -> Result<Option<StoredSnapshot>, SnapshotError>;
    fn save(&self, key: &str, snapshot: &StoredSnapshot) -> Result<(), SnapshotError>;
    /// Removing a missing snapshot is not an error.
    fn clear(&self, key: &str) -> Result<(), SnapshotError>;
}

// =============================================================================
// Testability Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
