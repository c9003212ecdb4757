//! Infrastructure: snapshot files, clock and environment configuration.

pub mod autosave;
pub mod clock;
pub mod config;
pub mod ports;
pub mod snapshot;

pub use autosave::{Autosave, AutosaveOutcome, SaveMode};
pub use clock::SystemClock;
pub use config::Config;
pub use ports::{ClockPort, SnapshotError, SnapshotStore, StoredSnapshot};
pub use snapshot::JsonFileSnapshotStore;
