//! Application composition.

use std::sync::Arc;

use faerun_shared::{HpCalculatorForm, SheetUpdateForm};

use crate::infrastructure::{
    Autosave, ClockPort, Config, JsonFileSnapshotStore, SnapshotStore, StoredSnapshot,
    SystemClock,
};
use crate::use_cases::{CalculateMaxHp, RenderSheetUpdate};

/// Main application state: configuration, snapshot helpers and use cases.
pub struct App {
    pub config: Config,
    pub use_cases: UseCases,
    sheet_autosave: Arc<Autosave<SheetUpdateForm>>,
    hp_autosave: Arc<Autosave<HpCalculatorForm>>,
}

pub struct UseCases {
    pub render_sheet_update: RenderSheetUpdate,
    pub calculate_max_hp: CalculateMaxHp,
}

impl App {
    /// JSON files under the configured data directory, stamped with the system clock.
    pub fn new(config: Config) -> Self {
        let store: Arc<dyn SnapshotStore> =
            Arc::new(JsonFileSnapshotStore::new(config.data_dir.clone()));
        Self::with_ports(config, store, Arc::new(SystemClock))
    }

    pub fn with_ports(
        config: Config,
        store: Arc<dyn SnapshotStore>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let sheet_autosave = Arc::new(Autosave::new(
            store.clone(),
            clock.clone(),
            config.sheet_snapshot.clone(),
            config.autosave_interval,
        ));
        let hp_autosave = Arc::new(Autosave::new(
            store,
            clock,
            config.hp_snapshot.clone(),
            config.autosave_interval,
        ));

        let use_cases = UseCases {
            render_sheet_update: RenderSheetUpdate::new(sheet_autosave.clone()),
            calculate_max_hp: CalculateMaxHp::new(hp_autosave.clone()),
        };

        Self {
            config,
            use_cases,
            sheet_autosave,
            hp_autosave,
        }
    }

    /// The stored sheet-update snapshot, as written.
    pub fn stored_sheet(&self) -> Option<StoredSnapshot> {
        self.sheet_autosave.restore_snapshot()
    }

    /// Delete both snapshots; `true` when both are gone.
    pub fn clear_snapshots(&self) -> bool {
        let sheet = self.sheet_autosave.clear();
        let hp = self.hp_autosave.clear();
        if sheet && hp {
            tracing::info!(
                sheet = self.sheet_autosave.key(),
                hp = self.hp_autosave.key(),
                "Snapshots cleared"
            );
        } else {
            tracing::warn!(
                sheet = self.sheet_autosave.key(),
                sheet_cleared = sheet,
                hp = self.hp_autosave.key(),
                hp_cleared = hp,
                "Snapshots only partly cleared"
            );
        }
        sheet && hp
    }
}
