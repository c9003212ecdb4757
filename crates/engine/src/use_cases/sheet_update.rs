//! Sheet-update message rendering.

use std::sync::Arc;

use faerun_shared::{
    length_status, render_sheet_update, split_for_discord, unfilled_placeholders,
    DiscordMessage, FormWarning, SheetUpdateForm, SheetUpdateReport,
};

use crate::infrastructure::{Autosave, AutosaveOutcome, SaveMode};

/// A rendered sheet update, ready to paste.
#[derive(Debug, Clone)]
pub struct RenderedUpdate {
    pub message: DiscordMessage,
    /// Length indicator of the full text, before any split.
    pub length_status: &'static str,
    pub warnings: Vec<FormWarning>,
    /// Bracketed placeholders still present, e.g. `NOM_PJ`.
    pub placeholders: Vec<String>,
    pub report: SheetUpdateReport,
    pub autosave: AutosaveOutcome,
}

impl RenderedUpdate {
    pub fn text(&self) -> String {
        self.message.parts().concat()
    }
}

pub struct RenderSheetUpdate {
    autosave: Arc<Autosave<SheetUpdateForm>>,
}

impl RenderSheetUpdate {
    pub fn new(autosave: Arc<Autosave<SheetUpdateForm>>) -> Self {
        Self { autosave }
    }

    /// The form of the last run, or an empty form.
    pub fn restore(&self) -> SheetUpdateForm {
        self.autosave.restore()
    }

    pub fn execute(&self, form: &SheetUpdateForm, save: SaveMode) -> RenderedUpdate {
        let report = SheetUpdateReport::compute(form);
        let text = render_sheet_update(form, &report);

        let rendered = RenderedUpdate {
            length_status: length_status(&text),
            placeholders: unfilled_placeholders(&text),
            warnings: report.warnings.clone(),
            message: split_for_discord(&text),
            report,
            autosave: self.autosave.save(form, save),
        };

        tracing::info!(
            character = %form.character_name,
            total_xp = rendered.report.quests.total_xp,
            parts = rendered.message.parts().len(),
            warnings = rendered.warnings.len(),
            "Sheet update rendered"
        );
        rendered
    }
}
