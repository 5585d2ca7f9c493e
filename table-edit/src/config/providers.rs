//! Callback types carried by [`EditorOptions`](super::EditorOptions).

use std::sync::Arc;

use crate::editor::SaveData;
use crate::input::ChoiceOption;

/// Receives the assembled data object after a successful submit.
pub type SaveCallback = Arc<dyn Fn(&SaveData) + Send + Sync>;

/// Returns the closed set of choices for a field, in display order.
pub type DataProvider = Arc<dyn Fn() -> Vec<ChoiceOption> + Send + Sync>;

/// Per-field validator. Accepted in configuration but never invoked.
pub type DataValidator = Arc<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

/// The save callback used when none is configured: log the payload.
pub(crate) fn log_payload() -> SaveCallback {
    Arc::new(|data: &SaveData| {
        match serde_json::to_string_pretty(data) {
            Ok(json) => log::info!("Saved table data:\n{json}"),
            Err(e) => log::warn!("Saved table data could not be printed: {e}"),
        }
    })
}
