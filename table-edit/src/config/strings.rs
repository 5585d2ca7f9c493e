use serde::{Deserialize, Serialize};

/// User-visible strings, overridable for localisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorStrings {
    pub done_link: String,
    pub edit_link: String,
    pub select_all_button: String,
    pub submit_button: String,
    pub unselected_fields: String,
}

impl Default for EditorStrings {
    fn default() -> Self {
        Self {
            done_link: "Done".to_string(),
            edit_link: "Edit".to_string(),
            select_all_button: "Select All".to_string(),
            submit_button: "Submit".to_string(),
            unselected_fields: "Bad! Select all the things. These were missing:".to_string(),
        }
    }
}
