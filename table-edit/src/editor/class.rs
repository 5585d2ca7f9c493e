//! Class names the editor adds to the host markup.

pub const DATA_CELL: &str = "tec-data-cell";
pub const SELECTED: &str = "tec-selected";
pub const EDITING: &str = "tec-editing";
pub const DATA_DISPLAY: &str = "tec-data-display";
pub const DATA_INPUTS: &str = "tec-data-inputs";
pub const EDIT_FIELD: &str = "tec-edit-field";
pub const EDIT_LINK: &str = "tec-edit-link";
pub const SAVE_LINK: &str = "tec-save-link";
pub const SELECT_ALL: &str = "tec-select-all";
pub const SAVE_DATA: &str = "tec-save-data";
pub const MESSAGE: &str = "tec-error-message";
