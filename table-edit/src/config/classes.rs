use serde::{Deserialize, Serialize};

use crate::editor::MessageKind;

/// CSS class names applied to table message rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MessageClasses {
    pub error_message: String,
    pub info_message: String,
    pub success_message: String,
}

impl Default for MessageClasses {
    fn default() -> Self {
        Self {
            error_message: "error".to_string(),
            info_message: "info".to_string(),
            success_message: "success".to_string(),
        }
    }
}

impl MessageClasses {
    /// Class for a message kind. No kind means info.
    pub fn class_for(&self, kind: Option<MessageKind>) -> &str {
        match kind {
            Some(MessageKind::Error) => &self.error_message,
            Some(MessageKind::Success) => &self.success_message,
            Some(MessageKind::Info) | None => &self.info_message,
        }
    }
}
