//! Error types for attaching editors and routing events.

use thiserror::Error;

use crate::editor::EditorId;

/// Host-configuration errors.
///
/// An incomplete selection on submit is not an error: it is reported inline
/// on the table and through [`SubmitOutcome::Rejected`](crate::SubmitOutcome).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The element handed to the editor is not a table.
    #[error("expected a <table> element, found <{0}>")]
    NotATable(String),

    /// The table already has an editor on this page.
    #[error("table '{0}' already has an editor attached")]
    AlreadyAttached(String),

    /// An untagged data cell with no `data-field` on itself or an ancestor.
    #[error("data cell '{cell}' has no data-field on itself or any ancestor")]
    MissingFieldName {
        /// Element ID of the cell.
        cell: String,
    },

    /// A grouped table needs an identifier to key its data in the group payload.
    #[error("table '{table}' joins group '{group}' without an identifier")]
    MissingIdentifier {
        /// Element ID of the table.
        table: String,
        /// The group key.
        group: String,
    },

    /// The event target is not part of any attached table.
    #[error("no element '{0}' in any attached table")]
    UnknownTarget(String),

    /// No editor with this ID is attached to the page.
    #[error("no editor with id {0}")]
    UnknownEditor(EditorId),
}

pub type Result<T> = std::result::Result<T, Error>;
