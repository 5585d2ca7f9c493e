//! Editable, cell-selectable comparison tables.
//!
//! A [`TableEditor`] takes over a host `<table>` whose body rows carry two
//! data cells each. The user picks one cell per row (or a whole column),
//! edits the picked values through generated inputs and submits them. Tables
//! that share a group key are validated and saved together through a
//! [`Page`], which owns the editors and the [`GroupRegistry`].

pub mod config;
pub mod editor;
pub mod error;
pub mod group;
pub mod input;
pub mod page;
pub mod validation;

pub use config::{DataProvider, DataValidator, EditorOptions, EditorStrings, MessageClasses, SaveCallback};
pub use editor::{CellPos, EditorId, EventResult, MessageKind, SaveData, SubmitOutcome, TableEditor};
pub use error::{Error, Result};
pub use group::GroupRegistry;
pub use input::{ChoiceOption, Input, InputKind};
pub use page::{DispatchResult, Page};
pub use validation::SelectionSummary;

pub mod prelude {
    pub use crate::config::{EditorOptions, EditorStrings, MessageClasses};
    pub use crate::editor::{CellPos, EditorId, MessageKind, SaveData, SubmitOutcome, TableEditor};
    pub use crate::page::{DispatchResult, Page};
    pub use tabledom::{Element, Event};
}
