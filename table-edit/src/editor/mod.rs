//! The table editor widget.

pub mod class;
mod data;
mod editing;
mod messages;
mod model;
mod render;
mod selection;
mod setup;

pub use messages::{MessageKind, TableMessage};

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, trace};
use tabledom::{Element, Event, RevealState};

use crate::config::EditorOptions;
use crate::error::{Error, Result};
use crate::input::Input;

use model::{Section, TablePart, Target};

/// The data object handed to the save callback.
pub type SaveData = serde_json::Map<String, serde_json::Value>;

/// Unique identifier for a TableEditor instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditorId(usize);

impl EditorId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for EditorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__table_editor_{}", self.0)
    }
}

/// Position of a data cell: section, row within the section, and data cell
/// within the row (0 is column 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPos {
    pub section: usize,
    pub row: usize,
    pub cell: usize,
}

impl CellPos {
    pub fn new(section: usize, row: usize, cell: usize) -> Self {
        Self { section, row, cell }
    }
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
    /// The submit control was activated. The caller runs the submit protocol.
    Submit,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation passed and the data was handed to the save callback.
    Saved(SaveData),
    /// These tables have rows without a selected cell. Nothing was saved.
    Rejected(Vec<EditorId>),
}

impl SubmitOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitOutcome::Saved(_))
    }
}

#[derive(Debug, Clone)]
struct Footer {
    element: Element,
    button_id: String,
}

/// An editable, cell-selectable table.
///
/// The editor owns the typed state of one host table: which data cells are
/// selected or being edited, the generated inputs and the message rows.
/// [`element`](Self::element) projects that state back into markup.
#[derive(Debug)]
pub struct TableEditor {
    id: EditorId,
    /// The host table without its children.
    shell: Element,
    parts: Vec<TablePart>,
    sections: Vec<Section>,
    footer: Option<Footer>,
    messages: Vec<TableMessage>,
    reveals: RevealState,
    /// Click targets by element ID.
    targets: HashMap<String, Target>,
    /// Generated inputs by element ID: cell and field index.
    inputs: HashMap<String, (CellPos, usize)>,
    options: EditorOptions,
    identifier: Option<String>,
    group: Option<String>,
}

impl TableEditor {
    pub fn id(&self) -> EditorId {
        self.id
    }

    /// Element ID of the host table.
    pub fn table_id(&self) -> &str {
        &self.shell.id
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn belongs_to_a_group(&self) -> bool {
        self.group.is_some()
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn row_count(&self, section: usize) -> usize {
        self.sections.get(section).map_or(0, |s| s.rows.len())
    }

    /// Element ID of a data cell.
    pub fn data_cell_id(&self, pos: CellPos) -> Option<&str> {
        self.data_cell(pos).map(|c| c.shell.id.as_str())
    }

    /// The generated control for a field of a data cell.
    pub fn input(&self, pos: CellPos, field: usize) -> Option<&Input> {
        self.data_cell(pos)?.fields.get(field).map(|f| &f.input)
    }

    pub fn input_id(&self, pos: CellPos, field: usize) -> Option<&str> {
        self.input(pos, field).map(Input::id)
    }

    /// Text currently shown in a cell's display region.
    pub fn display_text(&self, pos: CellPos) -> Option<String> {
        self.data_cell(pos).map(|c| c.display.text_content())
    }

    /// Element ID of the select-all control for `column` (1 or 2) of a section.
    pub fn select_all_id(&self, section: usize, column: usize) -> Option<&str> {
        let row = &self.sections.get(section)?.select_all_row;
        let column = column.to_string();
        row.descendants_where(|el| el.has_class(class::SELECT_ALL))
            .into_iter()
            .find(|el| el.get_data("column") == Some(&column))
            .map(|el| el.id.as_str())
    }

    /// Element ID of the first edit/done control of a row.
    pub fn edit_control_id(&self, section: usize, row: usize) -> Option<&str> {
        let row = self.sections.get(section)?.rows.get(row)?;
        let index = row.first_label()?;
        match &row.cells[index] {
            model::RowCell::Label(label) => Some(label.control_id.as_str()),
            _ => None,
        }
    }

    /// Element ID of the submit control, if this table still has one.
    pub fn submit_id(&self) -> Option<&str> {
        self.footer.as_ref().map(|f| f.button_id.as_str())
    }

    pub fn has_submit_control(&self) -> bool {
        self.footer.is_some()
    }

    /// Remove the submit control. Used when a newer table joins the group.
    pub fn remove_submit_control(&mut self) {
        if let Some(footer) = self.footer.take() {
            debug!("Removing submit control from table {}", self.shell.id);
            self.targets.remove(&footer.button_id);
        }
    }

    /// Handle an event targeted at an element of this table.
    ///
    /// Clicks bubble from the target towards the table; the first element with
    /// a meaning for the editor handles it.
    pub fn handle(&mut self, event: &Event) -> Result<EventResult> {
        match event {
            Event::Click { target } => self.handle_click(target),
            Event::Input { target, value } => self.handle_input(target, value),
        }
    }

    fn handle_click(&mut self, target: &str) -> Result<EventResult> {
        let root = self.element();
        let path = tabledom::bubble_path(&root, target)
            .ok_or_else(|| Error::UnknownTarget(target.to_string()))?;

        let Some(hit) = path.iter().find_map(|id| self.targets.get(id).copied()) else {
            trace!("Click on {target} has no handler");
            return Ok(EventResult::Ignored);
        };

        debug!("Click on {target} resolved to {hit:?}");
        let result = match hit {
            Target::DataCell(pos) => {
                self.select_cell(pos);
                EventResult::Consumed
            }
            Target::SelectAll { section, column } => {
                self.select_column(section, column);
                EventResult::Consumed
            }
            Target::EditToggle { section, row, cell } => {
                self.toggle_editing_at(section, row, cell);
                EventResult::Consumed
            }
            Target::Submit => EventResult::Submit,
        };
        Ok(result)
    }

    fn handle_input(&mut self, target: &str, value: &str) -> Result<EventResult> {
        if self.inputs.contains_key(target) {
            self.set_input_value(target, value);
            return Ok(EventResult::Consumed);
        }

        if tabledom::contains(&self.element(), target) {
            Ok(EventResult::Ignored)
        } else {
            Err(Error::UnknownTarget(target.to_string()))
        }
    }

    /// Check whether the element belongs to this table's rendered markup.
    pub fn owns(&self, target: &str) -> bool {
        self.targets.contains_key(target)
            || self.inputs.contains_key(target)
            || tabledom::contains(&self.element(), target)
    }

    /// Run the submit protocol for this table on its own.
    ///
    /// Grouped tables are submitted through [`Page`](crate::Page), which can
    /// see the other members.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.clear_table_messages();
        let data = self.get_data();
        self.complete_submit(data)
    }

    /// Final check of the submitting table, then hand `data` to the save
    /// callback.
    pub(crate) fn complete_submit(&mut self, data: SaveData) -> SubmitOutcome {
        let summary = self.selection_summary();
        if !summary.is_complete() {
            debug!("Table {} has {} rows without a selection", self.shell.id, summary.missing());
            let message = self.options.strings.unselected_fields.clone();
            self.set_table_message(message, MessageKind::Error);
            return SubmitOutcome::Rejected(vec![self.id]);
        }

        match &self.options.save {
            Some(save) => save(&data),
            None => debug!("No save callback configured for table {}", self.shell.id),
        }
        SubmitOutcome::Saved(data)
    }
}
