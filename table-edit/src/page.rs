//! Host session owning editors and their group registry.

use log::{debug, info};
use serde_json::Value;
use tabledom::{Element, Event};

use crate::config::EditorOptions;
use crate::editor::{EditorId, EventResult, MessageKind, SaveData, SubmitOutcome, TableEditor};
use crate::error::{Error, Result};
use crate::group::GroupRegistry;

// =============================================================================
// DispatchResult
// =============================================================================

/// Result of event dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchResult {
    /// No attached table had a use for the event.
    NotHandled,
    /// The event was handled by an editor.
    Handled(EditorId),
    /// The event activated a submit control.
    Submitted(EditorId, SubmitOutcome),
}

impl DispatchResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, DispatchResult::NotHandled)
    }
}

// =============================================================================
// Page
// =============================================================================

/// The tables of one host document.
///
/// A page owns its editors and the [`GroupRegistry`] that ties grouped tables
/// together. Independent pages never see each other's groups.
///
/// # Example
///
/// ```ignore
/// let mut page = Page::new();
/// let left = page.attach(left_table, EditorOptions::new())?;
/// let right = page.attach(right_table, EditorOptions::new())?;
///
/// page.dispatch(Event::click(select_all_id))?;
/// page.dispatch(Event::click(submit_id))?;
/// ```
#[derive(Debug, Default)]
pub struct Page {
    /// Editors in attach order.
    editors: Vec<TableEditor>,
    registry: GroupRegistry,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an editor to a host table.
    ///
    /// A grouped table joins its group as the newest member: every earlier
    /// member loses its submit control.
    pub fn attach(&mut self, table: Element, options: EditorOptions) -> Result<EditorId> {
        if self.editors.iter().any(|e| e.table_id() == table.id) {
            return Err(Error::AlreadyAttached(table.id));
        }

        let editor = TableEditor::new(table, options)?;
        let id = editor.id();
        let group = editor.group().map(str::to_string);
        self.editors.push(editor);

        if let Some(group) = group {
            let previous = self.registry.register(group.as_str(), id);
            for member in previous {
                if let Some(editor) = self.editor_mut(member) {
                    editor.remove_submit_control();
                }
            }
            debug!("Table {id} joined group {group}");
        }

        Ok(id)
    }

    pub fn editor(&self, id: EditorId) -> Option<&TableEditor> {
        self.editors.iter().find(|e| e.id() == id)
    }

    pub fn editor_mut(&mut self, id: EditorId) -> Option<&mut TableEditor> {
        self.editors.iter_mut().find(|e| e.id() == id)
    }

    /// Find an editor by its table identifier.
    pub fn find_by_identifier(&self, identifier: &str) -> Option<EditorId> {
        self.editors
            .iter()
            .find(|e| e.identifier() == Some(identifier))
            .map(TableEditor::id)
    }

    /// Iterate over all editors in attach order.
    pub fn editors(&self) -> impl Iterator<Item = &TableEditor> {
        self.editors.iter()
    }

    pub fn registry(&self) -> &GroupRegistry {
        &self.registry
    }

    /// Get total number of attached editors.
    pub fn len(&self) -> usize {
        self.editors.len()
    }

    /// Check if there are no attached editors.
    pub fn is_empty(&self) -> bool {
        self.editors.is_empty()
    }

    /// Rendered markup of every table, in attach order.
    pub fn elements(&self) -> Vec<Element> {
        self.editors.iter().map(TableEditor::element).collect()
    }

    /// Route an event to the table that contains its target.
    pub fn dispatch(&mut self, event: Event) -> Result<DispatchResult> {
        let target = event.target();
        let Some(editor) = self.editors.iter_mut().find(|e| e.owns(target)) else {
            return Err(Error::UnknownTarget(target.to_string()));
        };
        let id = editor.id();

        match editor.handle(&event)? {
            EventResult::Ignored => Ok(DispatchResult::NotHandled),
            EventResult::Consumed => Ok(DispatchResult::Handled(id)),
            EventResult::Submit => {
                let outcome = self.submit(id)?;
                Ok(DispatchResult::Submitted(id, outcome))
            }
        }
    }

    /// Run the submit protocol for a table.
    ///
    /// A grouped table validates every member of its group first; any member
    /// with rows lacking a selection gets an error message and nothing is
    /// saved. The payload of a group maps each member's identifier to its
    /// data.
    pub fn submit(&mut self, id: EditorId) -> Result<SubmitOutcome> {
        let submitting = self.editor_mut(id).ok_or(Error::UnknownEditor(id))?;
        submitting.clear_table_messages();

        let data = match submitting.group().map(str::to_string) {
            Some(group) => {
                let message = submitting.options().strings.unselected_fields.clone();
                match self.collect_group(&group, &message) {
                    Ok(data) => data,
                    Err(rejected) => {
                        info!("Group {group} submit rejected: {} incomplete", rejected.len());
                        return Ok(SubmitOutcome::Rejected(rejected));
                    }
                }
            }
            None => submitting.get_data(),
        };

        let submitting = self.editor_mut(id).ok_or(Error::UnknownEditor(id))?;
        let outcome = submitting.complete_submit(data);
        if outcome.is_saved() {
            info!("Table {id} saved");
        }
        Ok(outcome)
    }

    /// Validate and extract every member of a group.
    ///
    /// Returns the identifier-keyed payload, or the members that failed.
    fn collect_group(&mut self, group: &str, message: &str) -> std::result::Result<SaveData, Vec<EditorId>> {
        let members = self.registry.members(group).to_vec();
        let mut data = SaveData::new();
        let mut failed = Vec::new();

        for member in members {
            let Some(table) = self.editor_mut(member) else {
                continue;
            };
            table.clear_table_messages();

            let key = table.identifier().unwrap_or_default().to_string();
            data.insert(key, Value::Object(table.get_data()));

            let summary = table.selection_summary();
            if !summary.is_complete() {
                debug!("Group {group} member {member} has {} rows without a selection", summary.missing());
                table.set_table_message(message, MessageKind::Error);
                failed.push(member);
            }
        }

        if failed.is_empty() { Ok(data) } else { Err(failed) }
    }
}
