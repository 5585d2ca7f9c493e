//! Scripted sessions: host tables plus the clicks and inputs to replay.

use std::collections::BTreeMap;

use serde::Deserialize;
use table_edit::{CellPos, EditorOptions, Page};
use tabledom::{Element, Event};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid scenario: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Editor(#[from] table_edit::Error),

    #[error("no table '{0}' in the scenario")]
    UnknownTable(String),

    #[error("step {step}: {what} does not exist")]
    MissingControl { step: usize, what: String },
}

#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub tables: Vec<TableDef>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
pub struct TableDef {
    pub id: String,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub identifier: Option<String>,
    /// Raw options JSON, read with [`EditorOptions::from_json`].
    #[serde(default)]
    pub options: Option<serde_json::Value>,
    /// Closed choices per field: `[value, label]` pairs.
    #[serde(default)]
    pub providers: BTreeMap<String, Vec<(String, String)>>,
    pub sections: Vec<SectionDef>,
}

#[derive(Debug, Deserialize)]
pub struct SectionDef {
    #[serde(default)]
    pub field: Option<String>,
    pub rows: Vec<RowDef>,
}

#[derive(Debug, Deserialize)]
pub struct RowDef {
    pub field: String,
    pub label: String,
    pub cells: [String; 2],
}

/// One user action. Positions are 0-based except `column`, which is 1 or 2.
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Step {
    SelectCell {
        table: String,
        section: usize,
        row: usize,
        column: usize,
    },
    SelectAll {
        table: String,
        section: usize,
        column: usize,
    },
    ToggleEdit {
        table: String,
        section: usize,
        row: usize,
    },
    Input {
        table: String,
        section: usize,
        row: usize,
        column: usize,
        #[serde(default)]
        field: usize,
        value: String,
    },
    Submit {
        table: String,
    },
    /// Click an element by its ID.
    Click { target: String },
}

impl Scenario {
    pub fn parse(json: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Attach every table to a fresh page, in order.
    pub fn attach(&self) -> Result<Page, ScenarioError> {
        let mut page = Page::new();
        for table in &self.tables {
            let options = table.options()?;
            page.attach(table.element(), options)?;
        }
        Ok(page)
    }
}

impl TableDef {
    pub fn element(&self) -> Element {
        let mut table = Element::table().id(&self.id);
        if let Some(group) = &self.group {
            table = table.data("group", group);
        }
        if let Some(identifier) = &self.identifier {
            table = table.data("identifier", identifier);
        }

        table.children(self.sections.iter().enumerate().map(|(s, section)| {
            let mut tbody = Element::tbody().id(format!("{}-s{s}", self.id));
            if let Some(field) = &section.field {
                tbody = tbody.data("field", field);
            }
            tbody.children(section.rows.iter().map(|row| {
                let prefix = format!("{}-s{s}-{}", self.id, row.field);
                Element::tr()
                    .id(&prefix)
                    .data("field", &row.field)
                    .child(Element::th().id(format!("{prefix}-label")).with_text(&row.label))
                    .child(Element::td().id(format!("{prefix}-1")).with_text(&row.cells[0]))
                    .child(Element::td().id(format!("{prefix}-2")).with_text(&row.cells[1]))
            }))
        }))
    }

    pub fn options(&self) -> Result<EditorOptions, ScenarioError> {
        let mut options = match &self.options {
            Some(json) => EditorOptions::from_json(&json.to_string())?,
            None => EditorOptions::new(),
        };
        for (field, choices) in &self.providers {
            let choices = choices.clone();
            options = options.data_provider(field.as_str(), move || choices.clone());
        }
        Ok(options)
    }
}

impl Step {
    /// Turn the step into the event a user would produce.
    pub fn event(&self, page: &Page, index: usize) -> Result<Event, ScenarioError> {
        let missing = |what: String| ScenarioError::MissingControl { step: index, what };

        let event = match self {
            Step::SelectCell {
                table,
                section,
                row,
                column,
            } => {
                let pos = cell_pos(*section, *row, *column);
                let id = editor(page, table)?
                    .data_cell_id(pos)
                    .ok_or_else(|| missing(format!("cell {pos:?} of {table}")))?;
                Event::click(id)
            }
            Step::SelectAll {
                table,
                section,
                column,
            } => {
                let id = editor(page, table)?
                    .select_all_id(*section, *column)
                    .ok_or_else(|| missing(format!("select-all {column} of {table}")))?;
                Event::click(id)
            }
            Step::ToggleEdit {
                table,
                section,
                row,
            } => {
                let id = editor(page, table)?
                    .edit_control_id(*section, *row)
                    .ok_or_else(|| missing(format!("edit control of row {row} in {table}")))?;
                Event::click(id)
            }
            Step::Input {
                table,
                section,
                row,
                column,
                field,
                value,
            } => {
                let pos = cell_pos(*section, *row, *column);
                let id = editor(page, table)?
                    .input_id(pos, *field)
                    .ok_or_else(|| missing(format!("input {field} of {pos:?} in {table}")))?;
                Event::input(id, value.as_str())
            }
            Step::Submit { table } => {
                let id = editor(page, table)?
                    .submit_id()
                    .ok_or_else(|| missing(format!("submit control of {table}")))?;
                Event::click(id)
            }
            Step::Click { target } => Event::click(target.as_str()),
        };
        Ok(event)
    }
}

fn cell_pos(section: usize, row: usize, column: usize) -> CellPos {
    CellPos::new(section, row, column.saturating_sub(1))
}

fn editor<'a>(page: &'a Page, table: &str) -> Result<&'a table_edit::TableEditor, ScenarioError> {
    page.editors()
        .find(|e| e.table_id() == table)
        .ok_or_else(|| ScenarioError::UnknownTable(table.to_string()))
}
