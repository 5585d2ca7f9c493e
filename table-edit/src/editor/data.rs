//! Data extraction and the selection check.

use serde_json::Value;

use super::{SaveData, TableEditor};
use crate::validation::SelectionSummary;

impl TableEditor {
    /// Count selected and total data cells across the table.
    pub fn selection_summary(&self) -> SelectionSummary {
        let mut summary = SelectionSummary::default();
        for section in &self.sections {
            for row in &section.rows {
                for cell in row.data_cells() {
                    summary.total += 1;
                    if cell.selected {
                        summary.selected += 1;
                    }
                }
            }
        }
        summary
    }

    /// True iff one cell per two data cells is selected.
    pub fn all_fields_are_selected(&self) -> bool {
        self.selection_summary().is_complete()
    }

    /// Read the inputs of selected cells.
    ///
    /// Sections with a `data-field` key nest their values under it; untagged
    /// sections write to the top level. Values are raw strings.
    pub fn get_data(&self) -> SaveData {
        let mut data = SaveData::new();

        for section in &self.sections {
            let mut nested = SaveData::new();
            let target = if section.field.is_some() {
                &mut nested
            } else {
                &mut data
            };

            for row in &section.rows {
                for cell in row.data_cells().filter(|c| c.selected) {
                    for field in &cell.fields {
                        target.insert(
                            field.input.name().to_string(),
                            Value::String(field.input.value().to_string()),
                        );
                    }
                }
            }

            if let Some(key) = &section.field {
                data.insert(key.clone(), Value::Object(nested));
            }
        }

        data
    }
}
