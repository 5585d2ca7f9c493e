//! Edit/done toggling and input changes.

use log::{debug, warn};

use super::model::RowCell;
use super::TableEditor;

impl TableEditor {
    /// Toggle editing through the first edit/done control of a row.
    pub fn toggle_editing(&mut self, section: usize, row: usize) -> bool {
        let Some(cell) = self
            .sections
            .get(section)
            .and_then(|s| s.rows.get(row))
            .and_then(|r| r.first_label())
        else {
            return false;
        };
        self.toggle_editing_at(section, row, cell)
    }

    /// Toggle the edit/done control at raw cell index `cell` of a row.
    ///
    /// Acts on the row's selected data cells; with none selected nothing
    /// changes. Leaving editing (Done) first copies input values into the
    /// display region.
    pub(crate) fn toggle_editing_at(&mut self, section: usize, row: usize, cell: usize) -> bool {
        let Some(row_state) = self
            .sections
            .get_mut(section)
            .and_then(|s| s.rows.get_mut(row))
        else {
            return false;
        };

        let control_editing = match row_state.cells.get(cell) {
            Some(RowCell::Label(label)) => label.editing,
            _ => return false,
        };

        if !row_state.data_cells().any(|c| c.selected) {
            return false;
        }

        for data in row_state.data_cells_mut().filter(|c| c.selected) {
            if control_editing {
                data.commit();
            }
            data.editing = !data.editing;
        }

        if let Some(RowCell::Label(label)) = row_state.cells.get_mut(cell) {
            label.editing = !label.editing;
        }

        debug!(
            "Row {row} of section {section} {}",
            if control_editing { "done editing" } else { "editing" }
        );
        true
    }

    /// Whether the first edit/done control of a row is in its editing state.
    pub fn is_control_editing(&self, section: usize, row: usize) -> bool {
        let Some(row) = self.sections.get(section).and_then(|s| s.rows.get(row)) else {
            return false;
        };
        match row.first_label().and_then(|i| row.cells.get(i)) {
            Some(RowCell::Label(label)) => label.editing,
            _ => false,
        }
    }

    /// Change the current value of a generated input.
    ///
    /// Returns false for unknown inputs and for select values that are not
    /// among the options.
    pub fn set_input_value(&mut self, input_id: &str, value: &str) -> bool {
        let Some(&(pos, field)) = self.inputs.get(input_id) else {
            return false;
        };
        let Some(cell) = self.data_cell_mut(pos) else {
            return false;
        };
        let Some(field) = cell.fields.get_mut(field) else {
            return false;
        };

        if field.input.set_value(value) {
            true
        } else {
            warn!("Ignoring value {value:?} for {input_id}: not one of its options");
            false
        }
    }
}
