//! Cell and column selection.

use log::debug;

use super::model::DataCell;
use super::{CellPos, TableEditor};

impl TableEditor {
    pub(crate) fn data_cell(&self, pos: CellPos) -> Option<&DataCell> {
        self.sections.get(pos.section)?.rows.get(pos.row)?.data_cell(pos.cell)
    }

    pub(crate) fn data_cell_mut(&mut self, pos: CellPos) -> Option<&mut DataCell> {
        self.sections
            .get_mut(pos.section)?
            .rows
            .get_mut(pos.row)?
            .data_cell_mut(pos.cell)
    }

    /// Select one data cell and deselect every other cell of its row.
    /// Returns false if there is no cell at `pos`.
    pub fn select_cell(&mut self, pos: CellPos) -> bool {
        let Some(row) = self
            .sections
            .get_mut(pos.section)
            .and_then(|s| s.rows.get_mut(pos.row))
        else {
            return false;
        };
        if row.data_cell(pos.cell).is_none() {
            return false;
        }

        for (i, cell) in row.data_cells_mut().enumerate() {
            cell.selected = i == pos.cell;
        }
        debug!("Selected cell {pos:?}");
        true
    }

    /// Select every data cell at `column` (1 or 2) of a section and deselect
    /// the rest of the section.
    pub fn select_column(&mut self, section: usize, column: usize) -> bool {
        let Some(section_state) = self.sections.get_mut(section) else {
            return false;
        };

        for row in &mut section_state.rows {
            for (i, cell) in row.data_cells_mut().enumerate() {
                cell.selected = column >= 1 && i == column - 1;
            }
        }
        debug!("Selected column {column} of section {section}");
        true
    }

    pub fn is_selected(&self, pos: CellPos) -> bool {
        self.data_cell(pos).is_some_and(|c| c.selected)
    }

    pub fn is_editing(&self, pos: CellPos) -> bool {
        self.data_cell(pos).is_some_and(|c| c.editing)
    }

    /// Positions of all selected cells, in document order.
    pub fn selected_cells(&self) -> Vec<CellPos> {
        let mut out = Vec::new();
        for (s, section) in self.sections.iter().enumerate() {
            for (r, row) in section.rows.iter().enumerate() {
                for (c, cell) in row.data_cells().enumerate() {
                    if cell.selected {
                        out.push(CellPos::new(s, r, c));
                    }
                }
            }
        }
        out
    }
}
