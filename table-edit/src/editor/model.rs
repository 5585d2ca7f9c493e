//! Typed state behind an augmented table.

use tabledom::Element;

use crate::input::Input;

use super::CellPos;

/// A direct child of the table, in host order.
#[derive(Debug, Clone)]
pub(crate) enum TablePart {
    /// Index into the editor's sections.
    Section(usize),
    /// Anything that is not a body section (caption, thead, ...), kept as is.
    Other(Element),
}

/// One `tbody`.
#[derive(Debug, Clone)]
pub(crate) struct Section {
    /// The tbody without its rows.
    pub shell: Element,
    /// Nesting key for this section's data.
    pub field: Option<String>,
    pub rows: Vec<Row>,
    pub select_all_row: Element,
}

#[derive(Debug, Clone)]
pub(crate) struct Row {
    /// The tr without its cells.
    pub shell: Element,
    pub cells: Vec<RowCell>,
}

impl Row {
    pub fn data_cells(&self) -> impl Iterator<Item = &DataCell> {
        self.cells.iter().filter_map(|c| match c {
            RowCell::Data(cell) => Some(cell),
            _ => None,
        })
    }

    pub fn data_cells_mut(&mut self) -> impl Iterator<Item = &mut DataCell> {
        self.cells.iter_mut().filter_map(|c| match c {
            RowCell::Data(cell) => Some(cell),
            _ => None,
        })
    }

    pub fn data_cell(&self, index: usize) -> Option<&DataCell> {
        self.data_cells().nth(index)
    }

    pub fn data_cell_mut(&mut self, index: usize) -> Option<&mut DataCell> {
        self.data_cells_mut().nth(index)
    }

    /// Raw cell index of the first header cell.
    pub fn first_label(&self) -> Option<usize> {
        self.cells.iter().position(|c| matches!(c, RowCell::Label(_)))
    }
}

#[derive(Debug, Clone)]
pub(crate) enum RowCell {
    Label(LabelCell),
    Data(DataCell),
    Other(Element),
}

/// A `th` with its injected edit/done control.
#[derive(Debug, Clone)]
pub(crate) struct LabelCell {
    /// The th with its original content.
    pub shell: Element,
    pub control_id: String,
    pub editing: bool,
}

/// A `td` holding one or more fields.
#[derive(Debug, Clone)]
pub(crate) struct DataCell {
    /// The td without its content.
    pub shell: Element,
    /// The original content, wrapped.
    pub display: Element,
    pub inputs_id: String,
    pub fields: Vec<CellField>,
    pub selected: bool,
    pub editing: bool,
}

impl DataCell {
    /// Copy input values back into the display region.
    ///
    /// Tagged spans are updated positionally. A cell with a single untagged
    /// field has its whole display text replaced by the first input.
    pub fn commit(&mut self) {
        let tagged = self.fields.iter().any(|f| f.span_id.is_some());
        if !tagged {
            if let Some(first) = self.fields.first() {
                self.display.set_text(first.input.value());
            }
            return;
        }

        for field in &self.fields {
            let Some(span_id) = &field.span_id else {
                continue;
            };
            if let Some(span) = tabledom::find_element_mut(&mut self.display, span_id) {
                span.set_text(field.input.value());
            }
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct CellField {
    pub input: Input,
    /// The tagged span this field was read from, if any.
    pub span_id: Option<String>,
}

/// What a click on an element means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target {
    DataCell(CellPos),
    SelectAll { section: usize, column: usize },
    EditToggle { section: usize, row: usize, cell: usize },
    Submit,
}
