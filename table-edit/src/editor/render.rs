//! Projection of editor state into markup.

use tabledom::Element;

use super::messages::reveal_transition;
use super::model::{DataCell, LabelCell, Row, RowCell, Section, TablePart};
use super::{class, TableEditor};

impl TableEditor {
    /// Build the augmented table.
    ///
    /// State lives in the editor; the `tec-selected` and `tec-editing` classes
    /// are derived from it on every call.
    pub fn element(&self) -> Element {
        let mut table = self.shell.clone();

        for message in &self.messages {
            let class = self.options.classes.class_for(message.kind());
            let mut tbody = Element::tbody().id(message.id()).class(class::MESSAGE);
            // Only rows still sliding in carry the transition.
            if self.reveals.is_tracking(message.id()) {
                tbody = tbody.transition(reveal_transition());
            }
            table.push_child(
                tbody.child(
                    Element::tr().class(class).child(
                        Element::th()
                            .attr("colspan", "3")
                            .id(format!("{}-text", message.id()))
                            .with_text(message.text()),
                    ),
                ),
            );
        }

        for part in &self.parts {
            match part {
                TablePart::Section(index) => table.push_child(self.render_section(&self.sections[*index])),
                TablePart::Other(element) => table.push_child(element.clone()),
            }
        }

        if let Some(footer) = &self.footer {
            table.push_child(footer.element.clone());
        }

        table
    }

    fn render_section(&self, section: &Section) -> Element {
        let mut tbody = section.shell.clone();
        for row in &section.rows {
            tbody.push_child(self.render_row(row));
        }
        tbody.push_child(section.select_all_row.clone());
        tbody
    }

    fn render_row(&self, row: &Row) -> Element {
        let mut tr = row.shell.clone();
        for cell in &row.cells {
            let cell = match cell {
                RowCell::Data(cell) => render_data_cell(cell),
                RowCell::Label(label) => self.render_label_cell(label),
                RowCell::Other(element) => element.clone(),
            };
            tr.push_child(cell);
        }
        tr
    }

    fn render_label_cell(&self, label: &LabelCell) -> Element {
        let strings = &self.options.strings;
        let mut control = Element::a()
            .id(&label.control_id)
            .class(class::EDIT_FIELD)
            .child(
                Element::span()
                    .id(format!("{}-edit", label.control_id))
                    .class(class::EDIT_LINK)
                    .with_text(&strings.edit_link),
            )
            .child(
                Element::span()
                    .id(format!("{}-done", label.control_id))
                    .class(class::SAVE_LINK)
                    .with_text(&strings.done_link),
            );
        control.set_class(class::EDITING, label.editing);

        let mut th = label.shell.clone();
        th.push_child(control);
        th
    }
}

fn render_data_cell(cell: &DataCell) -> Element {
    let mut td = cell.shell.clone();
    td.add_class(class::DATA_CELL);
    td.set_class(class::SELECTED, cell.selected);
    td.set_class(class::EDITING, cell.editing);

    td.push_child(cell.display.clone());
    td.push_child(
        Element::div()
            .id(&cell.inputs_id)
            .class(class::DATA_INPUTS)
            .children(cell.fields.iter().map(|f| f.input.element())),
    );
    td
}
