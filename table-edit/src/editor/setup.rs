//! Turning a host table into editor state.

use std::collections::HashMap;

use log::debug;
use tabledom::element::generate_id;
use tabledom::{Content, Element, RevealState};

use super::model::{CellField, DataCell, LabelCell, Row, RowCell, Section, TablePart, Target};
use super::{class, CellPos, EditorId, Footer, TableEditor};
use crate::config::{EditorOptions, EditorStrings};
use crate::error::{Error, Result};
use crate::input::Input;

const NBSP: &str = "\u{a0}";

/// Take an element's children, leaving an empty shell.
fn split(mut element: Element) -> (Element, Vec<Element>) {
    let children = match std::mem::take(&mut element.content) {
        Content::Children(children) => children,
        Content::Text(text) => vec![Element::text(text)],
        Content::None => Vec::new(),
    };
    (element, children)
}

fn spacer() -> Element {
    Element::td().child(Element::text(NBSP))
}

impl TableEditor {
    /// Take over a host table.
    ///
    /// Every body section gets display/edit regions in its data cells, an
    /// edit/done control in its header cells and a select-all row. A submit
    /// control is appended to the table.
    pub fn new(table: Element, options: EditorOptions) -> Result<Self> {
        if table.tag != "table" {
            return Err(Error::NotATable(table.tag));
        }

        let identifier = options
            .identifier
            .clone()
            .or_else(|| table.get_data("identifier").cloned());
        let group = options
            .group
            .clone()
            .or_else(|| table.get_data("group").cloned());

        if let (Some(group), None) = (&group, &identifier) {
            return Err(Error::MissingIdentifier {
                table: table.id.clone(),
                group: group.clone(),
            });
        }

        let (shell, children) = split(table);

        let mut parts = Vec::with_capacity(children.len());
        let mut sections = Vec::new();
        for child in children {
            if child.tag == "tbody" {
                let section = setup_section(child, &shell, &options)?;
                parts.push(TablePart::Section(sections.len()));
                sections.push(section);
            } else {
                parts.push(TablePart::Other(child));
            }
        }

        let footer = build_footer(&options.strings);
        let mut reveals = RevealState::new();
        reveals.set_reduced_motion(options.reduced_motion);

        let mut editor = Self {
            id: EditorId::new(),
            shell,
            parts,
            sections,
            footer: Some(footer),
            messages: Vec::new(),
            reveals,
            targets: HashMap::new(),
            inputs: HashMap::new(),
            options,
            identifier,
            group,
        };
        editor.index_targets();

        debug!(
            "Attached editor {} to table {} ({} sections, group {:?})",
            editor.id,
            editor.shell.id,
            editor.sections.len(),
            editor.group
        );
        Ok(editor)
    }

    /// Map every interactive element ID to what a click on it means.
    fn index_targets(&mut self) {
        self.targets.clear();
        self.inputs.clear();

        for (s, section) in self.sections.iter().enumerate() {
            for (r, row) in section.rows.iter().enumerate() {
                let mut data_index = 0;
                for (c, cell) in row.cells.iter().enumerate() {
                    match cell {
                        RowCell::Data(cell) => {
                            let pos = CellPos::new(s, r, data_index);
                            self.targets.insert(cell.shell.id.clone(), Target::DataCell(pos));
                            for (f, field) in cell.fields.iter().enumerate() {
                                self.inputs.insert(field.input.id().to_string(), (pos, f));
                            }
                            data_index += 1;
                        }
                        RowCell::Label(label) => {
                            self.targets.insert(
                                label.control_id.clone(),
                                Target::EditToggle {
                                    section: s,
                                    row: r,
                                    cell: c,
                                },
                            );
                        }
                        RowCell::Other(_) => {}
                    }
                }
            }

            for button in section
                .select_all_row
                .descendants_where(|el| el.has_class(class::SELECT_ALL))
            {
                let Some(column) = button.get_data("column").and_then(|c| c.parse().ok()) else {
                    continue;
                };
                self.targets
                    .insert(button.id.clone(), Target::SelectAll { section: s, column });
            }
        }

        if let Some(footer) = &self.footer {
            self.targets.insert(footer.button_id.clone(), Target::Submit);
        }
    }
}

fn setup_section(tbody: Element, table: &Element, options: &EditorOptions) -> Result<Section> {
    let field = tbody.get_data("field").cloned();
    let (shell, children) = split(tbody);

    let rows = children
        .into_iter()
        .map(|tr| setup_row(tr, &shell, table, options))
        .collect::<Result<Vec<_>>>()?;

    Ok(Section {
        shell,
        field,
        rows,
        select_all_row: build_select_all_row(&options.strings),
    })
}

fn setup_row(tr: Element, section: &Element, table: &Element, options: &EditorOptions) -> Result<Row> {
    let (shell, children) = split(tr);

    let mut cells = Vec::with_capacity(children.len());
    for child in children {
        let cell = match child.tag.as_str() {
            "td" => RowCell::Data(setup_data_cell(child, &[&shell, section, table], options)?),
            "th" => RowCell::Label(setup_label_cell(child)),
            _ => RowCell::Other(child),
        };
        cells.push(cell);
    }

    Ok(Row { shell, cells })
}

/// Extract the cell's fields and wrap its content in a display region.
///
/// Tagged `span[data-field]` descendants each become a field. Otherwise the
/// whole cell is one field named by the closest `data-field`, starting at the
/// cell itself.
fn setup_data_cell(td: Element, ancestors: &[&Element], options: &EditorOptions) -> Result<DataCell> {
    let (shell, children) = split(td);
    let display = Element::div().class(class::DATA_DISPLAY).children(children);

    let spans = display.descendants_where(|el| el.tag == "span" && el.get_data("field").is_some());

    let fields = if spans.is_empty() {
        let name = std::iter::once(&shell)
            .chain(ancestors.iter().copied())
            .find_map(|el| el.get_data("field"))
            .ok_or_else(|| Error::MissingFieldName {
                cell: shell.id.clone(),
            })?;
        vec![CellField {
            input: Input::resolve(name, display.text_content(), options),
            span_id: None,
        }]
    } else {
        spans
            .iter()
            .filter_map(|span| {
                let name = span.get_data("field")?;
                Some(CellField {
                    input: Input::resolve(name, span.text_content(), options),
                    span_id: Some(span.id.clone()),
                })
            })
            .collect()
    };

    Ok(DataCell {
        shell,
        display,
        inputs_id: generate_id("div"),
        fields,
        selected: false,
        editing: false,
    })
}

fn setup_label_cell(th: Element) -> LabelCell {
    LabelCell {
        shell: th,
        control_id: generate_id("a"),
        editing: false,
    }
}

fn build_select_all_row(strings: &EditorStrings) -> Element {
    let button = |column: usize| {
        Element::td().child(
            Element::button()
                .class(class::SELECT_ALL)
                .data("column", column.to_string())
                .with_text(&strings.select_all_button),
        )
    };

    Element::tr()
        .child(spacer())
        .child(button(1))
        .child(button(2))
        .child(spacer())
}

fn build_footer(strings: &EditorStrings) -> Footer {
    let button = Element::button()
        .class(class::SAVE_DATA)
        .with_text(&strings.submit_button);
    let button_id = button.id.clone();

    let element = Element::tfoot().child(
        Element::tr()
            .child(spacer())
            .child(Element::td().child(button))
            .child(spacer())
            .child(spacer()),
    );

    Footer { element, button_id }
}
