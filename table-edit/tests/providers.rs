mod common;

use table_edit::{CellPos, ChoiceOption, EditorOptions, InputKind, TableEditor};
use tabledom::{Element, Event};

use common::{field_row, string_map};

fn color_table() -> Element {
    Element::table().id("c").child(
        Element::tbody()
            .child(field_row("c", "color", "Color", "2", "1"))
            .child(field_row("c", "size", "Size", "L", "M")),
    )
}

fn color_options() -> EditorOptions {
    EditorOptions::new()
        .without_save()
        .data_provider("color", || [("1", "Red"), ("2", "Blue")])
}

// ============================================================================
// Choice Inputs
// ============================================================================

#[test]
fn test_provider_field_gets_select() {
    let editor = TableEditor::new(color_table(), color_options()).unwrap();
    let input = editor.input(CellPos::new(0, 0, 0), 0).unwrap();

    assert!(input.is_choice());
    assert_eq!(
        input.kind(),
        &InputKind::Choice(vec![
            ChoiceOption::new("1", "Red"),
            ChoiceOption::new("2", "Blue"),
        ])
    );
    assert_eq!(input.value(), "2");
}

#[test]
fn test_other_fields_stay_free_text() {
    let editor = TableEditor::new(color_table(), color_options()).unwrap();
    let input = editor.input(CellPos::new(0, 1, 0), 0).unwrap();

    assert_eq!(input.kind(), &InputKind::FreeText);
    assert_eq!(input.value(), "L");
}

#[test]
fn test_select_preselects_cell_value() {
    let editor = TableEditor::new(color_table(), color_options()).unwrap();
    let select = editor.input(CellPos::new(0, 0, 0), 0).unwrap().element();

    let selected: Vec<_> = select
        .child_elements()
        .iter()
        .filter(|option| option.get_attr("selected").is_some())
        .map(|option| option.text_content())
        .collect();
    assert_eq!(selected, vec!["Blue"]);
}

#[test]
fn test_choosing_option_changes_data() {
    let mut editor = TableEditor::new(color_table(), color_options()).unwrap();
    let pos = CellPos::new(0, 0, 0);
    editor.select_cell(pos);
    editor.select_cell(CellPos::new(0, 1, 0));
    let select = editor.input_id(pos, 0).unwrap().to_string();

    editor.handle(&Event::input(select, "1")).unwrap();

    assert_eq!(editor.get_data(), string_map(&[("color", "1"), ("size", "L")]));
}

#[test]
fn test_foreign_value_is_rejected() {
    let mut editor = TableEditor::new(color_table(), color_options()).unwrap();
    let pos = CellPos::new(0, 0, 0);
    let select = editor.input_id(pos, 0).unwrap().to_string();

    assert!(!editor.set_input_value(&select, "3"));
    assert_eq!(editor.input(pos, 0).unwrap().value(), "2");
}

#[test]
fn test_unoffered_cell_value_falls_back_to_first_option() {
    let table = Element::table().child(
        Element::tbody().child(field_row("x", "color", "Color", "Green", "2")),
    );
    let editor = TableEditor::new(table, color_options()).unwrap();

    assert_eq!(editor.input(CellPos::new(0, 0, 0), 0).unwrap().value(), "1");
    assert_eq!(editor.input(CellPos::new(0, 0, 1), 0).unwrap().value(), "2");
}

#[test]
fn test_done_shows_chosen_value() {
    let mut editor = TableEditor::new(color_table(), color_options()).unwrap();
    let pos = CellPos::new(0, 0, 1);
    editor.select_cell(pos);
    editor.toggle_editing(0, 0);
    let select = editor.input_id(pos, 0).unwrap().to_string();
    editor.set_input_value(&select, "2");
    editor.toggle_editing(0, 0);

    assert_eq!(editor.display_text(pos).as_deref(), Some("2"));
}

// ============================================================================
// Validators
// ============================================================================

#[test]
fn test_validators_are_stored_but_not_run() {
    let options = EditorOptions::new()
        .without_save()
        .data_validator("name", |_| Err("never valid".to_string()));
    assert!(options.has_data_validator("name"));
    assert!(!options.has_data_validator("city"));

    let mut editor = TableEditor::new(common::person_table("t"), options).unwrap();
    editor.select_column(0, 1);

    assert!(editor.submit().is_saved());
}
