mod common;

use table_edit::{
    DispatchResult, EditorOptions, EventResult, MessageClasses, MessageKind, Page, SubmitOutcome,
    TableEditor,
};
use tabledom::{Element, Event};

use common::{person_table, string_map, SaveRecorder};

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_incomplete_selection_is_rejected() {
    let recorder = SaveRecorder::new();
    let mut editor = TableEditor::new(person_table("t"), recorder.options()).unwrap();
    editor.handle(&Event::click("t-name-1")).unwrap();

    let outcome = editor.submit();

    assert_eq!(outcome, SubmitOutcome::Rejected(vec![editor.id()]));
    assert_eq!(recorder.count(), 0);
    assert_eq!(editor.messages().len(), 1);
    assert_eq!(editor.messages()[0].kind(), Some(MessageKind::Error));
    assert_eq!(
        editor.messages()[0].text(),
        "Bad! Select all the things. These were missing:"
    );
}

#[test]
fn test_repeated_rejection_shows_one_message() {
    let recorder = SaveRecorder::new();
    let mut editor = TableEditor::new(person_table("t"), recorder.options()).unwrap();

    editor.submit();
    editor.submit();
    editor.submit();

    assert_eq!(editor.messages().len(), 1);
    assert_eq!(recorder.count(), 0);
}

#[test]
fn test_complete_selection_saves_once() {
    let recorder = SaveRecorder::new();
    let mut editor = TableEditor::new(person_table("t"), recorder.options()).unwrap();
    editor.select_column(0, 2);

    let outcome = editor.submit();

    let expected = string_map(&[("name", "Alicia"), ("city", "Bern")]);
    assert_eq!(outcome, SubmitOutcome::Saved(expected.clone()));
    assert_eq!(recorder.calls(), vec![expected]);
    assert!(editor.messages().is_empty());
}

#[test]
fn test_successful_submit_clears_previous_error() {
    let recorder = SaveRecorder::new();
    let mut editor = TableEditor::new(person_table("t"), recorder.options()).unwrap();
    editor.submit();
    assert_eq!(editor.messages().len(), 1);

    editor.select_column(0, 1);
    assert!(editor.submit().is_saved());
    assert!(editor.messages().is_empty());
}

#[test]
fn test_mixed_columns_are_complete() {
    let recorder = SaveRecorder::new();
    let mut editor = TableEditor::new(person_table("t"), recorder.options()).unwrap();
    editor.handle(&Event::click("t-name-2")).unwrap();
    editor.handle(&Event::click("t-city-1")).unwrap();

    assert!(editor.all_fields_are_selected());
    assert_eq!(
        editor.submit(),
        SubmitOutcome::Saved(string_map(&[("name", "Alicia"), ("city", "Berlin")]))
    );
}

#[test]
fn test_without_save_still_validates() {
    let mut editor =
        TableEditor::new(person_table("t"), EditorOptions::new().without_save()).unwrap();
    assert!(!editor.submit().is_saved());

    editor.select_column(0, 1);
    assert!(editor.submit().is_saved());
}

#[test]
fn test_table_without_data_cells_saves_empty_object() {
    let recorder = SaveRecorder::new();
    let mut editor = TableEditor::new(Element::table().child(Element::tbody()), recorder.options())
        .unwrap();

    assert_eq!(editor.submit(), SubmitOutcome::Saved(Default::default()));
    assert_eq!(recorder.count(), 1);
}

// ============================================================================
// Submit Control
// ============================================================================

#[test]
fn test_submit_click_reports_submit() {
    let mut editor =
        TableEditor::new(person_table("t"), EditorOptions::new().without_save()).unwrap();
    let submit = editor.submit_id().unwrap().to_string();

    assert_eq!(
        editor.handle(&Event::click(submit)).unwrap(),
        EventResult::Submit
    );
    // Handling the click alone does not validate.
    assert!(editor.messages().is_empty());
}

#[test]
fn test_page_runs_submit_on_click() {
    let recorder = SaveRecorder::new();
    let mut page = Page::new();
    let id = page.attach(person_table("t"), recorder.options()).unwrap();
    let editor = page.editor(id).unwrap();
    let select_all = editor.select_all_id(0, 1).unwrap().to_string();
    let submit = editor.submit_id().unwrap().to_string();

    page.dispatch(Event::click(select_all)).unwrap();
    let result = page.dispatch(Event::click(submit)).unwrap();

    let expected = string_map(&[("name", "Alice"), ("city", "Berlin")]);
    assert_eq!(
        result,
        DispatchResult::Submitted(id, SubmitOutcome::Saved(expected.clone()))
    );
    assert_eq!(recorder.calls(), vec![expected]);
}

// ============================================================================
// Messages
// ============================================================================

#[test]
fn test_message_without_kind_uses_info_class() {
    let mut editor =
        TableEditor::new(person_table("t"), EditorOptions::new().without_save()).unwrap();
    let id = editor.set_table_message("Heads up", None::<MessageKind>);

    let message = &editor.messages()[0];
    assert_eq!(message.id(), id);
    assert_eq!(message.kind(), None);
    assert_eq!(editor.options().classes.class_for(message.kind()), "info");
}

#[test]
fn test_newest_message_comes_first() {
    let mut editor =
        TableEditor::new(person_table("t"), EditorOptions::new().without_save()).unwrap();
    editor.set_table_message("first", MessageKind::Info);
    editor.set_table_message("second", MessageKind::Success);

    let texts: Vec<_> = editor.messages().iter().map(|m| m.text()).collect();
    assert_eq!(texts, vec!["second", "first"]);
}

#[test]
fn test_custom_error_class() {
    let options = EditorOptions::new().without_save().classes(MessageClasses {
        error_message: "alert-danger".to_string(),
        ..Default::default()
    });
    let mut editor = TableEditor::new(person_table("t"), options).unwrap();
    editor.submit();

    let html = tabledom::to_html(&editor.element());
    assert!(html.contains("alert-danger"));
}

#[test]
fn test_field_message_is_inert() {
    let mut editor =
        TableEditor::new(person_table("t"), EditorOptions::new().without_save()).unwrap();
    let before = tabledom::to_html(&editor.element());

    editor.set_field_message("name", "too short", MessageKind::Error);

    assert!(editor.messages().is_empty());
    assert_eq!(tabledom::to_html(&editor.element()), before);
}

#[test]
fn test_message_reveal_completes() {
    use std::time::{Duration, Instant};

    let mut editor =
        TableEditor::new(person_table("t"), EditorOptions::new().without_save()).unwrap();
    let id = editor.set_table_message("hello", MessageKind::Info);
    let later = Instant::now() + Duration::from_secs(1);

    assert_eq!(editor.reveal_progress(&id, later), 1.0);
    editor.prune_reveals(later);
    assert_eq!(editor.reveal_progress(&id, later), 1.0);
}
