use table_edit::{EditorOptions, EditorStrings, MessageClasses, MessageKind};

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_default_strings() {
    let strings = EditorStrings::default();
    assert_eq!(strings.done_link, "Done");
    assert_eq!(strings.edit_link, "Edit");
    assert_eq!(strings.select_all_button, "Select All");
    assert_eq!(strings.submit_button, "Submit");
    assert_eq!(
        strings.unselected_fields,
        "Bad! Select all the things. These were missing:"
    );
}

#[test]
fn test_default_options_log_on_save() {
    let options = EditorOptions::new();
    assert!(options.save.is_some());
    assert!(options.identifier.is_none());
    assert!(options.group.is_none());
    assert!(options.without_save().save.is_none());
}

#[test]
fn test_class_for_kind() {
    let classes = MessageClasses::default();
    assert_eq!(classes.class_for(Some(MessageKind::Error)), "error");
    assert_eq!(classes.class_for(Some(MessageKind::Success)), "success");
    assert_eq!(classes.class_for(Some(MessageKind::Info)), "info");
    assert_eq!(classes.class_for(None), "info");
}

// ============================================================================
// JSON
// ============================================================================

#[test]
fn test_from_json_overrides_only_given_keys() {
    let options = EditorOptions::from_json(
        r#"{
            "strings": { "submitButton": "Go" },
            "classes": { "errorMessage": "alert" },
            "group": "cmp",
            "identifier": "A",
            "reducedMotion": true
        }"#,
    )
    .unwrap();

    assert_eq!(options.strings.submit_button, "Go");
    assert_eq!(options.strings.edit_link, "Edit");
    assert_eq!(options.classes.error_message, "alert");
    assert_eq!(options.classes.info_message, "info");
    assert_eq!(options.group.as_deref(), Some("cmp"));
    assert_eq!(options.identifier.as_deref(), Some("A"));
    assert!(options.reduced_motion);
    assert!(options.save.is_some());
}

#[test]
fn test_from_json_empty_object_is_default() {
    let options = EditorOptions::from_json("{}").unwrap();
    assert_eq!(options.strings, EditorStrings::default());
    assert_eq!(options.classes, MessageClasses::default());
    assert!(!options.reduced_motion);
}

#[test]
fn test_from_json_rejects_malformed_input() {
    assert!(EditorOptions::from_json("{ strings: ").is_err());
}

// ============================================================================
// Providers
// ============================================================================

#[test]
fn test_data_provider_registration() {
    let options = EditorOptions::new().data_provider("color", || vec![("1", "Red")]);

    assert!(options.has_data_provider("color"));
    assert!(!options.has_data_provider("size"));
    let provider = options.data_provider_for("color").unwrap();
    let choices = provider();
    assert_eq!(choices.len(), 1);
    assert_eq!(choices[0].label, "Red");
}

#[test]
fn test_debug_lists_registered_fields() {
    let options = EditorOptions::new()
        .data_provider("size", || [("s", "Small")])
        .data_provider("color", || [("1", "Red")]);

    let debug = format!("{options:?}");
    assert!(debug.contains(r#"data_providers: ["color", "size"]"#));
}
