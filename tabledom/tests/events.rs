use tabledom::{bubble_path, contains, find_element, Element, Event};

fn sample_table() -> Element {
    Element::table().id("table").child(
        Element::tbody().id("body").data("field", "address").child(
            Element::tr()
                .id("row")
                .child(Element::th().id("label").with_text("Street"))
                .child(
                    Element::td()
                        .id("cell")
                        .child(Element::span().id("span").data("field", "street").with_text("Main")),
                ),
        ),
    )
}

// ============================================================================
// Bubbling
// ============================================================================

#[test]
fn test_bubble_path_from_leaf_to_root() {
    let root = sample_table();
    let path = bubble_path(&root, "span").unwrap();
    assert_eq!(path, vec!["span", "cell", "row", "body", "table"]);
}

#[test]
fn test_bubble_path_for_root() {
    let root = sample_table();
    assert_eq!(bubble_path(&root, "table").unwrap(), vec!["table"]);
}

#[test]
fn test_bubble_path_unknown_target() {
    let root = sample_table();
    assert_eq!(bubble_path(&root, "missing"), None);
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_contains_and_find() {
    let root = sample_table();
    assert!(contains(&root, "cell"));
    assert!(!contains(&root, "nope"));
    assert_eq!(find_element(&root, "span").unwrap().text_content(), "Main");
}

#[test]
fn test_text_content_concatenates_descendants() {
    let cell = Element::td()
        .child(Element::span().with_text("12"))
        .child(Element::text(" / "))
        .child(Element::span().with_text("34"));
    assert_eq!(cell.text_content(), "12 / 34");
}

#[test]
fn test_descendants_where_in_document_order() {
    let root = sample_table();
    let cells: Vec<_> = root
        .descendants_where(|el| el.tag == "td" || el.tag == "th")
        .into_iter()
        .map(|el| el.id.as_str())
        .collect();
    assert_eq!(cells, vec!["label", "cell"]);
}

// ============================================================================
// Mutation
// ============================================================================

#[test]
fn test_class_toggling() {
    let mut el = Element::td().class("a");
    el.set_class("b", true);
    el.set_class("b", true);
    assert_eq!(el.classes, vec!["a", "b"]);
    el.set_class("a", false);
    assert!(!el.has_class("a"));
    assert!(el.has_class("b"));
}

#[test]
fn test_push_child_keeps_existing_text() {
    let mut el = Element::td().with_text("hello");
    el.push_child(Element::div().id("d"));
    assert_eq!(el.child_elements().len(), 2);
    assert!(el.child_elements()[0].is_text_node());
    assert_eq!(el.text_content(), "hello");
}

#[test]
fn test_cloned_trees_compare_equal() {
    let table = Element::table()
        .id("t")
        .child(Element::tbody().id("b").data("field", "address").child(
            Element::tr().id("r").child(Element::td().id("c").class("x").with_text("Main St")),
        ));
    let copy = table.clone();
    assert_eq!(copy, table);

    let mut changed = table.clone();
    if let Some(cell) = tabledom::find_element_mut(&mut changed, "c") {
        cell.set_text("High St");
    }
    assert_ne!(changed, table);
}

#[test]
fn test_elements_are_eq() {
    fn assert_eq_impl<T: Eq>() {}
    assert_eq_impl::<Element>();
    assert_eq_impl::<tabledom::Content>();
    assert_eq_impl::<tabledom::TransitionConfig>();
}

#[test]
fn test_event_target() {
    assert_eq!(Event::click("x").target(), "x");
    assert_eq!(Event::input("y", "v").target(), "y");
}
