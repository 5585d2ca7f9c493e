#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use table_edit::{EditorOptions, SaveData};
use tabledom::Element;

/// Collects every payload handed to the save callback.
#[derive(Clone, Default)]
pub struct SaveRecorder {
    saved: Arc<Mutex<Vec<SaveData>>>,
}

impl SaveRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> EditorOptions {
        let saved = Arc::clone(&self.saved);
        EditorOptions::new().on_save(move |data| saved.lock().unwrap().push(data.clone()))
    }

    pub fn calls(&self) -> Vec<SaveData> {
        self.saved.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.saved.lock().unwrap().len()
    }
}

/// A row with a header cell and two untagged data cells.
pub fn field_row(prefix: &str, field: &str, label: &str, left: &str, right: &str) -> Element {
    Element::tr()
        .id(format!("{prefix}-{field}"))
        .data("field", field)
        .child(Element::th().id(format!("{prefix}-{field}-label")).with_text(label))
        .child(Element::td().id(format!("{prefix}-{field}-1")).with_text(left))
        .child(Element::td().id(format!("{prefix}-{field}-2")).with_text(right))
}

/// An ungrouped table with one untagged section: name and city rows.
pub fn person_table(prefix: &str) -> Element {
    Element::table().id(prefix).child(
        Element::tbody()
            .id(format!("{prefix}-body"))
            .child(field_row(prefix, "name", "Name", "Alice", "Alicia"))
            .child(field_row(prefix, "city", "City", "Berlin", "Bern")),
    )
}

/// A grouped table with one untagged section: price and stock rows.
pub fn grouped_table(prefix: &str, group: &str, identifier: &str) -> Element {
    Element::table()
        .id(prefix)
        .data("group", group)
        .data("identifier", identifier)
        .child(
            Element::tbody()
                .id(format!("{prefix}-body"))
                .child(field_row(prefix, "price", "Price", "10", "12"))
                .child(field_row(prefix, "stock", "Stock", "3", "5")),
        )
}

pub fn string_map(pairs: &[(&str, &str)]) -> SaveData {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
        .collect()
}
