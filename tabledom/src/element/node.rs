use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::transitions::TransitionConfig;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Generate a unique element ID with the given prefix.
pub fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Tag used for bare text nodes.
pub const TEXT_TAG: &str = "#text";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,

    // Content
    pub content: Content,

    // Presentation
    pub classes: Vec<String>,
    /// Plain HTML attributes (`type`, `name`, `value`, `colspan`, ...).
    /// An empty value renders as a boolean attribute.
    pub attrs: BTreeMap<String, String>,
    /// `data-*` attributes, stored without the prefix.
    pub data: BTreeMap<String, String>,

    // Visual
    pub transition: Option<TransitionConfig>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            content: Content::None,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            data: BTreeMap::new(),
            transition: None,
        }
    }

    /// Create a bare text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Self::new(TEXT_TAG)
        }
    }

    pub fn table() -> Self {
        Self::new("table")
    }

    pub fn tbody() -> Self {
        Self::new("tbody")
    }

    pub fn tfoot() -> Self {
        Self::new("tfoot")
    }

    pub fn tr() -> Self {
        Self::new("tr")
    }

    pub fn td() -> Self {
        Self::new("td")
    }

    pub fn th() -> Self {
        Self::new("th")
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn a() -> Self {
        Self::new("a")
    }

    pub fn button() -> Self {
        Self::new("button")
    }

    /// Create a free-text `<input type="text">` control.
    pub fn text_input(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new("input")
            .attr("type", "text")
            .attr("name", name)
            .attr("value", value)
    }

    /// Create an empty `<select>` control.
    pub fn select(name: impl Into<String>) -> Self {
        Self::new("select").attr("name", name)
    }

    /// Create an `<option>` for a select control.
    pub fn option(value: impl Into<String>, label: impl Into<String>, selected: bool) -> Self {
        let option = Self::new("option").attr("value", value).with_text(label);
        if selected {
            option.attr("selected", "")
        } else {
            option
        }
    }

    pub fn is_text_node(&self) -> bool {
        self.tag == TEXT_TAG
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Classes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Add or remove a class depending on `on`.
    pub fn set_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    // Attributes
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn get_attr(&self, key: &str) -> Option<&String> {
        self.attrs.get(key)
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Visual
    pub fn transition(mut self, transition: TransitionConfig) -> Self {
        self.transition = Some(transition);
        self
    }

    // Content
    pub fn with_text(mut self, content: impl Into<String>) -> Self {
        self.content = Content::Text(content.into());
        self
    }

    /// Replace the content with a single text value.
    pub fn set_text(&mut self, content: impl Into<String>) {
        self.content = Content::Text(content.into());
    }

    /// Concatenated text of this element and all its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        for child in new_children {
            self.push_child(child);
        }
        self
    }

    pub fn push_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            Content::Text(text) => {
                // Keep existing text as a leading text node
                let text = Element::text(std::mem::take(text));
                self.content = Content::Children(vec![text, child]);
            }
        }
    }

    /// Direct children, empty for text or empty content.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// All descendants (depth-first, document order) matching `predicate`.
    pub fn descendants_where(&self, predicate: impl Fn(&Element) -> bool) -> Vec<&Element> {
        let mut out = Vec::new();
        collect_where(self, &predicate, &mut out);
        out
    }
}

fn collect_text(element: &Element, out: &mut String) {
    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(text),
        Content::Children(children) => {
            for child in children {
                collect_text(child, out);
            }
        }
    }
}

fn collect_where<'a>(
    element: &'a Element,
    predicate: &dyn Fn(&Element) -> bool,
    out: &mut Vec<&'a Element>,
) {
    for child in element.child_elements() {
        if predicate(child) {
            out.push(child);
        }
        collect_where(child, predicate, out);
    }
}
