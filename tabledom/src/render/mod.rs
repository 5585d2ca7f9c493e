//! HTML serialisation of element trees.

mod escape;

pub use escape::{escape_attr, escape_text};

use crate::element::{Content, Element};

/// Elements that never carry content or a closing tag.
const VOID_TAGS: &[&str] = &["br", "col", "hr", "img", "input", "meta"];

/// Serialise an element tree to an HTML string.
pub fn to_html(element: &Element) -> String {
    let mut out = String::new();
    render_element(element, &mut out);
    log::trace!("[render] {} <{}> -> {} bytes", element.id, element.tag, out.len());
    out
}

fn render_element(element: &Element, out: &mut String) {
    if element.is_text_node() {
        if let Content::Text(text) = &element.content {
            out.push_str(&escape_text(text));
        }
        return;
    }

    out.push('<');
    out.push_str(&element.tag);
    render_attrs(element, out);
    out.push('>');

    if VOID_TAGS.contains(&element.tag.as_str()) {
        return;
    }

    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape_text(text)),
        Content::Children(children) => {
            for child in children {
                render_element(child, out);
            }
        }
    }

    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

fn render_attrs(element: &Element, out: &mut String) {
    push_attr(out, "id", &element.id);

    if !element.classes.is_empty() {
        push_attr(out, "class", &element.classes.join(" "));
    }

    let mut style = Vec::new();
    if let Some(transition) = &element.transition {
        style.push(format!("transition:height {}", transition.css_timing()));
    }

    for (key, value) in &element.attrs {
        if key == "style" {
            style.insert(0, value.clone());
            continue;
        }
        if value.is_empty() {
            out.push(' ');
            out.push_str(key);
        } else {
            push_attr(out, key, value);
        }
    }

    for (key, value) in &element.data {
        push_attr(out, &format!("data-{key}"), value);
    }

    if !style.is_empty() {
        push_attr(out, "style", &style.join(";"));
    }
}

fn push_attr(out: &mut String, key: &str, value: &str) {
    out.push(' ');
    out.push_str(key);
    out.push_str("=\"");
    out.push_str(&escape_attr(value));
    out.push('"');
}
