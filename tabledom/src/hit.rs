use crate::element::{Content, Element};

/// IDs from the target element up to the root, in bubbling order.
/// Returns None if the target is not in the tree.
pub fn bubble_path(root: &Element, target: &str) -> Option<Vec<String>> {
    let mut path = Vec::new();
    if collect_path(root, target, &mut path) {
        path.reverse();
        Some(path)
    } else {
        None
    }
}

fn collect_path(element: &Element, target: &str, path: &mut Vec<String>) -> bool {
    path.push(element.id.clone());

    if element.id == target {
        return true;
    }

    if let Content::Children(children) = &element.content {
        for child in children {
            if collect_path(child, target, path) {
                return true;
            }
        }
    }

    path.pop();
    false
}

/// Check whether an element with the given ID exists in the tree.
pub fn contains(root: &Element, target: &str) -> bool {
    crate::element::find_element(root, target).is_some()
}
