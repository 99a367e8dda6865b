mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id.as_deref() == Some(id) {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect every element carrying `class`, in document order.
pub fn query_class<'a>(root: &'a Element, class: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_class(root, class, &mut found);
    found
}

fn collect_class<'a>(element: &'a Element, class: &str, found: &mut Vec<&'a Element>) {
    if element.has_class(class) {
        found.push(element);
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_class(child, class, found);
        }
    }
}

/// Path from `root` down to the element with `id`, both ends inclusive.
pub fn path_to<'a>(root: &'a Element, id: &str) -> Option<Vec<&'a Element>> {
    if root.id.as_deref() == Some(id) {
        return Some(vec![root]);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(mut path) = path_to(child, id) {
                path.insert(0, root);
                return Some(path);
            }
        }
    }

    None
}

/// Nearest ancestor-or-self of `target` that carries `class`.
///
/// Mirrors `Element.closest(".class")` in a browser. Returns `None` when the
/// target is not part of the tree rooted at `root`.
pub fn closest<'a>(root: &'a Element, target: &str, class: &str) -> Option<&'a Element> {
    let path = path_to(root, target)?;
    path.into_iter().rev().find(|el| el.has_class(class))
}

/// Check whether an element with `id` exists under `root`.
pub fn contains(root: &Element, id: &str) -> bool {
    find_element(root, id).is_some()
}
