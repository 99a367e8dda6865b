//! The host page a grid is embedded in.

use crate::element::{find_element, query_class, Element};

/// A host page: a root element plus lookup helpers.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Elements carrying `class`, in document order.
    pub fn mount_points(&self, class: &str) -> Vec<&Element> {
        let found = query_class(&self.root, class);
        log::debug!("[page] {} mount point(s) with class {class:?}", found.len());
        found
    }

    pub fn find(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }
}
