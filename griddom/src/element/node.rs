use std::collections::BTreeMap;

use super::Content;
use crate::types::Style;

/// A node in the host-page element tree.
///
/// Attributes and `data-*` entries are kept in ordered maps so that the same
/// tree always serializes to the same markup.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,

    // Content
    pub content: Content,

    // Attributes
    pub attrs: BTreeMap<String, String>,
    /// `data-*` attributes, stored without the `data-` prefix.
    pub data: BTreeMap<String, String>,

    // Visual
    pub style: Style,
}

impl Default for Element {
    fn default() -> Self {
        Self::new("div")
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            content: Content::None,
            attrs: BTreeMap::new(),
            data: BTreeMap::new(),
            style: Style::default(),
        }
    }

    pub fn box_() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new("span").content_text(content)
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self::new("button").content_text(label)
    }

    /// Create a text input element.
    pub fn text_input(value: impl Into<String>) -> Self {
        Self::new("input").attr("value", value)
    }

    pub fn table() -> Self {
        Self::new("table")
    }

    pub fn row() -> Self {
        Self::new("tr")
    }

    pub fn cell() -> Self {
        Self::new("td")
    }

    pub fn header_cell() -> Self {
        Self::new("th")
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Add a class only when `enabled` is true.
    pub fn class_if(self, class: impl Into<String>, enabled: bool) -> Self {
        if enabled {
            self.class(class)
        } else {
            self
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    // Attributes
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&String> {
        self.attrs.get(name)
    }

    pub fn placeholder(self, text: impl Into<String>) -> Self {
        self.attr("placeholder", text)
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Content
    pub fn content_text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Direct children, or an empty slice for text and empty elements.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Concatenated text of this element and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.content {
            Content::None => {}
            Content::Text(text) => out.push_str(text),
            Content::Children(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }
}
