//! Serialization of an element tree to HTML markup.
//!
//! Text content and attribute values always go through the escaper; there is
//! no way to inject raw markup through an [`Element`].

use crate::element::{Content, Element};
use crate::escape::{escape_attr, escape_text};

/// Elements that never have a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

/// Serialize an element and its descendants.
pub fn to_html(root: &Element) -> String {
    let mut out = String::new();
    render_into(root, &mut out);
    out
}

/// Serialize only the children of an element (its "inner HTML").
pub fn inner_html(root: &Element) -> String {
    let mut out = String::new();
    render_content(&root.content, &mut out);
    out
}

/// Append the markup for `element` to `out`.
pub fn render_into(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);
    render_attributes(element, out);
    out.push('>');

    if VOID_TAGS.contains(&element.tag.as_str()) {
        if !element.content.is_empty() {
            log::debug!(
                "[render] dropping content of void element <{}>",
                element.tag
            );
        }
        return;
    }

    render_content(&element.content, out);

    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

fn render_content(content: &Content, out: &mut String) {
    match content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape_text(text)),
        Content::Children(children) => {
            for child in children {
                render_into(child, out);
            }
        }
    }
}

// Order: id, class, plain attributes, data-*, style.
fn render_attributes(element: &Element, out: &mut String) {
    if let Some(id) = &element.id {
        push_attr(out, "id", id);
    }
    if !element.classes.is_empty() {
        push_attr(out, "class", &element.classes.join(" "));
    }
    for (name, value) in &element.attrs {
        push_attr(out, name, value);
    }
    for (key, value) in &element.data {
        push_attr(out, &format!("data-{key}"), value);
    }
    let css = element.style.to_css();
    if !css.is_empty() {
        push_attr(out, "style", &css);
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attr(value));
    out.push('"');
}
