//! Page descriptions: the mount points a host page would carry.

use datagrid::config::{ATTR_COLUMNS, ATTR_GRACE_MS, ATTR_ITEMS, ATTR_PAGE_SIZE, ATTR_TABLE};
use datagrid::MOUNT_CLASS;
use griddom::{Document, Element};
use serde::Deserialize;
use serde_json::Value;

/// One grid mount point.
///
/// `items` and `columns` may be given as JSON values or as raw attribute
/// strings; strings are passed through untouched, so malformed input reaches
/// the grid exactly as a browser would hand it over.
#[derive(Debug, Clone, Deserialize)]
pub struct MountSpec {
    pub table: String,
    #[serde(default)]
    pub items: Value,
    #[serde(default)]
    pub columns: Value,
    #[serde(default)]
    pub page_size: Option<usize>,
    #[serde(default)]
    pub grace_ms: Option<u64>,
}

impl MountSpec {
    pub fn to_element(&self) -> Element {
        let mut element = Element::box_()
            .class(MOUNT_CLASS)
            .data(ATTR_TABLE, self.table.as_str());
        if let Some(items) = attribute_text(&self.items) {
            element = element.data(ATTR_ITEMS, items);
        }
        if let Some(columns) = attribute_text(&self.columns) {
            element = element.data(ATTR_COLUMNS, columns);
        }
        if let Some(size) = self.page_size {
            element = element.data(ATTR_PAGE_SIZE, size.to_string());
        }
        if let Some(ms) = self.grace_ms {
            element = element.data(ATTR_GRACE_MS, ms.to_string());
        }
        element
    }
}

fn attribute_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(raw) => Some(raw.clone()),
        other => Some(other.to_string()),
    }
}

/// Parse a page description into a host document.
pub fn parse_page(json: &str) -> serde_json::Result<Document> {
    let specs: Vec<MountSpec> = serde_json::from_str(json)?;
    log::debug!("[cli] page describes {} mount point(s)", specs.len());
    Ok(document(&specs))
}

pub fn document(specs: &[MountSpec]) -> Document {
    Document::new(Element::box_().id("page").children(specs.iter().map(MountSpec::to_element)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_become_attributes() {
        let doc = parse_page(
            r#"[{"table": "users", "items": [{"id": 1}], "columns": [{"key": "id"}], "page_size": 5}]"#,
        )
        .unwrap();
        let mounts = doc.mount_points(MOUNT_CLASS);
        assert_eq!(mounts.len(), 1);
        assert_eq!(mounts[0].get_data("table").map(String::as_str), Some("users"));
        assert_eq!(mounts[0].get_data("items").map(String::as_str), Some(r#"[{"id":1}]"#));
        assert_eq!(mounts[0].get_data("page-size").map(String::as_str), Some("5"));
        assert!(mounts[0].get_data("grace-ms").is_none());
    }

    #[test]
    fn raw_strings_pass_through() {
        let doc = parse_page(r#"[{"table": "t", "items": "{broken"}]"#).unwrap();
        let mounts = doc.mount_points(MOUNT_CLASS);
        assert_eq!(mounts[0].get_data("items").map(String::as_str), Some("{broken"));
        assert!(mounts[0].get_data("columns").is_none());
    }

    #[test]
    fn table_is_required() {
        assert!(parse_page(r#"[{"items": []}]"#).is_err());
    }
}
