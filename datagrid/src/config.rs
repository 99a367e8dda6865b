//! Grid configuration, read once at construction.
//!
//! A mount point carries its configuration as `data-*` attributes:
//!
//! ```html
//! <div class="table-root"
//!      data-table="lesson_type"
//!      data-items='[{"id": 1, "name": "Lecture"}]'
//!      data-columns='[{"key": "name", "label": "Name", "sortable": true}]'
//!      data-page-size="10"
//!      data-grace-ms="80">
//! </div>
//! ```
//!
//! Only `data-table` is needed. Missing or malformed values fall back to
//! defaults; [`GridConfig::from_element`] never fails.

use std::time::Duration;

use griddom::Element;
use serde_json::Value;

use crate::column::Column;
use crate::error::{ConfigError, Result};
use crate::menu::DEFAULT_GRACE_DELAY;
use crate::record::Record;
use crate::view::DEFAULT_PAGE_SIZE;

/// Class marking an element as a grid mount point.
pub const MOUNT_CLASS: &str = "table-root";

/// Table identity used when a mount point has none.
pub const DEFAULT_TABLE: &str = "table";

pub const ATTR_TABLE: &str = "table";
pub const ATTR_ITEMS: &str = "items";
pub const ATTR_COLUMNS: &str = "columns";
pub const ATTR_PAGE_SIZE: &str = "page-size";
pub const ATTR_GRACE_MS: &str = "grace-ms";

/// Everything a grid instance is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Table identity: prefixes element IDs and names notifications.
    pub table: String,
    /// Element ID prefix. `None` uses the table identity.
    pub scope: Option<String>,
    pub records: Vec<Record>,
    pub columns: Vec<Column>,
    pub page_size: usize,
    pub grace_delay: Duration,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            table: DEFAULT_TABLE.to_string(),
            scope: None,
            records: Vec::new(),
            columns: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
            grace_delay: DEFAULT_GRACE_DELAY,
        }
    }
}

impl GridConfig {
    pub fn builder(table: impl Into<String>) -> GridConfigBuilder {
        GridConfigBuilder {
            config: GridConfig {
                table: table.into(),
                ..Default::default()
            },
        }
    }

    /// Read a mount point's data attributes, substituting defaults for
    /// anything missing or malformed.
    pub fn from_element(element: &Element) -> Self {
        let table = element
            .get_data(ATTR_TABLE)
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TABLE)
            .to_string();

        let records = element
            .get_data(ATTR_ITEMS)
            .map_or(Ok(Vec::new()), |raw| parse_records(raw));
        let columns = element
            .get_data(ATTR_COLUMNS)
            .map_or(Ok(Vec::new()), |raw| parse_columns(raw));
        let page_size = element
            .get_data(ATTR_PAGE_SIZE)
            .map(|raw| parse_page_size(raw))
            .transpose();
        let grace_delay = element
            .get_data(ATTR_GRACE_MS)
            .map(|raw| parse_grace_delay(raw))
            .transpose();

        Self {
            records: recover(&table, records),
            columns: recover(&table, columns),
            page_size: recover(&table, page_size).unwrap_or(DEFAULT_PAGE_SIZE),
            grace_delay: recover(&table, grace_delay).unwrap_or(DEFAULT_GRACE_DELAY),
            table,
            scope: None,
        }
    }
}

/// Log a configuration error and use the type's default instead.
fn recover<T: Default>(table: &str, result: Result<T>) -> T {
    result.unwrap_or_else(|err| {
        log::warn!("[config] {table}: {err}; using default");
        T::default()
    })
}

/// Builder for programmatic hosts.
#[derive(Debug, Clone)]
pub struct GridConfigBuilder {
    config: GridConfig,
}

impl GridConfigBuilder {
    /// Prefix element IDs with `scope` instead of the table identity.
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.config.scope = Some(scope.into());
        self
    }

    pub fn records(mut self, records: Vec<Record>) -> Self {
        self.config.records = records;
        self
    }

    pub fn columns(mut self, columns: Vec<Column>) -> Self {
        self.config.columns = columns;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.config.page_size = page_size.max(1);
        self
    }

    pub fn grace_delay(mut self, delay: Duration) -> Self {
        self.config.grace_delay = delay;
        self
    }

    pub fn build(self) -> GridConfig {
        self.config
    }
}

/// Parse a JSON array attribute. Blank input is an empty array.
fn parse_array(attribute: &'static str, raw: &str) -> Result<Vec<Value>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    match serde_json::from_str::<Value>(raw).map_err(|e| ConfigError::json(attribute, e))? {
        Value::Array(items) => Ok(items),
        _ => Err(ConfigError::NotAnArray { attribute }),
    }
}

/// Parse `data-items`. Entries that are not objects are skipped.
pub fn parse_records(raw: &str) -> Result<Vec<Record>> {
    let items = parse_array(ATTR_ITEMS, raw)?;
    let total = items.len();
    let records: Vec<Record> = items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect();
    if records.len() < total {
        log::warn!("[config] skipped {} non-object item(s)", total - records.len());
    }
    Ok(records)
}

/// Parse `data-columns`. Entries that do not describe a column (no `key`,
/// wrong field types) are skipped.
pub fn parse_columns(raw: &str) -> Result<Vec<Column>> {
    let items = parse_array(ATTR_COLUMNS, raw)?;
    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Column>(item) {
            Ok(column) => Some(column),
            Err(err) => {
                log::warn!("[config] skipped column: {err}");
                None
            }
        })
        .collect())
}

pub fn parse_page_size(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ConfigError::InvalidPageSize(raw.to_string())),
    }
}

pub fn parse_grace_delay(raw: &str) -> Result<Duration> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidGraceDelay(raw.to_string()))
}
