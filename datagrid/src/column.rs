//! Column schema.

use serde::{Deserialize, Deserializer};

/// Column width hint, applied to the header cell.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ColumnWidth {
    /// Bare number, taken as pixels.
    Pixels(u32),
    /// Any CSS length (`"120px"`, `"20%"`, `"8rem"`, `"calc(100% - 2em)"`).
    Css(String),
}

impl ColumnWidth {
    /// The width as a single CSS value, or `None` if the hint could carry
    /// more than a length (`;`, `:`, quotes, braces, ...).
    pub fn to_css(&self) -> Option<String> {
        match self {
            Self::Pixels(px) => Some(format!("{px}px")),
            Self::Css(css) => {
                let css = css.trim();
                let is_length = !css.is_empty()
                    && css.chars().all(|c| {
                        c.is_ascii_alphanumeric() || c == ' ' || ".%+-*/(),".contains(c)
                    });
                is_length.then(|| css.to_string())
            }
        }
    }
}

/// How a cell's text is presented. The text is escaped in every case.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderHint {
    #[default]
    Text,
    /// Wrapped in a `span.badge`.
    Badge,
    /// `true` shown as a check mark, anything else as a cross.
    Boolean,
    /// Wrapped in `code`.
    Mono,
}

impl RenderHint {
    /// Parse a hint name. Unknown names fall back to [`RenderHint::Text`].
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "text" | "" => Self::Text,
            "badge" => Self::Badge,
            "boolean" | "bool" => Self::Boolean,
            "mono" | "code" => Self::Mono,
            other => {
                log::warn!("unknown column render hint {other:?}, using text");
                Self::Text
            }
        }
    }
}

fn deserialize_hint<'de, D>(deserializer: D) -> Result<RenderHint, D::Error>
where
    D: Deserializer<'de>,
{
    let name = Option::<String>::deserialize(deserializer)?;
    Ok(name.as_deref().map(RenderHint::parse).unwrap_or_default())
}

/// A displayable field of the grid.
///
/// Set once at configuration time; the grid never mutates its columns.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Column {
    /// Record field this column shows.
    pub key: String,
    /// Header text. Empty means "use the key".
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub sortable: bool,
    #[serde(default)]
    pub width: Option<ColumnWidth>,
    #[serde(default, deserialize_with = "deserialize_hint")]
    pub render: RenderHint,
}

impl Column {
    /// Create a new column with the given key and header.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            width: None,
            render: RenderHint::Text,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn width(mut self, width: ColumnWidth) -> Self {
        self.width = Some(width);
        self
    }

    pub fn render(mut self, hint: RenderHint) -> Self {
        self.render = hint;
        self
    }

    /// Header text shown for this column.
    pub fn header(&self) -> &str {
        if self.label.is_empty() {
            &self.key
        } else {
            &self.label
        }
    }
}
