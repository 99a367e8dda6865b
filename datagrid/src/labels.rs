//! Fixed user-facing strings and glyphs.

pub const SEARCH_PLACEHOLDER: &str = "Search...";
pub const TOTAL: &str = "Total:";
pub const SHOWING: &str = "Showing:";
pub const ACTIONS: &str = "Actions";
pub const EDIT: &str = "✏️ Edit";
pub const DELETE: &str = "🗑️ Delete";
pub const NO_DATA: &str = "No data";

pub const TRIGGER_GLYPH: &str = "⋮";
pub const SORT_NEUTRAL: &str = "⇅";
pub const SORT_ASCENDING: &str = "▲";
pub const SORT_DESCENDING: &str = "▼";

pub const BOOL_TRUE: &str = "✓";
pub const BOOL_FALSE: &str = "✗";
