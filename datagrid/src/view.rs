//! Derived view engine: filter → sort → paginate.
//!
//! [`compute`] is a pure function of the record set, the [`ViewState`] and the
//! column schema. The grid instance calls it after every state change.

use std::cmp::Ordering;
use std::ops::Range;

use crate::column::Column;
use crate::record::{field_text, Record, ID_FIELD};

/// Rows per page when the configuration does not say otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sort direction of the active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == Self::Ascending
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Search, sort and page state of one grid instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search_query: String,
    pub sort_key: String,
    pub sort_direction: SortDirection,
    /// 1-based.
    pub current_page: usize,
    pub page_size: usize,
}

impl ViewState {
    /// Initial state for a schema: first sortable column (else first column,
    /// else `id`), ascending, page 1.
    pub fn new(columns: &[Column], page_size: usize) -> Self {
        let sort_key = columns
            .iter()
            .find(|c| c.sortable)
            .or_else(|| columns.first())
            .map(|c| c.key.clone())
            .unwrap_or_else(|| ID_FIELD.to_string());

        Self {
            search_query: String::new(),
            sort_key,
            sort_direction: SortDirection::Ascending,
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Replace the search query. Always returns to the first page.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.current_page = 1;
    }

    /// Header click: flip direction on the active key, otherwise switch to
    /// `key` ascending. The page is left alone.
    pub fn toggle_sort(&mut self, key: &str) {
        if self.sort_key == key {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_key = key.to_string();
            self.sort_direction = SortDirection::Ascending;
        }
    }

    /// Jump to a page, clamped to `1..=max(total_pages, 1)`.
    pub fn set_page(&mut self, page: usize, total_pages: usize) {
        self.current_page = page.clamp(1, total_pages.max(1));
    }

    /// Query as used for matching: trimmed and lower-cased.
    pub fn normalized_query(&self) -> String {
        self.search_query.trim().to_lowercase()
    }
}

/// Result of applying a [`ViewState`] to the full record set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DerivedView {
    /// Records before filtering.
    pub total_count: usize,
    /// Records passing the search filter.
    pub filtered_count: usize,
    /// `ceil(filtered_count / page_size)`; 0 when nothing matches.
    pub total_pages: usize,
    /// Index range of `visible_records` within the filtered, sorted set.
    pub range: Range<usize>,
    pub visible_records: Vec<Record>,
}

impl DerivedView {
    pub fn is_empty(&self) -> bool {
        self.visible_records.is_empty()
    }

    /// Whether page buttons should be shown at all.
    pub fn has_pagination(&self) -> bool {
        self.total_pages > 1
    }
}

/// Filter, sort and slice `records` according to `state`.
pub fn compute(records: &[Record], state: &ViewState, columns: &[Column]) -> DerivedView {
    let query = state.normalized_query();
    let filtered = filter(records, &query, columns);
    let sorted = sort(filtered, &state.sort_key, state.sort_direction);

    let page_size = state.page_size.max(1);
    let filtered_count = sorted.len();
    let total_pages = filtered_count.div_ceil(page_size);
    let range = page_bounds(state.current_page, page_size, filtered_count);

    log::debug!(
        "[view] query={query:?} sort={}:{:?} page={}/{} showing {:?} of {} ({} total)",
        state.sort_key,
        state.sort_direction,
        state.current_page,
        total_pages,
        range,
        filtered_count,
        records.len()
    );

    DerivedView {
        total_count: records.len(),
        filtered_count,
        total_pages,
        visible_records: sorted[range.clone()].iter().map(|r| (*r).clone()).collect(),
        range,
    }
}

/// Records matching an already-normalized query, in input order.
pub fn filter<'a>(records: &'a [Record], query: &str, columns: &[Column]) -> Vec<&'a Record> {
    if query.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| matches(record, query, columns))
        .collect()
}

/// Whether any column's text contains `query` (already lower-cased).
pub fn matches(record: &Record, query: &str, columns: &[Column]) -> bool {
    columns
        .iter()
        .any(|c| field_text(record, &c.key).to_lowercase().contains(query))
}

/// Stable, case-insensitive sort on one field. Ties keep their input order in
/// both directions.
pub fn sort<'a>(records: Vec<&'a Record>, key: &str, direction: SortDirection) -> Vec<&'a Record> {
    let mut keyed: Vec<(String, &Record)> = records
        .into_iter()
        .map(|r| (field_text(r, key).to_lowercase(), r))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| direction.apply(a.cmp(b)));
    keyed.into_iter().map(|(_, r)| r).collect()
}

/// Index range of a 1-based page, clipped to `len`.
///
/// Pages past the end give an empty range at `len`.
pub fn page_bounds(page: usize, page_size: usize, len: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}
