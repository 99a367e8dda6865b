//! Projects view state into element regions.
//!
//! Each region is rebuilt from scratch and carries the event bindings of the
//! elements it contains. A binding is captured when the element is built (a
//! row trigger remembers its record ID), so routing a click never needs a
//! lookup by table name.
//!
//! Every element ID comes from [`Ids`] and depends only on the table identity
//! and the element's position, so equal inputs always produce equal markup.

use griddom::{Cursor, Display, Element, Position, Style, TextAlign};

use crate::column::{Column, RenderHint};
use crate::labels;
use crate::menu::MenuState;
use crate::record::{field_text, Record, RecordId};
use crate::view::{DerivedView, SortDirection, ViewState};

/// Opacity of sort icons on inactive columns.
const DIM_OPACITY: f32 = 0.3;
const PLACEHOLDER_PADDING: &str = "1.5rem";

/// Independently re-rendered parts of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    Search,
    Counts,
    Head,
    Body,
    Pagination,
    Menu,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Search,
        Region::Counts,
        Region::Head,
        Region::Body,
        Region::Pagination,
        Region::Menu,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// What an interactive element does when the user acts on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// The search box.
    Search,
    /// A sortable header cell, by column key.
    Sort(String),
    /// A page button, 1-based.
    Page(usize),
    /// A row's action trigger, with the row's record ID.
    Trigger(RecordId),
    /// The floating menu itself (pointer enter/leave).
    Menu,
    Edit,
    Delete,
}

/// A rendered region and the bindings of the elements inside it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionOutput {
    pub element: Element,
    pub bindings: Vec<(String, Binding)>,
}

impl RegionOutput {
    fn new(element: Element) -> Self {
        Self {
            element,
            bindings: Vec::new(),
        }
    }

    fn bind(&mut self, id: &str, binding: Binding) {
        self.bindings.push((id.to_string(), binding));
    }

    pub fn binding(&self, id: &str) -> Option<&Binding> {
        self.bindings
            .iter()
            .find(|(bound, _)| bound == id)
            .map(|(_, binding)| binding)
    }
}

/// Deterministic element IDs for one grid instance.
///
/// IDs are prefixed with the instance's scope, which is the table identity
/// unless several grids on the page share it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ids {
    table: String,
    scope: String,
}

impl Ids {
    pub fn new(table: impl Into<String>) -> Self {
        let table = table.into();
        Self {
            scope: table.clone(),
            table,
        }
    }

    pub fn scoped(table: impl Into<String>, scope: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            scope: scope.into(),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn root(&self) -> String {
        format!("{}-grid", self.scope)
    }

    pub fn search(&self) -> String {
        format!("{}-search", self.scope)
    }

    pub fn counts(&self) -> String {
        format!("{}-counts", self.scope)
    }

    pub fn head(&self) -> String {
        format!("{}-head", self.scope)
    }

    pub fn header(&self, column: usize) -> String {
        format!("{}-th-{column}", self.scope)
    }

    pub fn body(&self) -> String {
        format!("{}-body", self.scope)
    }

    pub fn row(&self, row: usize) -> String {
        format!("{}-row-{row}", self.scope)
    }

    pub fn trigger(&self, row: usize) -> String {
        format!("{}-row-{row}-actions", self.scope)
    }

    pub fn pagination(&self) -> String {
        format!("{}-pagination", self.scope)
    }

    pub fn page(&self, page: usize) -> String {
        format!("{}-page-{page}", self.scope)
    }

    pub fn menu(&self) -> String {
        format!("{}-action-menu", self.scope)
    }

    pub fn edit(&self) -> String {
        format!("{}-edit", self.scope)
    }

    pub fn delete(&self) -> String {
        format!("{}-delete", self.scope)
    }
}

/// Everything a render pass reads.
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    pub ids: &'a Ids,
    pub columns: &'a [Column],
    pub view: &'a ViewState,
    pub derived: &'a DerivedView,
    pub menu: &'a MenuState,
}

/// Render one region.
pub fn render_region(region: Region, input: &RenderInput<'_>) -> RegionOutput {
    match region {
        Region::Search => render_search(input.ids, input.view),
        Region::Counts => render_counts(input.ids, input.derived),
        Region::Head => render_head(input.ids, input.columns, input.view),
        Region::Body => render_body(input.ids, input.columns, input.derived),
        Region::Pagination => render_pagination(input.ids, input.view, input.derived),
        Region::Menu => render_menu(input.ids, input.menu),
    }
}

/// Assemble the full grid from rendered regions, in document order.
pub fn assemble(ids: &Ids, regions: &[RegionOutput]) -> Element {
    let region = |r: Region| {
        regions
            .get(r.index())
            .map(|out| out.element.clone())
            .unwrap_or_default()
    };

    Element::box_()
        .id(ids.root())
        .class("table-grid")
        .data("table", ids.table())
        .child(
            Element::box_()
                .class("table-actions")
                .child(region(Region::Search))
                .child(region(Region::Counts)),
        )
        .child(
            Element::box_().class("table-container").child(
                Element::table()
                    .class("data-table")
                    .child(region(Region::Head))
                    .child(region(Region::Body)),
            ),
        )
        .child(region(Region::Pagination))
        .child(region(Region::Menu))
}

pub fn render_search(ids: &Ids, view: &ViewState) -> RegionOutput {
    let id = ids.search();
    let mut out = RegionOutput::new(
        Element::text_input(view.search_query.as_str())
            .id(id.as_str())
            .class("table-search")
            .placeholder(labels::SEARCH_PLACEHOLDER),
    );
    out.bind(&id, Binding::Search);
    out
}

pub fn render_counts(ids: &Ids, derived: &DerivedView) -> RegionOutput {
    RegionOutput::new(
        Element::span()
            .id(ids.counts())
            .class("table-count")
            .child(Element::text(format!("{} ", labels::TOTAL)))
            .child(
                Element::new("b")
                    .class("count-total")
                    .content_text(derived.total_count.to_string()),
            )
            .child(Element::text(format!(" | {} ", labels::SHOWING)))
            .child(
                Element::new("b")
                    .class("count-showing")
                    .content_text(derived.filtered_count.to_string()),
            ),
    )
}

/// Glyph and opacity of a sortable column's indicator.
pub fn sort_indicator(column: &Column, view: &ViewState) -> (&'static str, f32) {
    if column.key != view.sort_key {
        return (labels::SORT_NEUTRAL, DIM_OPACITY);
    }
    match view.sort_direction {
        SortDirection::Ascending => (labels::SORT_ASCENDING, 1.0),
        SortDirection::Descending => (labels::SORT_DESCENDING, 1.0),
    }
}

pub fn render_head(ids: &Ids, columns: &[Column], view: &ViewState) -> RegionOutput {
    let mut out = RegionOutput::default();
    let mut row = Element::row();

    for (index, column) in columns.iter().enumerate() {
        let id = ids.header(index);
        let mut style = Style::new();
        if let Some(width) = &column.width {
            match width.to_css() {
                Some(css) => style = style.width(css),
                None => log::warn!("[grid] column {:?}: ignoring width {width:?}", column.key),
            }
        }

        let mut th = Element::header_cell().id(id.as_str());
        if column.sortable {
            let (glyph, opacity) = sort_indicator(column, view);
            th = th
                .data("sort", column.key.as_str())
                .style(style.cursor(Cursor::Pointer))
                .child(Element::text(column.header()).class("th-label"))
                .child(
                    Element::text(glyph)
                        .class("sort-icon")
                        .class_if("active", column.key == view.sort_key)
                        .style(Style::new().opacity(opacity)),
                );
            out.bind(&id, Binding::Sort(column.key.clone()));
        } else {
            th = th.style(style).content_text(column.header());
        }
        row = row.child(th);
    }

    row = row.child(
        Element::header_cell()
            .class("actions-header")
            .style(Style::new().text_align(TextAlign::Center))
            .content_text(labels::ACTIONS),
    );

    out.element = Element::new("thead").id(ids.head()).child(row);
    out
}

fn render_cell(record: &Record, column: &Column) -> Element {
    let text = field_text(record, &column.key);
    let cell = Element::cell();
    match column.render {
        RenderHint::Text => cell.content_text(text),
        RenderHint::Badge => cell.child(Element::text(text).class("badge")),
        RenderHint::Mono => cell.child(Element::new("code").content_text(text)),
        RenderHint::Boolean => {
            let glyph = match text.to_lowercase().as_str() {
                "" => "",
                "true" | "1" | "yes" => labels::BOOL_TRUE,
                _ => labels::BOOL_FALSE,
            };
            cell.content_text(glyph)
        }
    }
}

pub fn render_body(ids: &Ids, columns: &[Column], derived: &DerivedView) -> RegionOutput {
    let mut out = RegionOutput::default();
    let mut body = Element::new("tbody").id(ids.body());

    if derived.is_empty() {
        body = body.child(
            Element::row().class("no-data").child(
                Element::cell()
                    .attr("colspan", (columns.len() + 1).to_string())
                    .style(
                        Style::new()
                            .text_align(TextAlign::Center)
                            .padding(PLACEHOLDER_PADDING),
                    )
                    .content_text(labels::NO_DATA),
            ),
        );
        out.element = body;
        return out;
    }

    for (index, record) in derived.visible_records.iter().enumerate() {
        let record_id = RecordId::of(record);
        let trigger_id = ids.trigger(index);

        let row = Element::row()
            .id(ids.row(index))
            .children(columns.iter().map(|column| render_cell(record, column)))
            .child(
                Element::cell()
                    .style(Style::new().text_align(TextAlign::Center))
                    .child(
                        Element::button(labels::TRIGGER_GLYPH)
                            .id(trigger_id.as_str())
                            .class("action-dots")
                            .attr("type", "button")
                            .data("record-id", record_id.to_string()),
                    ),
            );

        out.bind(&trigger_id, Binding::Trigger(record_id));
        body = body.child(row);
    }

    out.element = body;
    out
}

pub fn render_pagination(ids: &Ids, view: &ViewState, derived: &DerivedView) -> RegionOutput {
    let mut out = RegionOutput::default();
    let mut pagination = Element::box_().id(ids.pagination()).class("pagination");

    if derived.has_pagination() {
        for page in 1..=derived.total_pages {
            let id = ids.page(page);
            pagination = pagination.child(
                Element::button(page.to_string())
                    .id(id.as_str())
                    .attr("type", "button")
                    .class_if("active", page == view.current_page),
            );
            out.bind(&id, Binding::Page(page));
        }
    }

    out.element = pagination;
    out
}

pub fn render_menu(ids: &Ids, menu: &MenuState) -> RegionOutput {
    let menu_id = ids.menu();
    let edit_id = ids.edit();
    let delete_id = ids.delete();

    let style = if menu.is_open() {
        let position = menu.position();
        Style::new()
            .display(Display::Block)
            .position(Position::Absolute)
            .top(position.top)
            .left(position.left)
    } else {
        Style::new().display(Display::None)
    };

    let mut element = Element::box_()
        .id(menu_id.as_str())
        .class("action-menu")
        .style(style);
    if let Some(target) = menu.target() {
        element = element.data("record-id", target.to_string());
    }
    element = element
        .child(
            Element::button(labels::EDIT)
                .id(edit_id.as_str())
                .class("action-item")
                .class("edit-row")
                .attr("type", "button"),
        )
        .child(
            Element::button(labels::DELETE)
                .id(delete_id.as_str())
                .class("action-item")
                .class("action-delete")
                .class("delete-row")
                .attr("type", "button"),
        );

    let mut out = RegionOutput::new(element);
    out.bind(&menu_id, Binding::Menu);
    out.bind(&edit_id, Binding::Edit);
    out.bind(&delete_id, Binding::Delete);
    out
}
