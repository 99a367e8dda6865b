//! One grid per mount point.
//!
//! A [`GridInstance`] owns its records, columns, [`ViewState`] and
//! [`MenuState`]. Every state-changing call recomputes the derived view and
//! re-renders the regions that depend on the changed state before it returns,
//! so the rendered output is never out of step with the state.

use std::time::Instant;

use griddom::{closest, contains, Element, Event, Rect};

use crate::column::Column;
use crate::config::GridConfig;
use crate::menu::{MenuAction, MenuState};
use crate::notify::{Notification, NotificationKind, Notifier};
use crate::record::{Record, RecordId};
use crate::render::{self, Binding, Ids, Region, RegionOutput, RenderInput};
use crate::view::{self, DerivedView, ViewState};

/// Regions that depend on the search query.
const SEARCH_REGIONS: &[Region] = &[
    Region::Search,
    Region::Counts,
    Region::Body,
    Region::Pagination,
];
/// Regions that depend on the sort key and direction.
const SORT_REGIONS: &[Region] = &[Region::Head, Region::Body];
/// Regions that depend on the current page.
const PAGE_REGIONS: &[Region] = &[Region::Body, Region::Pagination];

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The event does not concern this grid.
    Ignored,
    /// The event changed or was absorbed by this grid.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Counters for recompute and render passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub recomputes: usize,
    renders: [usize; Region::ALL.len()],
}

impl RenderStats {
    /// How many times `region` has been rebuilt.
    pub fn renders(&self, region: Region) -> usize {
        self.renders[region.index()]
    }
}

/// A live grid bound to one mount point.
#[derive(Debug)]
pub struct GridInstance {
    ids: Ids,
    records: Vec<Record>,
    columns: Vec<Column>,
    view: ViewState,
    derived: DerivedView,
    menu: MenuState,
    notifier: Notifier,
    regions: Vec<RegionOutput>,
    stats: RenderStats,
}

impl GridInstance {
    pub fn new(config: GridConfig, notifier: Notifier) -> Self {
        let GridConfig {
            table,
            scope,
            records,
            columns,
            page_size,
            grace_delay,
        } = config;

        let view = ViewState::new(&columns, page_size);
        let mut instance = Self {
            ids: match scope {
                Some(scope) => Ids::scoped(table, scope),
                None => Ids::new(table),
            },
            records,
            columns,
            view,
            derived: DerivedView::default(),
            menu: MenuState::new(grace_delay),
            notifier,
            regions: vec![RegionOutput::default(); Region::ALL.len()],
            stats: RenderStats::default(),
        };

        instance.recompute();
        instance.render(&Region::ALL);
        log::info!(
            "[grid] mounted {:?}: {} record(s), {} column(s)",
            instance.table(),
            instance.records.len(),
            instance.columns.len()
        );
        instance
    }

    /// Build from a mount point's data attributes.
    pub fn from_mount(element: &Element, notifier: Notifier) -> Self {
        Self::new(GridConfig::from_element(element), notifier)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn table(&self) -> &str {
        self.ids.table()
    }

    pub fn ids(&self) -> &Ids {
        &self.ids
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn derived(&self) -> &DerivedView {
        &self.derived
    }

    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn render_stats(&self) -> RenderStats {
        self.stats
    }

    // -------------------------------------------------------------------------
    // Output
    // -------------------------------------------------------------------------

    /// The whole grid as an element tree.
    pub fn element(&self) -> Element {
        render::assemble(&self.ids, &self.regions)
    }

    pub fn to_html(&self) -> String {
        griddom::to_html(&self.element())
    }

    pub fn region(&self, region: Region) -> &Element {
        &self.regions[region.index()].element
    }

    pub fn region_html(&self, region: Region) -> String {
        griddom::to_html(self.region(region))
    }

    /// Binding of an element rendered by this grid.
    pub fn binding(&self, id: &str) -> Option<&Binding> {
        self.regions.iter().find_map(|out| out.binding(id))
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Replace the search query and go back to page 1.
    pub fn search(&mut self, query: &str) {
        self.view.set_search(query);
        self.recompute();
        self.render(SEARCH_REGIONS);
    }

    /// Sort by `key`, toggling direction if it is already the sort key.
    ///
    /// Keys that name no column are accepted; their values sort as empty text.
    pub fn sort_by(&mut self, key: &str) {
        self.view.toggle_sort(key);
        self.recompute();
        self.render(SORT_REGIONS);
    }

    /// Show page `page`, clamped to the pages that exist.
    pub fn go_to_page(&mut self, page: usize) {
        self.view.set_page(page, self.derived.total_pages);
        self.recompute();
        self.render(PAGE_REGIONS);
    }

    /// Open the row menu for `record`, anchored below `anchor`.
    pub fn open_menu(&mut self, record: RecordId, anchor: Rect) {
        self.menu.open(record, anchor);
        self.render(&[Region::Menu]);
    }

    /// Dispatch an edit request for the menu's record and close the menu.
    pub fn request_edit(&mut self) -> Option<Notification> {
        self.activate(MenuAction::Edit)
    }

    /// Dispatch a delete request for the menu's record and close the menu.
    pub fn request_delete(&mut self) -> Option<Notification> {
        self.activate(MenuAction::Delete)
    }

    /// Close the menu because of a click outside it. Returns true if it was open.
    pub fn click_outside(&mut self) -> bool {
        let closed = self.menu.outside_click();
        if closed {
            self.render(&[Region::Menu]);
        }
        closed
    }

    pub fn menu_pointer_enter(&mut self) {
        self.menu.pointer_enter();
    }

    pub fn menu_pointer_leave(&mut self, now: Instant) {
        self.menu.pointer_leave(now);
    }

    /// Run time-based transitions. Returns true if anything re-rendered.
    pub fn tick(&mut self, now: Instant) -> bool {
        let closed = self.menu.tick(now);
        if closed {
            self.render(&[Region::Menu]);
        }
        closed
    }

    // -------------------------------------------------------------------------
    // Event routing
    // -------------------------------------------------------------------------

    /// Route a host-page event to this grid.
    ///
    /// Every click on the page should be offered to every grid: a click that
    /// lands outside this grid's menu and row triggers closes its menu.
    pub fn handle_event(&mut self, event: &Event, now: Instant) -> EventResult {
        self.tick(now);

        match event {
            Event::Input { target, value } => match self.binding(target) {
                Some(Binding::Search) => {
                    log::trace!("[grid] {} search {value:?}", self.table());
                    self.search(value);
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            },
            Event::Click {
                target,
                x,
                y,
                target_rect,
            } => {
                let anchor = target_rect.unwrap_or(Rect::point(*x, *y));
                self.on_click(target.as_deref(), anchor)
            }
            Event::PointerEnter { target } => match self.binding(target) {
                Some(Binding::Menu) => {
                    self.menu_pointer_enter();
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            },
            Event::PointerLeave { target } => match self.binding(target) {
                Some(Binding::Menu) => {
                    self.menu_pointer_leave(now);
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            },
        }
    }

    fn on_click(&mut self, target: Option<&str>, anchor: Rect) -> EventResult {
        let binding = target.and_then(|id| self.binding(id).cloned());
        let outside = !target.is_some_and(|id| self.is_menu_or_trigger(id));
        log::trace!(
            "[grid] {} click {target:?} -> {binding:?} (outside: {outside})",
            self.table()
        );

        let result = match binding {
            Some(Binding::Sort(key)) => {
                self.sort_by(&key);
                EventResult::Consumed
            }
            Some(Binding::Page(page)) => {
                self.go_to_page(page);
                EventResult::Consumed
            }
            Some(Binding::Trigger(record)) => {
                self.open_menu(record, anchor);
                EventResult::Consumed
            }
            Some(Binding::Edit) => {
                self.request_edit();
                EventResult::Consumed
            }
            Some(Binding::Delete) => {
                self.request_delete();
                EventResult::Consumed
            }
            Some(Binding::Search | Binding::Menu) => EventResult::Consumed,
            None => EventResult::Ignored,
        };

        if outside && self.click_outside() {
            return EventResult::Consumed;
        }
        result
    }

    /// Whether `id` is this grid's menu (or inside it) or one of its row triggers.
    fn is_menu_or_trigger(&self, id: &str) -> bool {
        contains(self.region(Region::Menu), id)
            || closest(self.region(Region::Body), id, "action-dots").is_some()
    }

    fn activate(&mut self, action: MenuAction) -> Option<Notification> {
        let (action, record) = self.menu.activate(action)?;
        self.render(&[Region::Menu]);

        let kind = match action {
            MenuAction::Edit => NotificationKind::Edit,
            MenuAction::Delete => NotificationKind::Delete,
        };
        let notification = Notification::new(kind, self.table(), record);
        self.notifier.dispatch(notification.clone());
        Some(notification)
    }

    fn recompute(&mut self) {
        self.derived = view::compute(&self.records, &self.view, &self.columns);
        self.stats.recomputes += 1;
    }

    fn render(&mut self, regions: &[Region]) {
        let input = RenderInput {
            ids: &self.ids,
            columns: &self.columns,
            view: &self.view,
            derived: &self.derived,
            menu: &self.menu,
        };
        for &region in regions {
            self.regions[region.index()] = render::render_region(region, &input);
            self.stats.renders[region.index()] += 1;
        }
        log::debug!("[grid] {} rendered {regions:?}", self.ids.scope());
    }
}
