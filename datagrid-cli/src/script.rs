//! Scripted user sessions.
//!
//! A script is a JSON list of steps. Each step names the grid it acts on by
//! its ID scope (the table identity, or `{table}-2`, `-3`, ... for later grids
//! of the same table) and is turned into the host-page event a user would
//! cause, then offered to every grid on the page.
//!
//! ```json
//! [
//!   {"step": "search", "table": "users", "query": "bo"},
//!   {"step": "open_menu", "table": "users", "row": 0},
//!   {"step": "delete", "table": "users"}
//! ]
//! ```

use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use datagrid::{Binding, EventResult, GridInstance, GridPage};
use griddom::{Event, Rect};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    /// Type into the search box.
    Search { table: String, query: String },
    /// Click a sortable column header.
    Sort { table: String, key: String },
    /// Click a page button.
    Page { table: String, page: usize },
    /// Click the action trigger of a visible row, 0-based.
    OpenMenu {
        table: String,
        row: usize,
        /// Trigger bounds as `[x, y, width, height]`.
        #[serde(default)]
        rect: Option<[i32; 4]>,
    },
    Edit { table: String },
    Delete { table: String },
    /// Click on the page background.
    ClickOutside {
        #[serde(default)]
        x: i32,
        #[serde(default)]
        y: i32,
    },
    PointerEnter { table: String },
    PointerLeave { table: String },
    /// Let time pass.
    WaitMs { ms: u64 },
}

pub fn parse_script(json: &str) -> serde_json::Result<Vec<Step>> {
    serde_json::from_str(json)
}

/// A page plus the simulated clock driving it.
#[derive(Debug)]
pub struct Session {
    page: GridPage,
    now: Instant,
}

impl Session {
    pub fn new(page: GridPage) -> Self {
        Self {
            page,
            now: Instant::now(),
        }
    }

    pub fn page(&self) -> &GridPage {
        &self.page
    }

    pub fn into_page(self) -> GridPage {
        self.page
    }

    pub fn run(&mut self, steps: &[Step]) -> Result<()> {
        for (index, step) in steps.iter().enumerate() {
            self.apply(step)
                .with_context(|| format!("step {} ({step:?})", index + 1))?;
        }
        Ok(())
    }

    pub fn apply(&mut self, step: &Step) -> Result<EventResult> {
        if let Step::WaitMs { ms } = step {
            self.now += Duration::from_millis(*ms);
            self.page.tick(self.now);
            return Ok(EventResult::Ignored);
        }

        let event = self.event_for(step)?;
        log::trace!("[cli] {step:?} -> {event:?}");
        Ok(self.page.dispatch(&event, self.now))
    }

    fn grid(&self, table: &str) -> Result<&GridInstance> {
        self.page
            .instance(table)
            .with_context(|| format!("no grid scoped {table:?}"))
    }

    fn event_for(&self, step: &Step) -> Result<Event> {
        let event = match step {
            Step::Search { table, query } => {
                Event::input(self.grid(table)?.ids().search(), query.as_str())
            }
            Step::Sort { table, key } => {
                let grid = self.grid(table)?;
                let index = grid
                    .columns()
                    .iter()
                    .position(|c| c.key == *key && c.sortable)
                    .with_context(|| format!("no sortable column {key:?} in {table:?}"))?;
                Event::click(grid.ids().header(index))
            }
            Step::Page { table, page } => {
                let grid = self.grid(table)?;
                let id = grid.ids().page(*page);
                if grid.binding(&id).is_none() {
                    bail!("page {page} is not shown in {table:?}");
                }
                Event::click(id)
            }
            Step::OpenMenu { table, row, rect } => {
                let grid = self.grid(table)?;
                let id = grid.ids().trigger(*row);
                if !matches!(grid.binding(&id), Some(Binding::Trigger(_))) {
                    bail!("row {row} is not shown in {table:?}");
                }
                match rect {
                    Some([x, y, w, h]) => Event::click_on(id, Rect::new(*x, *y, *w, *h)),
                    None => Event::click(id),
                }
            }
            Step::Edit { table } => Event::click(self.grid(table)?.ids().edit()),
            Step::Delete { table } => Event::click(self.grid(table)?.ids().delete()),
            Step::ClickOutside { x, y } => Event::click_background(*x, *y),
            Step::PointerEnter { table } => Event::pointer_enter(self.grid(table)?.ids().menu()),
            Step::PointerLeave { table } => Event::pointer_leave(self.grid(table)?.ids().menu()),
            Step::WaitMs { .. } => bail!("wait steps carry no event"),
        };
        Ok(event)
    }
}
