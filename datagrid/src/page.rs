//! All grids on one host page.

use std::collections::HashSet;
use std::time::Instant;

use griddom::{Document, Event};

use crate::config::{GridConfig, MOUNT_CLASS};
use crate::instance::{EventResult, GridInstance};
use crate::notify::Notifier;

/// Build one instance per mount point, in document order.
///
/// Every instance gets an ID scope no other instance on the page uses: the
/// table identity if it is still free, otherwise the identity suffixed `-2`,
/// `-3`, ...
pub fn mount_all(document: &Document, notifier: &Notifier) -> Vec<GridInstance> {
    let mut used: HashSet<String> = HashSet::new();
    document
        .mount_points(MOUNT_CLASS)
        .into_iter()
        .map(|mount| {
            let mut config = GridConfig::from_element(mount);
            let scope = unique_scope(&config.table, &used);
            if scope != config.table {
                log::warn!("[page] duplicate table {:?}, scoping ids as {scope:?}", config.table);
                config.scope = Some(scope.clone());
            }
            used.insert(scope);
            GridInstance::new(config, notifier.clone())
        })
        .collect()
}

fn unique_scope(table: &str, used: &HashSet<String>) -> String {
    let mut scope = table.to_string();
    let mut n = 1;
    while used.contains(&scope) {
        n += 1;
        scope = format!("{table}-{n}");
    }
    scope
}

/// The grids of a page and the notifier they share.
#[derive(Debug, Default)]
pub struct GridPage {
    instances: Vec<GridInstance>,
    notifier: Notifier,
}

impl GridPage {
    pub fn mount(document: &Document, notifier: Notifier) -> Self {
        Self {
            instances: mount_all(document, &notifier),
            notifier,
        }
    }

    pub fn from_instances(instances: Vec<GridInstance>, notifier: Notifier) -> Self {
        Self {
            instances,
            notifier,
        }
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn instances(&self) -> &[GridInstance] {
        &self.instances
    }

    /// Instance whose ID scope is `scope`. The first grid of a table is
    /// scoped by the table identity itself.
    pub fn instance(&self, scope: &str) -> Option<&GridInstance> {
        self.instances.iter().find(|grid| grid.ids().scope() == scope)
    }

    pub fn instance_mut(&mut self, scope: &str) -> Option<&mut GridInstance> {
        self.instances
            .iter_mut()
            .find(|grid| grid.ids().scope() == scope)
    }

    /// Offer `event` to every instance, the way a page-wide listener would.
    pub fn dispatch(&mut self, event: &Event, now: Instant) -> EventResult {
        let mut result = EventResult::Ignored;
        for grid in &mut self.instances {
            if grid.handle_event(event, now).is_handled() {
                result = EventResult::Consumed;
            }
        }
        result
    }

    /// Advance time for every instance. Returns true if any re-rendered.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.instances
            .iter_mut()
            .fold(false, |changed, grid| grid.tick(now) || changed)
    }
}
