//! Floating row-action menu.
//!
//! One menu per grid instance. It is either closed or open for a single
//! record; opening it again re-targets and repositions it.
//!
//! ```text
//!            open(R)                     open(R')
//!  Closed ───────────▶ OpenFor(R) ──────────────▶ OpenFor(R')
//!    ▲                   │  │  │
//!    │  outside click    │  │  │ pointer leave ─▶ close at now + grace,
//!    ├───────────────────┘  │  │                  unless the pointer
//!    │  edit / delete       │  │                  re-enters first
//!    ├──────────────────────┘  │
//!    │  tick() past deadline   │
//!    └─────────────────────────┘
//! ```

use std::time::{Duration, Instant};

use griddom::Rect;

use crate::record::RecordId;

/// Delay between the pointer leaving the menu and the menu closing.
pub const DEFAULT_GRACE_DELAY: Duration = Duration::from_millis(80);

/// Menu top edge relative to the trigger's bottom edge.
const OFFSET_TOP: i32 = 5;
/// Menu left edge relative to the trigger's left edge.
const OFFSET_LEFT: i32 = -120;

/// Open/closed state of the menu.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MenuStatus {
    #[default]
    Closed,
    OpenFor(RecordId),
}

/// Page position of the menu's top-left corner, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuPosition {
    pub top: i32,
    pub left: i32,
}

impl MenuPosition {
    /// Position just below `anchor`, shifted left so the menu hangs under
    /// the trigger.
    pub fn below(anchor: Rect) -> Self {
        Self {
            top: anchor.bottom() + OFFSET_TOP,
            left: anchor.left() + OFFSET_LEFT,
        }
    }
}

/// Actions offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Edit,
    Delete,
}

/// State machine for one instance's action menu.
#[derive(Debug, Clone)]
pub struct MenuState {
    status: MenuStatus,
    pointer_inside: bool,
    position: MenuPosition,
    pending_close: Option<Instant>,
    grace_delay: Duration,
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new(DEFAULT_GRACE_DELAY)
    }
}

impl MenuState {
    pub fn new(grace_delay: Duration) -> Self {
        Self {
            status: MenuStatus::Closed,
            pointer_inside: false,
            position: MenuPosition::default(),
            pending_close: None,
            grace_delay,
        }
    }

    pub fn status(&self) -> &MenuStatus {
        &self.status
    }

    pub fn is_open(&self) -> bool {
        matches!(self.status, MenuStatus::OpenFor(_))
    }

    /// Record the menu is open for.
    pub fn target(&self) -> Option<&RecordId> {
        match &self.status {
            MenuStatus::OpenFor(id) => Some(id),
            MenuStatus::Closed => None,
        }
    }

    pub fn pointer_inside(&self) -> bool {
        self.pointer_inside
    }

    pub fn position(&self) -> MenuPosition {
        self.position
    }

    /// Deadline of a scheduled close, if any.
    pub fn pending_close(&self) -> Option<Instant> {
        self.pending_close
    }

    pub fn grace_delay(&self) -> Duration {
        self.grace_delay
    }

    /// Open for `record`, anchored below `anchor`. Cancels any pending close.
    pub fn open(&mut self, record: RecordId, anchor: Rect) {
        log::trace!("[menu] open for {record}");
        self.status = MenuStatus::OpenFor(record);
        self.position = MenuPosition::below(anchor);
        self.pointer_inside = false;
        self.pending_close = None;
    }

    /// Pointer moved onto the menu.
    pub fn pointer_enter(&mut self) {
        if !self.is_open() {
            return;
        }
        self.pointer_inside = true;
        self.pending_close = None;
    }

    /// Pointer moved off the menu; schedule a close after the grace delay.
    pub fn pointer_leave(&mut self, now: Instant) {
        if !self.is_open() {
            return;
        }
        self.pointer_inside = false;
        self.pending_close = Some(now + self.grace_delay);
    }

    /// Run a due pending close. Returns true if the menu closed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.pending_close else {
            return false;
        };
        if now < deadline {
            return false;
        }
        self.pending_close = None;
        if self.pointer_inside {
            return false;
        }
        log::trace!("[menu] grace delay elapsed");
        self.close()
    }

    /// Click outside the menu and its triggers. Returns true if the menu closed.
    pub fn outside_click(&mut self) -> bool {
        self.close()
    }

    /// Activate an action. Returns what to dispatch, or `None` when closed.
    /// The menu is closed afterwards.
    pub fn activate(&mut self, action: MenuAction) -> Option<(MenuAction, RecordId)> {
        let MenuStatus::OpenFor(record) = std::mem::take(&mut self.status) else {
            return None;
        };
        self.close();
        Some((action, record))
    }

    /// Close the menu. Returns true if it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.status = MenuStatus::Closed;
        self.pointer_inside = false;
        self.pending_close = None;
        was_open
    }
}
