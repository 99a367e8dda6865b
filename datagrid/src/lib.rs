//! Declarative data grid.
//!
//! A grid is declared on the host page as an element with class `table-root`
//! whose `data-*` attributes carry the records and column schema. Each mount
//! point becomes a [`GridInstance`] with its own search, sort, paging and
//! row-action menu. Edit and delete requests leave the grid as
//! [`Notification`]s through a shared [`Notifier`]; the grid never modifies
//! its records.
//!
//! ```ignore
//! let notifier = Notifier::new();
//! notifier.on_delete("users", |n| println!("delete {}", n.record_id));
//! let mut page = GridPage::mount(&document, notifier);
//! page.dispatch(&Event::input("users-search", "bo"), Instant::now());
//! ```

pub mod column;
pub mod config;
pub mod error;
pub mod instance;
pub mod labels;
pub mod menu;
pub mod notify;
pub mod page;
pub mod record;
pub mod render;
pub mod view;

pub use column::{Column, ColumnWidth, RenderHint};
pub use config::{GridConfig, GridConfigBuilder, MOUNT_CLASS};
pub use error::{ConfigError, Result};
pub use instance::{EventResult, GridInstance, RenderStats};
pub use menu::{MenuAction, MenuPosition, MenuState, MenuStatus};
pub use notify::{Notification, NotificationKind, Notifier};
pub use page::{mount_all, GridPage};
pub use record::{field_text, Record, RecordId};
pub use render::{Binding, Ids, Region};
pub use view::{compute, DerivedView, SortDirection, ViewState};
