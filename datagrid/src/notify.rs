//! Outbound edit/delete requests.
//!
//! The grid never changes data itself. When a user picks an action from a
//! row's menu the instance dispatches a [`Notification`] through the shared
//! [`Notifier`]; host code subscribed to `table_edit_{table}` or
//! `table_delete_{table}` decides what to do with it.

use std::fmt;
use std::sync::{Arc, RwLock};

use serde::Serialize;

use crate::record::RecordId;

/// Which action was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Edit,
    Delete,
}

impl NotificationKind {
    /// Event name host code subscribes to for `table`.
    pub fn event_name(self, table: &str) -> String {
        match self {
            Self::Edit => format!("table_edit_{table}"),
            Self::Delete => format!("table_delete_{table}"),
        }
    }
}

/// A request for the host to edit or delete one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub table: String,
    pub record_id: RecordId,
}

impl Notification {
    pub fn new(kind: NotificationKind, table: impl Into<String>, record_id: RecordId) -> Self {
        Self {
            kind,
            table: table.into(),
            record_id,
        }
    }

    pub fn event_name(&self) -> String {
        self.kind.event_name(&self.table)
    }
}

type Handler = Arc<dyn Fn(&Notification) + Send + Sync>;

#[derive(Default)]
struct NotifierInner {
    /// (event name, handler) in subscription order.
    subscribers: Vec<(String, Handler)>,
    /// Whether `dispatched` is kept at all.
    recording: bool,
    /// Every notification dispatched since the last drain, when recording.
    dispatched: Vec<Notification>,
}

/// Page-wide dispatcher shared by all grid instances.
///
/// Cheap to clone; clones share subscribers and the dispatch log. The log is
/// only kept by notifiers built with [`Notifier::recording`]; hosts that react
/// through handlers use [`Notifier::new`] and hold nothing between dispatches.
#[derive(Clone, Default)]
pub struct Notifier {
    inner: Arc<RwLock<NotifierInner>>,
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (subscribers, recording, dispatched) = self
            .inner
            .read()
            .map(|g| (g.subscribers.len(), g.recording, g.dispatched.len()))
            .unwrap_or_default();
        f.debug_struct("Notifier")
            .field("subscribers", &subscribers)
            .field("recording", &recording)
            .field("dispatched", &dispatched)
            .finish()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier that also keeps every dispatched notification until
    /// [`drain`](Self::drain) is called.
    pub fn recording() -> Self {
        let notifier = Self::new();
        if let Ok(mut guard) = notifier.inner.write() {
            guard.recording = true;
        }
        notifier
    }

    pub fn is_recording(&self) -> bool {
        self.inner.read().map(|g| g.recording).unwrap_or_default()
    }

    /// Call `handler` for every notification named `event_name`.
    pub fn subscribe<F>(&self, event_name: impl Into<String>, handler: F)
    where
        F: Fn(&Notification) + Send + Sync + 'static,
    {
        if let Ok(mut guard) = self.inner.write() {
            guard.subscribers.push((event_name.into(), Arc::new(handler)));
        }
    }

    /// Subscribe to edit requests for `table`.
    pub fn on_edit<F>(&self, table: &str, handler: F)
    where
        F: Fn(&Notification) + Send + Sync + 'static,
    {
        self.subscribe(NotificationKind::Edit.event_name(table), handler);
    }

    /// Subscribe to delete requests for `table`.
    pub fn on_delete<F>(&self, table: &str, handler: F)
    where
        F: Fn(&Notification) + Send + Sync + 'static,
    {
        self.subscribe(NotificationKind::Delete.event_name(table), handler);
    }

    /// Deliver a notification to matching subscribers, synchronously.
    ///
    /// Handlers run without the internal lock held, so they may subscribe or
    /// dispatch themselves.
    pub fn dispatch(&self, notification: Notification) {
        let name = notification.event_name();
        let handlers: Vec<Handler> = match self.inner.write() {
            Ok(mut guard) => {
                if guard.recording {
                    guard.dispatched.push(notification.clone());
                }
                guard
                    .subscribers
                    .iter()
                    .filter(|(event, _)| *event == name)
                    .map(|(_, handler)| Arc::clone(handler))
                    .collect()
            }
            Err(_) => return,
        };

        log::debug!(
            "[notify] {name} record={} ({} subscriber(s))",
            notification.record_id,
            handlers.len()
        );
        for handler in handlers {
            handler(&notification);
        }
    }

    /// Notifications dispatched since the last drain, without clearing them.
    /// Always empty unless recording.
    pub fn dispatched(&self) -> Vec<Notification> {
        self.inner
            .read()
            .map(|g| g.dispatched.clone())
            .unwrap_or_default()
    }

    /// Take all notifications dispatched since the last drain.
    pub fn drain(&self) -> Vec<Notification> {
        self.inner
            .write()
            .ok()
            .map(|mut g| std::mem::take(&mut g.dispatched))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn event_names() {
        assert_eq!(NotificationKind::Edit.event_name("users"), "table_edit_users");
        assert_eq!(NotificationKind::Delete.event_name("users"), "table_delete_users");
    }

    #[test]
    fn dispatch_reaches_only_matching_subscribers() {
        let notifier = Notifier::recording();
        let edits = Arc::new(AtomicUsize::new(0));
        let deletes = Arc::new(AtomicUsize::new(0));

        let e = Arc::clone(&edits);
        notifier.on_edit("users", move |_| {
            e.fetch_add(1, Ordering::SeqCst);
        });
        let d = Arc::clone(&deletes);
        notifier.on_delete("users", move |_| {
            d.fetch_add(1, Ordering::SeqCst);
        });

        notifier.dispatch(Notification::new(NotificationKind::Delete, "users", RecordId::from(7)));
        notifier.dispatch(Notification::new(NotificationKind::Delete, "rooms", RecordId::from(7)));

        assert_eq!(edits.load(Ordering::SeqCst), 0);
        assert_eq!(deletes.load(Ordering::SeqCst), 1);
        assert_eq!(notifier.drain().len(), 2);
        assert!(notifier.drain().is_empty());
    }

    #[test]
    fn clones_share_state() {
        let a = Notifier::recording();
        let b = a.clone();
        b.dispatch(Notification::new(NotificationKind::Edit, "t", RecordId::from("x")));
        assert_eq!(a.dispatched().len(), 1);
    }

    #[test]
    fn handler_may_dispatch() {
        let notifier = Notifier::recording();
        let inner = notifier.clone();
        notifier.on_edit("t", move |n| {
            inner.dispatch(Notification::new(NotificationKind::Delete, "t", n.record_id.clone()));
        });
        notifier.dispatch(Notification::new(NotificationKind::Edit, "t", RecordId::from(1)));
        assert_eq!(notifier.drain().len(), 2);
    }

    #[test]
    fn log_stays_empty_unless_recording() {
        let notifier = Notifier::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&calls);
        notifier.on_delete("users", move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });

        for id in 0..1000 {
            notifier.dispatch(Notification::new(NotificationKind::Delete, "users", RecordId::from(id)));
        }

        assert!(!notifier.is_recording());
        assert_eq!(calls.load(Ordering::SeqCst), 1000);
        assert!(notifier.dispatched().is_empty());
        assert!(notifier.inner.read().unwrap().dispatched.is_empty());
        assert!(notifier.drain().is_empty());
    }

    #[test]
    fn recording_keeps_until_drained() {
        let notifier = Notifier::recording();
        assert!(notifier.is_recording());
        notifier.dispatch(Notification::new(NotificationKind::Edit, "t", RecordId::from(1)));
        assert_eq!(notifier.dispatched().len(), 1);
        assert_eq!(notifier.drain().len(), 1);
        assert!(notifier.dispatched().is_empty());
    }

    #[test]
    fn payload_serialization() {
        let n = Notification::new(NotificationKind::Delete, "users", RecordId::from(7));
        assert_eq!(
            serde_json::to_string(&n).unwrap(),
            r#"{"kind":"delete","table":"users","record_id":7}"#
        );
    }
}
