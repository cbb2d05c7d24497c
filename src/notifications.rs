use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::cart::{CartEvent, CartStore};

pub const DEFAULT_DURATION_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub kind: NotificationKind,
    pub duration_ms: u64,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        let elapsed = now.signed_duration_since(self.created_at).num_milliseconds();
        elapsed >= i64::try_from(self.duration_ms).unwrap_or(i64::MAX)
    }
}

/// Transient user-facing messages. Each one expires on its own timer.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    entries: Mutex<Vec<Notification>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(
        &self,
        message: impl Into<String>,
        kind: NotificationKind,
        duration_ms: Option<u64>,
    ) -> Uuid {
        self.notify_at(message, kind, duration_ms, Utc::now())
    }

    pub fn notify_at(
        &self,
        message: impl Into<String>,
        kind: NotificationKind,
        duration_ms: Option<u64>,
        now: DateTime<Utc>,
    ) -> Uuid {
        let notification = Notification {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
            duration_ms: duration_ms.unwrap_or(DEFAULT_DURATION_MS),
            created_at: now,
        };
        let id = notification.id;
        tracing::debug!(%id, kind = ?kind, message = %notification.message, "notification raised");
        let mut entries = self.entries.lock();
        entries.retain(|n| !n.is_expired(now));
        entries.push(notification);
        id
    }

    /// Returns whether a notification with `id` was present.
    pub fn dismiss(&self, id: Uuid) -> bool {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|n| n.id != id);
        entries.len() != before
    }

    pub fn active(&self, now: DateTime<Utc>) -> Vec<Notification> {
        self.entries
            .lock()
            .iter()
            .filter(|n| !n.is_expired(now))
            .cloned()
            .collect()
    }

    /// Drop expired entries, returning how many were removed.
    pub fn prune(&self, now: DateTime<Utc>) -> usize {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|n| !n.is_expired(now));
        before - entries.len()
    }

    /// Render cart events as notifications.
    pub fn attach(self: &Arc<Self>, store: &mut CartStore) {
        let center = Arc::clone(self);
        store.subscribe(move |event| {
            if let Some((message, kind)) = message_for(event) {
                center.notify(message, kind, None);
            }
        });
    }
}

pub fn message_for(event: &CartEvent) -> Option<(&'static str, NotificationKind)> {
    match event {
        CartEvent::ItemAdded { .. } => Some(("Added to cart", NotificationKind::Success)),
        CartEvent::ItemRemoved { .. } => Some(("Removed from cart", NotificationKind::Info)),
        CartEvent::CartCleared => Some(("Cart cleared", NotificationKind::Info)),
        CartEvent::PersistFailed { .. } => {
            Some(("Could not save your cart", NotificationKind::Error))
        }
        CartEvent::QuantityUpdated { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::{
        catalog::{Catalog, StaticCatalog},
        storage::MemoryStorage,
    };

    #[test]
    fn notifications_expire_after_duration() {
        let center = NotificationCenter::new();
        let t0 = Utc::now();
        center.notify_at("short", NotificationKind::Info, Some(1000), t0);
        center.notify_at("default", NotificationKind::Success, None, t0);

        let at = |ms| t0 + Duration::milliseconds(ms);
        assert_eq!(center.active(at(999)).len(), 2);
        let remaining: Vec<String> = center
            .active(at(1000))
            .into_iter()
            .map(|n| n.message)
            .collect();
        assert_eq!(remaining, vec!["default".to_string()]);

        assert_eq!(center.prune(at(3000)), 2);
        assert!(center.active(t0).is_empty());
    }

    #[test]
    fn expired_entries_are_dropped_on_notify() {
        let center = NotificationCenter::new();
        let t0 = Utc::now();
        for i in 0..1000 {
            let at = t0 + Duration::seconds(i);
            center.notify_at("Added to cart", NotificationKind::Success, None, at);
        }

        // Only the last three seconds' worth remain unexpired.
        assert_eq!(center.entries.lock().len(), 3);
        center.notify_at("later", NotificationKind::Info, None, t0 + Duration::hours(1));
        assert_eq!(center.entries.lock().len(), 1);
    }

    #[test]
    fn dismiss_reports_presence() {
        let center = NotificationCenter::new();
        let id = center.notify("hello", NotificationKind::Info, None);
        assert!(center.dismiss(id));
        assert!(!center.dismiss(id));
    }

    #[test]
    fn cart_events_become_messages() {
        let center = Arc::new(NotificationCenter::new());
        let mut store = CartStore::load(Arc::new(MemoryStorage::new()));
        center.attach(&mut store);

        let pro = StaticCatalog::habstick()
            .find("habstick-pro")
            .cloned()
            .unwrap();
        store.add_to_cart(&pro, 1, None);
        store.update_quantity("habstick-pro", 2);
        store.remove_from_cart("habstick-pro");
        store.clear_cart();

        let shown: Vec<(String, NotificationKind)> = center
            .active(Utc::now())
            .into_iter()
            .map(|n| (n.message, n.kind))
            .collect();
        assert_eq!(
            shown,
            vec![
                ("Added to cart".to_string(), NotificationKind::Success),
                ("Removed from cart".to_string(), NotificationKind::Info),
                ("Cart cleared".to_string(), NotificationKind::Info),
            ]
        );
    }
}
