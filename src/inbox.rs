// Inbox — parse a batch of notification payloads.
//
// Accepts whatever shape a saved API response comes in: a single
// notification, a bare array, or a list page with a `data` array. Each
// element is parsed on its own, so one malformed notification is skipped
// instead of failing the whole page.

use std::collections::HashSet;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::enums::NotificationType;
use crate::error::Result;
use crate::objects::Notification;

/// Parse every notification in `value`, keeping per-element results.
pub fn parse_notifications(value: &Value) -> Vec<Result<Notification>> {
    let elements: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => match map.get("data") {
            Some(Value::Array(items)) => items.iter().collect(),
            _ => vec![value],
        },
        _ => vec![value],
    };

    debug!(elements = elements.len(), "Parsing notification payloads");

    elements.into_iter().map(Notification::from_value).collect()
}

/// The notifications that parsed cleanly, in feed order, deduplicated by id.
#[derive(Debug, Default)]
pub struct Inbox {
    notifications: Vec<Notification>,
    skipped: usize,
}

impl Inbox {
    pub fn from_value(value: &Value) -> Self {
        let mut inbox = Inbox::default();
        let mut seen = HashSet::new();
        let mut duplicates = 0usize;

        for (index, result) in parse_notifications(value).into_iter().enumerate() {
            match result {
                Ok(notification) => {
                    if seen.insert(notification.id()) {
                        inbox.notifications.push(notification);
                    } else {
                        duplicates += 1;
                    }
                }
                Err(e) => {
                    warn!(index, error = %e, "Skipping malformed notification");
                    inbox.skipped += 1;
                }
            }
        }

        info!(
            parsed = inbox.notifications.len(),
            skipped = inbox.skipped,
            duplicates,
            "Loaded notifications"
        );

        inbox
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&value))
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// How many payloads failed to parse.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn unread(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter().filter(|n| !n.is_read())
    }

    pub fn by_type(&self, kind: NotificationType) -> impl Iterator<Item = &Notification> {
        self.notifications
            .iter()
            .filter(move |n| n.post_type() == kind)
    }

    pub fn find(&self, id: i64) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id() == id)
    }
}
