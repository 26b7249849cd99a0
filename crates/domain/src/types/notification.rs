//! Account notifications

use serde::{Deserialize, Serialize};

use super::query::{Paging, QueryPairs, QueryParameters};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notification {
    pub id: i64,
    pub device_id: String,
    pub user_id: i64,
    #[serde(rename = "type")]
    pub notification_type: i64,
    pub message: String,
    pub created_datetime: String,
    pub title: String,
    pub read: bool,
    pub extra: Option<serde_json::Value>,
}

/// Optional filters for `GET /users/{user_id}/notifications`
///
/// The server sorts on `created_datetime` unless told otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationsParams {
    pub paging: Paging,
    pub device_id: Option<String>,
    pub location_id: Option<i32>,
    pub notification_type: Option<i32>,
    /// Bitmask of notification types
    pub types: Option<i32>,
    pub read: Option<bool>,
}

impl QueryParameters for NotificationsParams {
    fn append_to(&self, pairs: &mut QueryPairs) {
        self.paging.append_to(pairs);
        pairs
            .text("device_id", self.device_id.as_deref())
            .int("location_id", self.location_id)
            .int("type", self.notification_type)
            .int("types", self.types)
            .boolean("read", self.read);
    }
}
