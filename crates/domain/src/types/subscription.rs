//! Alert subscriptions

use serde::{Deserialize, Serialize};

use super::query::{Paging, QueryPairs, QueryParameters};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscription {
    pub id: i64,
    pub user_id: i64,
    pub alert_type: String,
    pub alert_info: Option<String>,
    pub device_id: String,
    /// Bitmask of notification channels
    pub notification_types: i64,
    pub created_datetime: String,
    pub updated_datetime: String,
}

/// Optional filters for `GET /users/{user_id}/subscriptions`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionsParams {
    pub paging: Paging,
    pub alert_type: Option<String>,
    /// Exact notification-type bitmask
    pub notification_types: Option<i32>,
    /// Any subscription containing this notification-type bit
    pub notification_type: Option<i32>,
    pub device_id: Option<String>,
    pub device_type: Option<i32>,
    pub location_id: Option<i32>,
}

impl QueryParameters for SubscriptionsParams {
    fn append_to(&self, pairs: &mut QueryPairs) {
        self.paging.append_to(pairs);
        pairs
            .text("alert_type", self.alert_type.as_deref())
            .int("notification_types", self.notification_types)
            .int("notification_type", self.notification_type)
            .text("device_id", self.device_id.as_deref())
            .int("device_type", self.device_type)
            .int("location_id", self.location_id);
    }
}
