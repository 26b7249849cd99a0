//! Triggered usage alerts

use serde::{Deserialize, Serialize};

use super::query::{Paging, QueryPairs, QueryParameters};

/// Query window that triggered an alert
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageAlertQuery {
    pub request_id: String,
    pub since_datetime: String,
    pub until_datetime: String,
    pub tz: String,
    pub bucket: String,
    pub device_id: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageAlert {
    pub id: i64,
    pub device_id: String,
    pub triggered_datetime: String,
    pub flume_leak: bool,
    pub query: UsageAlertQuery,
    pub event_rule_name: String,
}

/// Optional filters for `GET /users/{user_id}/usage-alerts`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageAlertsParams {
    pub paging: Paging,
    pub device_id: Option<String>,
    /// Only alerts classified as leaks
    pub flume_leak: Option<bool>,
}

impl QueryParameters for UsageAlertsParams {
    fn append_to(&self, pairs: &mut QueryPairs) {
        self.paging.append_to(pairs);
        pairs.text("device_id", self.device_id.as_deref()).boolean("flume_leak", self.flume_leak);
    }
}
