//! Event rules and usage alert rules

use serde::{Deserialize, Serialize};

use super::query::{Paging, QueryPairs, QueryParameters};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventRule {
    pub id: String,
    pub name: String,
    pub active: bool,
    pub flow_rate: f64,
    pub duration: i64,
    pub notify_every: i64,
    pub notification_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageAlertRule {
    pub id: String,
    pub name: String,
    pub enabled: bool,
    pub threshold: f64,
    pub unit: String,
}

/// Optional paging for `GET .../devices/{device_id}/event_rules`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventRulesParams {
    pub paging: Paging,
}

impl QueryParameters for EventRulesParams {
    fn append_to(&self, pairs: &mut QueryPairs) {
        self.paging.append_to(pairs);
    }
}

/// Optional paging for `GET .../devices/{device_id}/usage_alert_rules`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageAlertRulesParams {
    pub paging: Paging,
}

impl QueryParameters for UsageAlertRulesParams {
    fn append_to(&self, pairs: &mut QueryPairs) {
        self.paging.append_to(pairs);
    }
}
