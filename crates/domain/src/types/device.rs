//! Metering devices and bridges

use serde::{Deserialize, Serialize};

use super::query::{Paging, QueryPairs, QueryParameters};

/// A sensor or bridge registered to the account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Device {
    pub id: String,
    #[serde(rename = "type")]
    pub device_type: i64,
    pub location_id: i64,
    pub user_id: i64,
    pub bridge_id: Option<String>,
    pub oriented: bool,
    pub last_seen: Option<String>,
    pub connected: bool,
    pub battery_level: Option<String>,
    pub product: String,
}

/// Optional filters for `GET /users/{user_id}/devices`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DevicesParams {
    pub paging: Paging,
    /// Include user data in the response
    pub user: Option<bool>,
    /// Include location data in the response
    pub location: Option<bool>,
    /// Include devices shared with this account
    pub list_shared: Option<bool>,
    /// Only devices at a primary location
    pub primary_location: Option<bool>,
    pub location_id: Option<i32>,
    pub device_type: Option<i32>,
}

impl QueryParameters for DevicesParams {
    fn append_to(&self, pairs: &mut QueryPairs) {
        self.paging.append_to(pairs);
        pairs
            .boolean("user", self.user)
            .boolean("location", self.location)
            .boolean("list_shared", self.list_shared)
            .boolean("primary_location", self.primary_location)
            .int("location_id", self.location_id)
            .int("type", self.device_type);
    }
}

/// Optional expansions for `GET /users/{user_id}/devices/{device_id}`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceParams {
    pub user: Option<bool>,
    pub location: Option<bool>,
}

impl QueryParameters for DeviceParams {
    fn append_to(&self, pairs: &mut QueryPairs) {
        pairs.boolean("user", self.user).boolean("location", self.location);
    }
}
