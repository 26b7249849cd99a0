//! Installation sites

use serde::{Deserialize, Serialize};

use super::query::{Paging, QueryPairs, QueryParameters};

/// A property where one or more devices are installed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub primary_location: bool,
    pub address: String,
    #[serde(rename = "address_2")]
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub tz: String,
    pub installation: Option<String>,
    pub insurer_id: Option<i64>,
    pub building_type: Option<String>,
    pub away_mode: bool,
}

/// Optional filters for `GET /users/{user_id}/locations`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationsParams {
    pub paging: Paging,
    /// Include locations shared with this account
    pub list_shared: Option<bool>,
}

impl QueryParameters for LocationsParams {
    fn append_to(&self, pairs: &mut QueryPairs) {
        self.paging.append_to(pairs);
        pairs.boolean("list_shared", self.list_shared);
    }
}

/// Body of `PATCH /users/{user_id}/locations/{location_id}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationPatch {
    pub away_mode: bool,
}
