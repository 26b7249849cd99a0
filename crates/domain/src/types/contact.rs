//! Contact details attached to the account

use serde::{Deserialize, Serialize};

use super::query::{Paging, QueryPairs, QueryParameters};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub id: i64,
    pub category: String,
    #[serde(rename = "type")]
    pub contact_type: String,
    pub detail: String,
}

/// Optional filters for `GET /users/{user_id}/contacts`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactsParams {
    pub paging: Paging,
    pub contact_type: Option<String>,
    pub category: Option<String>,
}

impl QueryParameters for ContactsParams {
    fn append_to(&self, pairs: &mut QueryPairs) {
        self.paging.append_to(pairs);
        pairs.text("type", self.contact_type.as_deref()).text("category", self.category.as_deref());
    }
}
