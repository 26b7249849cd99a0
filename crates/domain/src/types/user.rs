//! Account owner profile

use serde::{Deserialize, Serialize};

/// The authenticated account, returned by `GET /users/{user_id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: i64,
    pub email_address: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub status: String,
    #[serde(rename = "type")]
    pub user_type: String,
}
