//! Usage budgets

use serde::{Deserialize, Serialize};

use super::query::{Paging, QueryPairs, QueryParameters};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Budget {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub budget_type: String,
    pub value: f64,
    pub thresholds: Vec<i64>,
    pub actual: f64,
}

/// Optional paging for `GET .../devices/{device_id}/budgets`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetsParams {
    pub paging: Paging,
}

impl QueryParameters for BudgetsParams {
    fn append_to(&self, pairs: &mut QueryPairs) {
        self.paging.append_to(pairs);
    }
}
