//! Water usage queries and live flow

use serde::{Deserialize, Serialize};

/// Aggregation bucket for a usage query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bucket {
    #[serde(rename = "MIN")]
    Minute,
    #[serde(rename = "HR")]
    Hour,
    #[serde(rename = "DAY")]
    Day,
    #[serde(rename = "MON")]
    Month,
    #[serde(rename = "YR")]
    Year,
}

/// Aggregation applied inside each bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operation {
    Sum,
    Avg,
    Min,
    Max,
    Cnt,
}

/// Volume unit for query results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Units {
    Gallons,
    Liters,
    CubicFeet,
    CubicMeters,
}

/// Body of `POST /users/{user_id}/devices/{device_id}/query`
///
/// Datetimes use the API's `YYYY-MM-DD HH:MM:SS` local-time format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryUsageRequest {
    pub request_id: String,
    pub bucket: Bucket,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_datetime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until_datetime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_multiplier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<super::query::SortDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<Units>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
}

impl QueryUsageRequest {
    pub fn new(request_id: impl Into<String>, bucket: Bucket) -> Self {
        Self {
            request_id: request_id.into(),
            bucket,
            since_datetime: None,
            until_datetime: None,
            group_multiplier: None,
            operation: None,
            sort_direction: None,
            units: None,
            types: Vec::new(),
        }
    }

    #[must_use]
    pub fn between(mut self, since: impl Into<String>, until: impl Into<String>) -> Self {
        self.since_datetime = Some(since.into());
        self.until_datetime = Some(until.into());
        self
    }

    #[must_use]
    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operation = Some(operation);
        self
    }

    #[must_use]
    pub fn with_units(mut self, units: Units) -> Self {
        self.units = Some(units);
        self
    }
}

/// One bucket of a usage query result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageQuery {
    pub value: f64,
    pub datetime: String,
}

/// Current flow reading from `.../query/active`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flow {
    pub active: bool,
    pub gpm: f64,
    pub datetime: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_unset_fields() {
        let body = serde_json::to_value(QueryUsageRequest::new("daily", Bucket::Day)).unwrap();
        assert_eq!(body, serde_json::json!({"request_id": "daily", "bucket": "DAY"}));
    }

    #[test]
    fn test_request_renders_enums() {
        let request = QueryUsageRequest::new("q1", Bucket::Hour)
            .between("2024-01-01 00:00:00", "2024-01-02 00:00:00")
            .with_operation(Operation::Sum)
            .with_units(Units::CubicFeet);

        let body = serde_json::to_value(request).unwrap();

        assert_eq!(body["bucket"], "HR");
        assert_eq!(body["operation"], "SUM");
        assert_eq!(body["units"], "CUBIC_FEET");
        assert_eq!(body["since_datetime"], "2024-01-01 00:00:00");
        assert!(body.get("types").is_none());
    }

    #[test]
    fn test_usage_value_accepts_fractions() {
        let usage: UsageQuery =
            serde_json::from_str(r#"{"value":12.5,"datetime":"2024-01-01 00:00:00"}"#).unwrap();
        assert!((usage.value - 12.5).abs() < f64::EPSILON);
    }
}
