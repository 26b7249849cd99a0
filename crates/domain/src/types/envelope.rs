//! Response envelope shared by every endpoint
//!
//! Every API response wraps its payload in the same status/metadata object.
//! The payload type varies per endpoint, as does the shape of the
//! `pagination` marker: most endpoints send a plain string, a few send a
//! `{next, prev}` object. Both variants are the same generic type with a
//! different pagination parameter.

use serde::{Deserialize, Serialize};

use crate::utils::serde::null_as_default;

/// Structured pagination marker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

/// Generic response envelope
///
/// `T` is the `data` payload; `P` is the pagination marker type. `data`
/// decodes to `T::default()` when the field is absent or `null`, so a list
/// endpoint with nothing to report yields an empty list rather than an
/// error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize, P: Serialize",
    deserialize = "T: Deserialize<'de> + Default, P: Deserialize<'de>"
))]
pub struct Envelope<T, P = String> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub http_code: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub http_message: String,
    #[serde(default)]
    pub detailed: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: i64,
    #[serde(default)]
    pub pagination: Option<P>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: T,
}

/// Envelope whose pagination marker is a `{next, prev}` object
pub type PagedEnvelope<T> = Envelope<T, Pagination>;

/// Envelope for operations whose payload the caller does not inspect
pub type ResponseEnvelope = Envelope<serde_json::Value>;

impl<T, P> Envelope<T, P> {
    /// Consume the envelope and keep only its payload
    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T, P> Envelope<Vec<T>, P> {
    /// First record of a list payload
    ///
    /// Single-record endpoints still answer with a one-element list.
    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Item {
        id: i64,
    }

    #[test]
    fn test_full_envelope() {
        let json = r#"{
            "success": true,
            "code": 602,
            "message": "Request OK",
            "http_code": 200,
            "http_message": "OK",
            "detailed": null,
            "count": 2,
            "pagination": null,
            "data": [{"id": 1}, {"id": 2}]
        }"#;

        let envelope: Envelope<Vec<Item>> = serde_json::from_str(json).unwrap();

        assert!(envelope.success);
        assert_eq!(envelope.code, 602);
        assert_eq!(envelope.http_code, 200);
        assert_eq!(envelope.count, 2);
        assert_eq!(envelope.pagination, None);
        assert_eq!(envelope.first(), Some(&Item { id: 1 }));
        assert_eq!(envelope.into_data().len(), 2);
    }

    #[test]
    fn test_missing_data_is_empty() {
        let envelope: Envelope<Vec<Item>> =
            serde_json::from_str(r#"{"success":true,"message":"ok"}"#).unwrap();

        assert!(envelope.data.is_empty());
        assert_eq!(envelope.message, "ok");
    }

    #[test]
    fn test_null_data_is_empty() {
        let envelope: Envelope<Vec<Item>> = serde_json::from_str(r#"{"data":null}"#).unwrap();
        assert!(envelope.data.is_empty());
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result: Result<Envelope<Vec<Item>>, _> = serde_json::from_str(r#"{"data":[{"id":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_flat_pagination_marker() {
        let envelope: Envelope<Vec<Item>> =
            serde_json::from_str(r#"{"pagination":"cursor-2","data":[]}"#).unwrap();
        assert_eq!(envelope.pagination.as_deref(), Some("cursor-2"));
    }

    #[test]
    fn test_structured_pagination_marker() {
        let envelope: PagedEnvelope<Vec<Item>> = serde_json::from_str(
            r#"{"pagination":{"next":"/users/1/subscriptions?offset=50","prev":null},"data":[]}"#,
        )
        .unwrap();

        let pagination = envelope.pagination.unwrap();
        assert_eq!(pagination.next.as_deref(), Some("/users/1/subscriptions?offset=50"));
        assert_eq!(pagination.prev, None);
    }

    #[test]
    fn test_single_object_payload() {
        let envelope: Envelope<Item> = serde_json::from_str(r#"{"data":{"id":7}}"#).unwrap();
        assert_eq!(envelope.data, Item { id: 7 });
    }

    #[test]
    fn test_untyped_payload() {
        let envelope: ResponseEnvelope =
            serde_json::from_str(r#"{"success":true,"data":[{"anything":1}]}"#).unwrap();
        assert!(envelope.success);
        assert!(envelope.data.is_array());
    }
}
